// tests/analyzers.rs
mod common;

use clan_analyzer::analyze::{
    clan::th_weight, roster, rush_overview, strength, summarize_history, summarize_members,
    summarize_players, summarize_warlog,
};
use clan_analyzer::history::{HistoryStore, WarRef};
use clan_analyzer::model::{ClanMember, NamedRef, WarLogEntry, WarLogSide, WarState};
use clan_analyzer::rush::{ReferenceTables, RushStatus, RushThresholds};
use clan_analyzer::war::extract;
use common::{player, sample_war, with_heroes};

fn cm(name: &str, role: &str, trophies: u32, donated: u32, received: u32) -> ClanMember {
    ClanMember {
        tag: format!("#{name}"),
        name: name.into(),
        role: role.into(),
        trophies,
        exp_level: 100,
        donations: donated,
        donations_received: received,
        ..Default::default()
    }
}

#[test]
fn member_summary_roles_trophies_donors() {
    let mut gold = cm("B", "admin", 2000, 0, 0);
    gold.league = Some(NamedRef { id: 1, name: "Gold League I".into() });
    let members = vec![
        cm("A", "member", 1000, 100, 50),
        gold,
        cm("C", "member", 3000, 300, 0),
    ];
    let s = summarize_members(&members, 2);
    assert_eq!(s.count, 3);
    assert_eq!(s.roles[0], ("member".to_string(), 2));
    assert_eq!((s.trophies.total, s.trophies.max, s.trophies.min), (6000, 3000, 1000));
    assert_eq!(s.top_donors.len(), 2);
    assert_eq!(s.top_donors[0].name, "C");
    // nothing received: ratio is the raw donation count
    assert!((s.top_donors[0].ratio - 300.0).abs() < 1e-9);
    assert!((s.top_donors[1].ratio - 2.0).abs() < 1e-9);
    assert_eq!(s.total_donations, 400);
    assert!(s.leagues.iter().any(|(l, n)| l == "Unranked" && *n == 2));
}

#[test]
fn empty_roster_summaries_are_zero() {
    let s = summarize_members(&[], 10);
    assert_eq!(s.trophies.avg, 0.0);
    assert!(s.top_donors.is_empty());
    let p = summarize_players(&[], 10);
    assert!(p.town_halls.is_empty());
    let c = strength(&[]);
    assert_eq!(c.score, 0);
    assert!(c.recommendations.is_empty());
}

#[test]
fn player_summary_hero_spread() {
    let players = vec![
        with_heroes(player("#A", "A", 14), &[("Barbarian King", 80), ("Archer Queen", 85)]),
        with_heroes(player("#B", "B", 12), &[("Barbarian King", 60)]),
    ];
    let s = summarize_players(&players, 10);
    assert_eq!(s.town_halls.get(&14), Some(&1));
    let bk = &s.heroes["Barbarian King"];
    assert_eq!((bk.max, bk.min), (80, 60));
    assert!((bk.avg - 70.0).abs() < 1e-9);
    assert_eq!(s.hero_owners["Archer Queen"], 1);
    assert_eq!(s.top_hero_totals[0], ("A".to_string(), 165, 2));
}

#[test]
fn roster_orders_by_town_hall_then_trophies() {
    let mut a = player("#A", "A", 12);
    a.trophies = 1000;
    let mut b = player("#B", "B", 14);
    b.trophies = 500;
    let mut c = player("#C", "C", 12);
    c.trophies = 3000;
    let players = vec![a, b, c];
    let names: Vec<&str> = roster(&players).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "C", "A"]);
}

#[test]
fn strength_score_and_recommendations() {
    assert_eq!(th_weight(17), 100);
    assert_eq!(th_weight(5), 5);

    let mut a = with_heroes(player("#A", "A", 10), &[("Barbarian King", 30)]);
    a.war_stars = 250;
    let mut b = player("#B", "B", 9);
    b.donations = 10;
    let s = strength(&[a, b]);
    assert_eq!(s.th_power, 30 + 20);
    assert_eq!(s.hero_levels, 30);
    assert_eq!(s.score, 50 + 60 + 2);
    assert_eq!(s.below_th12, 2);
    assert_eq!(s.inactive, vec!["A".to_string()]);
    assert_eq!(s.recommendations.len(), 2);
}

#[test]
fn warlog_summary_counts_results_and_sizes() {
    let war = |result: Option<&str>, size, ours, theirs| WarLogEntry {
        result: result.map(Into::into),
        team_size: size,
        clan: WarLogSide { stars: ours, destruction_percentage: 80.0, ..Default::default() },
        opponent: WarLogSide { stars: theirs, destruction_percentage: 60.0, ..Default::default() },
        ..Default::default()
    };
    let log = vec![
        war(Some("win"), 15, 40, 30),
        war(Some("win"), 15, 38, 35),
        war(Some("lose"), 10, 20, 25),
        war(None, 15, 0, 0),
    ];
    let s = summarize_warlog(&log);
    assert_eq!(s.wars, 4);
    assert_eq!(s.wins(), 2);
    assert!((s.win_rate() - 50.0).abs() < 1e-9);
    assert_eq!(s.star_difference(), 98 - 90);
    assert_eq!(s.sizes.get(&15), Some(&3));
    assert!(s.results.iter().any(|(r, n, _)| r == "unknown" && *n == 1));

    let empty = summarize_warlog(&[]);
    assert_eq!(empty.win_rate(), 0.0);
    assert_eq!(empty.avg_stars, 0.0);
}

#[test]
fn rush_overview_sorts_worst_first() {
    let players = vec![
        with_heroes(player("#A", "Fine", 10), &[("Barbarian King", 30)]),
        with_heroes(player("#B", "Behind", 13), &[("Barbarian King", 30)]),
        player("#C", "Fresh", 2),
    ];
    let o = rush_overview(&players, &ReferenceTables::default(), &RushThresholds::default());
    assert_eq!(o.entries[0].name, "Behind");
    assert_eq!(o.rushed, 1);
    assert_eq!(o.total(), 3);
    assert_eq!(o.not_rushed(), 2);
    assert_eq!(o.get("#B").unwrap().report.status, RushStatus::SeverelyRushedHeroes);
    assert_eq!(o.hero_rushed(10).len(), 1);
}

#[test]
fn history_leaderboard_needs_five_attacks() {
    let mut store = HistoryStore::empty("#CLAN");
    let stats = extract(&sample_war(WarState::WarEnded));
    for round in 1..=3 {
        store.record_war(stats.values(), &WarRef::league("2025-03", round, "#W"));
    }
    let h = summarize_history(&store, 10);
    assert_eq!(h.players_tracked, 2);
    assert_eq!(h.total_attacks, 6);
    assert_eq!(h.leaderboard.len(), 1);
    assert_eq!(h.leaderboard[0].tag, "#P1");
    assert_eq!(h.most_attacks.len(), 1);
    assert!((h.avg_stars - 2.5).abs() < 1e-9);
}
