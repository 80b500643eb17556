// src/report/console.rs

// Text report sections. Each renderer writes into any `fmt::Write` so the
// runner can print to stdout and tests can render into a String.

use std::fmt::{self, Write};

use indexmap::IndexMap;
use serde_json::Value;

use crate::analyze::{
    AttackSummary, ClanStrength, HistorySummary, MemberSummary, PlayerSummary, RushOverview,
    WarLogSummary,
};
use crate::model::{Clan, ClanWar, Player, WarLogEntry, WarState};
use crate::rush::Category;
use crate::war::PlayerWarStats;
use crate::war::cwl::LeagueSummary;

const WIDTH: usize = 80;

/// Truncate to `n` characters (not bytes).
pub fn clip(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn name_of(v: &Option<Value>) -> &str {
    v.as_ref()
        .and_then(|v| v.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("N/A")
}

pub fn separator(w: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(w, "\n{}", "=".repeat(WIDTH))?;
    if !title.is_empty() {
        writeln!(w, "  {title}")?;
        writeln!(w, "{}", "=".repeat(WIDTH))?;
    }
    Ok(())
}

pub fn clan_info(w: &mut impl Write, clan: &Clan) -> fmt::Result {
    separator(w, "CLAN INFORMATION")?;
    writeln!(w, "\nClan Name: {}", clan.name)?;
    writeln!(w, "Clan Tag: {}", clan.tag)?;
    writeln!(w, "Description: {}", clan.description)?;
    writeln!(w, "Location: {}", name_of(&clan.location))?;
    writeln!(w, "Language: {}", name_of(&clan.chat_language))?;
    writeln!(w, "Clan Level: {}", clan.clan_level)?;
    writeln!(w, "Clan Points: {}", clan.clan_points)?;
    writeln!(w, "Builder Base Points: {}", clan.clan_builder_base_points)?;
    writeln!(w, "Capital Points: {}", clan.clan_capital_points)?;
    writeln!(w, "Members: {}/50", clan.members)?;
    writeln!(w, "Type: {}", clan.kind)?;
    writeln!(w, "War Frequency: {}", clan.war_frequency)?;
    writeln!(w, "War Win Streak: {}", clan.war_win_streak)?;
    writeln!(w, "War Record: {} W / {} T / {} L", clan.war_wins, clan.war_ties, clan.war_losses)?;
    writeln!(w, "War League: {}", clan.war_league.as_ref().map_or("N/A", |l| l.name.as_str()))?;
    writeln!(w, "Capital League: {}", clan.capital_league.as_ref().map_or("N/A", |l| l.name.as_str()))?;
    if clan.total_wars() > 0 {
        writeln!(w, "\nWar Win Rate: {:.1}%", clan.win_rate())?;
    }

    if !clan.labels.is_empty() {
        writeln!(w, "\nClan Labels:")?;
        for label in &clan.labels {
            writeln!(w, "   - {}", label.get("name").and_then(Value::as_str).unwrap_or("N/A"))?;
        }
    }

    if let Some(capital) = &clan.clan_capital {
        writeln!(w, "\nCLAN CAPITAL:")?;
        let hall = capital.get("capitalHallLevel").and_then(Value::as_u64).unwrap_or(0);
        writeln!(w, "   Capital Hall Level: {hall}")?;
        if let Some(districts) = capital.get("districts").and_then(Value::as_array) {
            writeln!(w, "   Districts ({}):", districts.len())?;
            for d in districts {
                let name = d.get("name").and_then(Value::as_str).unwrap_or("N/A");
                let level = d.get("districtHallLevel").and_then(Value::as_u64).unwrap_or(0);
                writeln!(w, "   - {name} (Level {level})")?;
            }
        }
    }
    Ok(())
}

pub fn members(w: &mut impl Write, m: &MemberSummary) -> fmt::Result {
    separator(w, "MEMBER ANALYSIS")?;
    writeln!(w, "\nROLE DISTRIBUTION:")?;
    for (role, n) in &m.roles {
        writeln!(w, "   {role}: {n}")?;
    }
    writeln!(w, "\nTROPHY STATISTICS:")?;
    writeln!(w, "   Total Clan Trophies: {}", m.trophies.total)?;
    writeln!(w, "   Average Trophies: {:.0}", m.trophies.avg)?;
    writeln!(w, "   Highest: {}", m.trophies.max)?;
    writeln!(w, "   Lowest: {}", m.trophies.min)?;
    writeln!(w, "\nEXPERIENCE LEVEL STATISTICS:")?;
    writeln!(w, "   Average Level: {:.1}", m.exp_levels.avg)?;
    writeln!(w, "   Highest: {}", m.exp_levels.max)?;
    writeln!(w, "   Lowest: {}", m.exp_levels.min)?;
    writeln!(w, "\nLEAGUE DISTRIBUTION:")?;
    for (league, n) in &m.leagues {
        writeln!(w, "   - {league}: {n} members")?;
    }
    writeln!(w, "\nTOP {} DONATORS:", m.top_donors.len())?;
    for (i, d) in m.top_donors.iter().enumerate() {
        writeln!(
            w,
            "   {}. {}: {} donated | {} received | Ratio: {:.2}",
            i + 1, d.name, d.donated, d.received, d.ratio
        )?;
    }
    writeln!(w, "\n   Clan Total Donations: {}", m.total_donations)?;
    writeln!(w, "   Clan Total Received: {}", m.total_received)
}

fn bar(n: usize) -> String {
    "#".repeat(n)
}

pub fn players(w: &mut impl Write, p: &PlayerSummary) -> fmt::Result {
    separator(w, "DETAILED PLAYER ANALYSIS")?;
    writeln!(w, "\nTOWN HALL DISTRIBUTION:")?;
    for (th, n) in p.town_halls.iter().rev() {
        writeln!(w, "   TH{th:2}: {} ({n})", bar(*n))?;
    }
    if !p.builder_halls.is_empty() {
        writeln!(w, "\nBUILDER HALL DISTRIBUTION:")?;
        for (bh, n) in p.builder_halls.iter().rev() {
            writeln!(w, "   BH{bh:2}: {} ({n})", bar(*n))?;
        }
    }

    writeln!(w, "\nHERO ANALYSIS:")?;
    for (hero, stats) in &p.heroes {
        writeln!(w, "\n   {hero}:")?;
        writeln!(w, "      Players with hero: {}", p.hero_owners.get(hero).copied().unwrap_or(0))?;
        writeln!(w, "      Average Level: {:.1}", stats.avg)?;
        writeln!(w, "      Highest: {}", stats.max)?;
        writeln!(w, "      Lowest: {}", stats.min)?;
    }

    writeln!(w, "\nTOP PLAYERS BY COMBINED HERO LEVELS:")?;
    for (i, (name, total, count)) in p.top_hero_totals.iter().enumerate() {
        writeln!(w, "   {}. {name}: {total} total ({count} heroes)", i + 1)?;
    }
    writeln!(w, "\nTOP BY TROOP LEVELS:")?;
    for (i, (name, total, _)) in p.top_troop_totals.iter().enumerate() {
        writeln!(w, "   {}. {name}: {total} total troop levels", i + 1)?;
    }

    writeln!(w, "\nWAR STARS:")?;
    writeln!(w, "   Total Clan War Stars: {}", p.war_stars.total)?;
    writeln!(w, "   Average War Stars: {:.0}", p.war_stars.avg)?;
    for (i, (name, stars)) in p.top_war_stars.iter().enumerate() {
        writeln!(w, "   {}. {name}: {stars}", i + 1)?;
    }
    writeln!(w, "\nTOP BY ATTACK WINS:")?;
    for (i, (name, n)) in p.top_attack_wins.iter().enumerate() {
        writeln!(w, "   {}. {name}: {n} wins", i + 1)?;
    }
    writeln!(w, "\nTOP BY DEFENSE WINS:")?;
    for (i, (name, n)) in p.top_defense_wins.iter().enumerate() {
        writeln!(w, "   {}. {name}: {n} wins", i + 1)?;
    }
    writeln!(w, "\nCLAN CAPITAL CONTRIBUTIONS:")?;
    writeln!(w, "   Total Clan Contributions: {}", p.capital_total)?;
    for (i, (name, n)) in p.top_capital.iter().enumerate() {
        writeln!(w, "   {}. {name}: {n}", i + 1)?;
    }
    Ok(())
}

pub fn roster(w: &mut impl Write, sorted: &[&Player]) -> fmt::Result {
    separator(w, "COMPLETE MEMBER ROSTER")?;
    writeln!(
        w,
        "\n{:<3} {:<18} {:<4} {:<6} {:<9} {:<10} {:<10}",
        "#", "Name", "TH", "Level", "Trophies", "War Stars", "Donations"
    )?;
    writeln!(w, "{}", "-".repeat(70))?;
    for (i, p) in sorted.iter().enumerate() {
        writeln!(
            w,
            "{:<3} {:<18} {:<4} {:<6} {:<9} {:<10} {:<10}",
            i + 1,
            clip(&p.name, 17),
            p.town_hall_level,
            p.exp_level,
            p.trophies,
            p.war_stars,
            p.donations
        )?;
    }
    Ok(())
}

pub fn strength(w: &mut impl Write, s: &ClanStrength) -> fmt::Result {
    separator(w, "CLAN STRENGTH ANALYSIS")?;
    writeln!(w, "\nCLAN POWER METRICS:")?;
    writeln!(w, "   Town Hall Power Score: {}", s.th_power)?;
    writeln!(w, "   Total Hero Levels: {}", s.hero_levels)?;
    writeln!(w, "   Total War Stars: {}", s.war_stars)?;
    writeln!(w, "\n   OVERALL STRENGTH SCORE: {}", s.score)?;
    if !s.recommendations.is_empty() {
        writeln!(w, "\nRECOMMENDATIONS:")?;
        for r in &s.recommendations {
            writeln!(w, "   - {r}")?;
        }
    }
    Ok(())
}

pub fn rush(w: &mut impl Write, r: &RushOverview) -> fmt::Result {
    separator(w, "RUSH ANALYSIS")?;
    writeln!(w, "\nCLAN RUSH OVERVIEW:")?;
    writeln!(w, "   Total Members: {}", r.total())?;
    writeln!(w, "   Rushed Players: {} ({:.1}%)", r.rushed, r.rushed_share())?;
    writeln!(w, "   Not Rushed: {} ({:.1}%)", r.not_rushed(), 100.0 - r.rushed_share())?;

    writeln!(w, "\nSTATUS DISTRIBUTION:")?;
    for (status, n) in &r.statuses {
        writeln!(w, "   {status}: {n}")?;
    }

    writeln!(w, "\n{:<3} {:<18} {:<4} {:<8} {:<8} {:<25}", "#", "Player", "TH", "Score", "Heroes", "Status")?;
    writeln!(w, "{}", "-".repeat(75))?;
    for (i, e) in r.entries.iter().enumerate() {
        writeln!(
            w,
            "{:<3} {:<18} {:<4} {:<8.1} -{:<7} {}",
            i + 1,
            clip(&e.name, 17),
            e.th,
            e.report.rush_score,
            e.report.total_missing_hero_levels,
            e.report.status
        )?;
    }

    let worst = r.hero_rushed(10);
    if !worst.is_empty() {
        writeln!(w, "\nPLAYERS WITH MOST RUSHED HEROES:")?;
        for e in worst {
            let heroes: Vec<String> = e
                .report
                .deficits(Category::Hero)
                .iter()
                .take(4)
                .map(|h| format!("{}: {}/{}", h.name, h.current, h.target))
                .collect();
            writeln!(
                w,
                "   - {} (TH{}): -{} levels [{}]",
                e.name,
                e.th,
                e.report.total_missing_hero_levels,
                heroes.join(", ")
            )?;
        }
    }
    Ok(())
}

pub fn warlog(w: &mut impl Write, s: &WarLogSummary, log: &[WarLogEntry]) -> fmt::Result {
    separator(w, "WAR LOG ANALYSIS")?;
    if s.wars == 0 {
        return writeln!(w, "\nWar log is not public or no wars found.");
    }
    writeln!(w, "\nTotal Wars in Log: {}", s.wars)?;
    writeln!(w, "\nWAR RESULTS:")?;
    for (result, n, pct) in &s.results {
        writeln!(w, "   {result}: {n} ({pct:.1}%)")?;
    }
    writeln!(w, "\nSTAR STATISTICS:")?;
    writeln!(w, "   Total Stars Earned: {}", s.stars_for)?;
    writeln!(w, "   Total Stars Conceded: {}", s.stars_against)?;
    writeln!(w, "   Star Difference: {:+}", s.star_difference())?;
    writeln!(w, "   Average Stars per War: {:.1}", s.avg_stars)?;
    writeln!(w, "\nDESTRUCTION STATISTICS:")?;
    writeln!(w, "   Average Destruction Dealt: {:.1}%", s.avg_destruction_for)?;
    writeln!(w, "   Average Destruction Received: {:.1}%", s.avg_destruction_against)?;
    writeln!(w, "\nWAR SIZE DISTRIBUTION:")?;
    for (size, n) in s.sizes.iter().rev() {
        writeln!(w, "   {size}v{size}: {n} wars")?;
    }

    writeln!(w, "\nRECENT 10 WARS:")?;
    writeln!(w, "   {:<25} {:<8} {:<10} {:<15}", "Opponent", "Result", "Stars", "Destruction")?;
    writeln!(w, "   {}", "-".repeat(60))?;
    for war in log.iter().take(10) {
        let stars = format!("{}-{}", war.clan.stars, war.opponent.stars);
        writeln!(
            w,
            "   {:<25} {:<8} {:<10} {:.1}% vs {:.1}%",
            clip(war.opponent.name.as_deref().unwrap_or("Unknown"), 24),
            war.result.as_deref().unwrap_or("N/A"),
            stars,
            war.clan.destruction_percentage,
            war.opponent.destruction_percentage
        )?;
    }
    Ok(())
}

/// Per-attack table plus the summary block.
pub fn war_attacks(
    w: &mut impl Write,
    label: &str,
    stats: &IndexMap<String, PlayerWarStats>,
    summary: &AttackSummary,
) -> fmt::Result {
    separator(w, &format!("DETAILED ATTACK ANALYSIS - {label}"))?;
    writeln!(w, "\n{:<4} {:<16} {:<4} {:<6} {:<3} {:<7} {:<5}", "#", "Attacker", "TH", "Target", "*", "%", "Hit")?;
    writeln!(w, "{}", "-".repeat(60))?;
    for p in stats.values() {
        if p.attacks.is_empty() {
            writeln!(w, "{:<4} {:<16} TH{:<2}   NO ATTACKS USED", p.map_position, clip(&p.name, 15), p.th)?;
        }
        for a in &p.attacks {
            writeln!(
                w,
                "{:<4} {:<16} TH{:<2} -> #{:<3} {}*   {:>5.1}%  {}",
                p.map_position,
                clip(&p.name, 15),
                p.th,
                a.defender_position,
                a.stars,
                a.destruction,
                a.hit.as_str()
            )?;
        }
    }

    separator(w, &format!("ATTACK SUMMARY - {label}"))?;
    if summary.attacks > 0 {
        let b = &summary.buckets;
        writeln!(w, "\n   Total Attacks: {}", summary.attacks)?;
        writeln!(w, "   Total Stars: {} ({:.2} avg)", summary.stars, summary.avg_stars())?;
        writeln!(w, "   Total Destruction: {:.1}% ({:.1}% avg)", summary.destruction, summary.avg_destruction())?;
        writeln!(w, "\n   Three Stars: {} ({:.1}%)", b.three_stars, summary.share(b.three_stars))?;
        writeln!(w, "   Two Stars:   {} ({:.1}%)", b.two_stars, summary.share(b.two_stars))?;
        writeln!(w, "   One Star:    {} ({:.1}%)", b.one_star, summary.share(b.one_star))?;
        writeln!(w, "   Zero Stars:  {} ({:.1}%)", b.zero_stars, summary.share(b.zero_stars))?;
        writeln!(w, "\n   HIT DIRECTION:")?;
        writeln!(w, "   Hit Up (higher TH):   {} attacks", summary.hit_up)?;
        writeln!(w, "   Hit Same (equal TH):  {} attacks", summary.hit_same)?;
        writeln!(w, "   Hit Down (lower TH):  {} attacks", summary.hit_down)?;
    }
    if !summary.missed.is_empty() {
        writeln!(w, "\n   MISSED ATTACKS:")?;
        for (name, n) in &summary.missed {
            writeln!(w, "   - {name}: {n} attack(s) not used")?;
        }
    }
    Ok(())
}

pub fn current_war_header(w: &mut impl Write, war: Option<&ClanWar>) -> fmt::Result {
    separator(w, "CURRENT WAR")?;
    let Some(war) = war.filter(|cw| cw.state != WarState::NotInWar) else {
        return writeln!(w, "\nClan is not currently in a war.");
    };
    writeln!(w, "\nWar State: {}", war.state.as_str())?;
    writeln!(w, "\n{} vs {}", war.clan.name, war.opponent.name)?;
    writeln!(w, "   Team Size: {0}v{0}", war.team_size)?;
    if war.state.has_started() {
        writeln!(w, "\nCURRENT SCORE:")?;
        writeln!(w, "   Your Clan: {} stars ({:.1}%)", war.clan.stars, war.clan.destruction_percentage)?;
        writeln!(w, "   Opponent:  {} stars ({:.1}%)", war.opponent.stars, war.opponent.destruction_percentage)?;
        writeln!(
            w,
            "   Attacks Used: {}/{}",
            war.clan.attacks,
            war.team_size * war.attacks_per_member()
        )?;
    }
    Ok(())
}

pub fn league_absent(w: &mut impl Write) -> fmt::Result {
    separator(w, "CLAN WAR LEAGUE ANALYSIS")?;
    writeln!(w, "\nNo active CWL found. CWL data is only available during and shortly after CWL week.")
}

pub fn league(w: &mut impl Write, s: &LeagueSummary) -> fmt::Result {
    separator(w, "CLAN WAR LEAGUE ANALYSIS")?;
    if s.previously_complete {
        writeln!(w, "\nCWL Season {} already recorded in history.", s.season)?;
    }
    writeln!(w, "\nCWL Season: {}", s.season)?;
    writeln!(w, "State: {}", s.state)?;
    writeln!(w, "\nClans in Group ({}):", s.clans.len())?;
    for (name, tag) in &s.clans {
        writeln!(w, "   - {name} ({tag})")?;
    }
    writeln!(w, "\nRounds: {}", s.round_count)?;

    for rw in &s.wars {
        let war = &rw.war;
        writeln!(w, "\n   CWL ROUND {}: {} vs {} [{}]", rw.round, war.clan.name, war.opponent.name, war.state.as_str())?;
        if war.state.has_started() {
            writeln!(
                w,
                "   Score: {} vs {} stars, {:.1}% vs {:.1}%",
                war.clan.stars, war.opponent.stars, war.clan.destruction_percentage, war.opponent.destruction_percentage
            )?;
        } else if war.state == WarState::Preparation {
            writeln!(w, "   War is in preparation phase")?;
        }
    }

    if s.wars_analyzed == 0 || s.players.is_empty() {
        return Ok(());
    }

    separator(w, "CWL OVERALL PLAYER PERFORMANCE")?;
    writeln!(
        w,
        "\n{:<3} {:<18} {:<4} {:<5} {:<5} {:<5} {:<6} {:<4} {:<4} {:<7}",
        "#", "Player", "TH", "Wars", "Atks", "Stars", "Avg", "3*", "2*", "Avg%"
    )?;
    writeln!(w, "{}", "-".repeat(75))?;
    for (i, p) in s.ranked().into_iter().filter(|p| p.attacks_used > 0).enumerate() {
        writeln!(
            w,
            "{:<3} {:<18} {:<4} {:<5} {:<5} {:<5} {:<6.2} {:<4} {:<4} {:<7.1}",
            i + 1,
            clip(&p.name, 17),
            p.th,
            p.wars_participated,
            p.attacks_used,
            p.total_stars,
            p.avg_stars(),
            p.stars.three_stars,
            p.stars.two_stars,
            p.avg_destruction()
        )?;
    }

    let attacks = s.total_attacks();
    writeln!(w, "\nCWL TOTALS:")?;
    writeln!(w, "   Wars Analyzed: {}", s.wars_analyzed)?;
    writeln!(w, "   Total Attacks: {attacks}")?;
    writeln!(w, "   Total Stars: {}", s.total_stars())?;
    if attacks > 0 {
        let a = f64::from(attacks);
        writeln!(w, "   Three Star Rate: {:.1}%", f64::from(s.total_three_stars()) / a * 100.0)?;
        writeln!(w, "   Average Stars/Attack: {:.2}", f64::from(s.total_stars()) / a)?;
    }

    let mut by_stars = s.ranked();
    by_stars.retain(|p| p.total_stars > 0);
    writeln!(w, "\n   Most Stars:")?;
    for (i, p) in by_stars.iter().take(5).enumerate() {
        writeln!(w, "   {}. {}: {} stars ({} attacks)", i + 1, p.name, p.total_stars, p.attacks_used)?;
    }

    let mut by_avg: Vec<_> = s.players.values().filter(|p| p.attacks_used >= 2).collect();
    by_avg.sort_by(|a, b| b.avg_stars().total_cmp(&a.avg_stars()));
    if !by_avg.is_empty() {
        writeln!(w, "\n   Best Average (min 2 attacks):")?;
        for (i, p) in by_avg.iter().take(5).enumerate() {
            writeln!(w, "   {}. {}: {:.2} stars/atk ({} attacks)", i + 1, p.name, p.avg_stars(), p.attacks_used)?;
        }
    }

    let mut by_triples: Vec<_> = s.players.values().filter(|p| p.stars.three_stars > 0).collect();
    by_triples.sort_by(|a, b| b.stars.three_stars.cmp(&a.stars.three_stars));
    writeln!(w, "\n   Most Three Stars:")?;
    for (i, p) in by_triples.iter().take(5).enumerate() {
        writeln!(w, "   {}. {}: {} three-stars", i + 1, p.name, p.stars.three_stars)?;
    }
    Ok(())
}

pub fn history(w: &mut impl Write, h: &HistorySummary<'_>) -> fmt::Result {
    separator(w, "HISTORICAL DATA SUMMARY")?;
    writeln!(w, "\nDATA OVERVIEW:")?;
    writeln!(w, "   Players tracked: {}", h.players_tracked)?;
    writeln!(w, "   CWL Seasons recorded: {}", h.seasons_recorded)?;
    writeln!(w, "   Wars recorded: {}", h.wars_recorded)?;
    writeln!(w, "   Last updated: {}", h.last_updated.unwrap_or("Never"))?;
    if h.players_tracked == 0 {
        return writeln!(w, "\n   No historical attack data yet. Run during/after wars to collect data!");
    }

    writeln!(w, "\nALL-TIME STATISTICS:")?;
    writeln!(w, "   Total Attacks Recorded: {}", h.total_attacks)?;
    writeln!(w, "   Total Stars Earned: {}", h.total_stars)?;
    writeln!(w, "   Total Three-Stars: {}", h.total_three_stars)?;
    if h.total_attacks > 0 {
        writeln!(w, "   All-Time Average: {:.2} stars/attack", h.avg_stars)?;
        writeln!(w, "   All-Time 3-Star Rate: {:.1}%", h.three_star_rate)?;
    }

    if !h.leaderboard.is_empty() {
        writeln!(w, "\nALL-TIME LEADERBOARD (min 5 attacks):")?;
        writeln!(w, "   {:<3} {:<18} {:<4} {:<8} {:<7} {:<6} {:<7}", "#", "Player", "TH", "Attacks", "Stars", "Avg", "3*%")?;
        writeln!(w, "   {}", "-".repeat(60))?;
        for (i, p) in h.leaderboard.iter().take(15).enumerate() {
            writeln!(
                w,
                "   {:<3} {:<18} {:<4} {:<8} {:<7} {:<6.2} {:<7.1}",
                i + 1,
                clip(&p.name, 17),
                p.current_th,
                p.total_attacks,
                p.total_stars,
                p.avg_stars(),
                p.three_star_rate()
            )?;
        }
    }

    writeln!(w, "\n   Most Attacks All-Time:")?;
    for (i, p) in h.most_attacks.iter().enumerate() {
        writeln!(w, "   {}. {}: {} attacks, {} stars", i + 1, p.name, p.total_attacks, p.total_stars)?;
    }
    writeln!(w, "\n   Most Three-Stars All-Time:")?;
    for (i, p) in h.most_three_stars.iter().enumerate() {
        writeln!(w, "   {}. {}: {} three-stars", i + 1, p.name, p.stars.three_stars)?;
    }

    if !h.seasons.is_empty() {
        writeln!(w, "\nCWL SEASON HISTORY:")?;
        for s in &h.seasons {
            writeln!(
                w,
                "   - {}: {} stars ({} attacks) - {}",
                s.season,
                s.total_stars,
                s.total_attacks,
                if s.complete { "Complete" } else { "In Progress" }
            )?;
        }
    }
    Ok(())
}
