// tests/history_store.rs
mod common;

use std::fs;

use clan_analyzer::history::{CwlSeasonRecord, HistoryStore, WarRef};
use clan_analyzer::model::WarState;
use clan_analyzer::war::{AttackOutcome, HitDirection, extract};
use common::sample_war;

fn war_ref() -> WarRef {
    WarRef::regular(&sample_war(WarState::InWar)).dated("2025-03-02T10:00:00.000000")
}

#[test]
fn a_war_is_counted_once_per_player() {
    let mut store = HistoryStore::empty("#CLAN");
    let stats = extract(&sample_war(WarState::InWar));
    let r = war_ref();

    assert_eq!(store.record_war(stats.values(), &r), 2);
    assert_eq!(store.record_war(stats.values(), &r), 0);

    let alpha = &store.players["#P1"];
    assert_eq!(alpha.total_attacks, 2);
    assert_eq!(alpha.total_stars, 5);
    assert_eq!(alpha.wars_participated, 1);
    assert_eq!(alpha.war_ids, vec![r.id.clone()]);
    assert_eq!(alpha.attacks_history.len(), 2);
    assert_eq!(alpha.attacks_history[0].attacker_th, 12);

    let bravo = &store.players["#P2"];
    assert_eq!(bravo.total_attacks, 0);
    assert_eq!(bravo.wars_participated, 1);
}

#[test]
fn refetched_war_with_more_attacks_is_discarded() {
    let mut store = HistoryStore::empty("#CLAN");
    let mut war = sample_war(WarState::InWar);
    war.clan.members[1].attacks.truncate(1);
    let r = war_ref();
    store.record_war(extract(&war).values(), &r);
    assert_eq!(store.players["#P1"].total_attacks, 1);

    // Same war later in the day, both attacks in
    let later = sample_war(WarState::WarEnded);
    assert_eq!(store.record_war(extract(&later).values(), &r), 0);
    assert_eq!(store.players["#P1"].total_attacks, 1);
}

#[test]
fn name_and_town_hall_refresh_even_on_duplicates() {
    let mut store = HistoryStore::empty("#CLAN");
    let stats = extract(&sample_war(WarState::InWar));
    let r = war_ref();
    store.record_war(stats.values(), &r);

    assert!(!store.record_attacks("#P1", "Alpha Renamed", 13, &r, &[]));
    let alpha = &store.players["#P1"];
    assert_eq!(alpha.name, "Alpha Renamed");
    assert_eq!(alpha.current_th, 13);
    assert_eq!(alpha.total_attacks, 2);

    // never lowers
    store.record_attacks("#P1", "Alpha Renamed", 11, &r, &[]);
    assert_eq!(store.players["#P1"].current_th, 13);
}

#[test]
fn distinct_wars_accumulate() {
    let mut store = HistoryStore::empty("#CLAN");
    let stats = extract(&sample_war(WarState::WarEnded));
    store.record_war(stats.values(), &war_ref());
    store.record_war(stats.values(), &WarRef::league("2025-03", 1, "#W1"));
    let alpha = &store.players["#P1"];
    assert_eq!(alpha.wars_participated, 2);
    assert_eq!(alpha.total_attacks, 4);
    assert!((alpha.avg_stars() - 2.5).abs() < 1e-9);
    assert!((alpha.three_star_rate() - 50.0).abs() < 1e-9);
}

#[test]
fn season_completion_is_sticky() {
    let mut store = HistoryStore::empty("#CLAN");
    let rec = |complete| CwlSeasonRecord {
        season: "2025-03".into(),
        wars_analyzed: 7,
        total_attacks: 100,
        total_stars: 210,
        recorded_date: "2025-03-10T00:00:00.000000".into(),
        complete,
    };
    store.record_season("cwl_2025-03", rec(true));
    store.record_season("cwl_2025-03", rec(false));
    assert!(store.season_complete("cwl_2025-03"));
    assert!(!store.season_complete("cwl_2025-04"));
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");

    let mut store = HistoryStore::empty("#CLAN");
    store.record_war(extract(&sample_war(WarState::WarEnded)).values(), &war_ref());
    store.save(&path).unwrap();
    assert!(store.last_updated.is_some());

    let loaded = HistoryStore::load(&path, "#CLAN");
    assert_eq!(loaded, store);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let alpha = &raw["players"]["#P1"];
    assert_eq!(alpha["three_stars"], 1);
    assert_eq!(alpha["attacks_history"][0]["hit_type"], "UP");
    assert!(raw["cwl_seasons"].is_object());
}

#[test]
fn fractional_destruction_totals_survive_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::empty("#CLAN");
    for w in 0..200u32 {
        let attacks: Vec<AttackOutcome> = (0..7u32)
            .map(|k| AttackOutcome {
                stars: k % 4,
                destruction: f64::from((w * 7 + k) % 1000) / 10.0 + 0.01 * f64::from(k),
                defender_th: 12,
                defender_position: k + 1,
                attacker_position: 1,
                hit: HitDirection::Same,
            })
            .collect();
        let r = WarRef::regular(&sample_war(WarState::WarEnded));
        let r = WarRef { id: format!("{}_{w}", r.id), ..r };
        store.record_attacks(&format!("#F{w}"), "Fractional", 12, &r, &attacks);
    }
    store.save(&path).unwrap();

    let loaded = HistoryStore::load(&path, "#CLAN");
    for (tag, rec) in &store.players {
        assert_eq!(
            loaded.players[tag].total_destruction.to_bits(),
            rec.total_destruction.to_bits(),
            "{tag}"
        );
    }
    assert_eq!(loaded, store);
}

#[test]
fn missing_or_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = HistoryStore::load(&dir.path().join("nope.json"), "#CLAN");
    assert_eq!(missing, HistoryStore::empty("#CLAN"));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let loaded = HistoryStore::load(&bad, "#CLAN");
    assert!(loaded.players.is_empty());
    assert_eq!(loaded.clan_tag, "#CLAN");
}

#[test]
fn older_files_with_arrow_labels_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r##"{
          "clan_tag": "#CLAN",
          "last_updated": "2024-11-01T12:00:00.000000",
          "players": {
            "#P1": {
              "name": "Alpha", "tag": "#P1", "current_th": 12,
              "total_attacks": 1, "total_stars": 3, "total_destruction": 100.0,
              "three_stars": 1, "two_stars": 0, "one_star": 0, "zero_stars": 0,
              "wars_participated": 1, "cwl_seasons": 0,
              "attacks_history": [{
                "war_id": "x", "war_type": "regular_war", "date": "2024-11-01T12:00:00.000000",
                "stars": 3, "destruction": 100.0, "defender_th": 13, "attacker_th": 12,
                "hit_type": "↑ UP"
              }],
              "war_ids": ["x"]
            }
          },
          "cwl_seasons": {},
          "wars": {},
          "war_log": []
        }"##,
    )
    .unwrap();
    let store = HistoryStore::load(&path, "#CLAN");
    assert_eq!(store.players["#P1"].stars.three_stars, 1);
    assert!(store.players["#P1"].has_war("x"));
}
