// tests/rush_scoring.rs
mod common;

use clan_analyzer::model::Unit;
use clan_analyzer::rush::{Category, ReferenceTables, RushStatus, RushThresholds, score};
use common::{builder_unit, player, with_heroes};
use proptest::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn low_town_halls_are_new_accounts() {
    let tables = ReferenceTables::default();
    for th in [0, 1, 2] {
        let p = with_heroes(player("#A", "Tiny", th), &[("Barbarian King", 1)]);
        let r = score(&p, &tables, &RushThresholds::default());
        assert_eq!(r.status, RushStatus::NewAccount);
        assert!(!r.is_rushed);
        assert!(approx(r.rush_score, 0.0));
    }
}

#[test]
fn hero_at_previous_tier_max_is_maxed() {
    // TH10 is judged against the TH9 ceiling (30)
    let p = with_heroes(player("#A", "Ten", 10), &[("Barbarian King", 30)]);
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert_eq!(r.status, RushStatus::Maxed);
    assert!(r.rushed_heroes.is_empty());
    assert!(approx(r.rush_percentage, 0.0));
}

#[test]
fn town_hall_nine_king_at_ten_is_maxed() {
    let mut p = with_heroes(player("#A", "Nine", 9), &[("Barbarian King", 10)]);
    p.troops = vec![Unit::home("Barbarian", 5), Unit::home("Giant", 7)];
    p.spells = vec![Unit::home("Lightning Spell", 5)];
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert!(approx(r.rush_score, 0.0));
    assert_eq!(r.status, RushStatus::Maxed);
    assert!(!r.is_rushed);
}

#[test]
fn everything_at_reference_target_scores_zero() {
    let tables = ReferenceTables::default();
    let th = 15;
    let units = |category: Category| -> Vec<Unit> {
        tables
            .table(category)
            .iter()
            .filter_map(|(name, tiers)| tiers.get(&(th - 1)).map(|max| Unit::home(name, *max)))
            .collect()
    };
    let mut p = player("#A", "Fifteen", th);
    p.heroes = units(Category::Hero);
    p.troops = units(Category::Troop);
    p.spells = units(Category::Spell);
    assert!(!p.heroes.is_empty());

    let r = score(&p, &tables, &RushThresholds::default());
    assert!(approx(r.rush_score, 0.0));
    assert!(approx(r.rush_percentage, 0.0));
    assert_eq!(r.status, RushStatus::Maxed);
}

#[test]
fn hero_deficit_is_weighted_and_reported() {
    let p = with_heroes(player("#A", "Ten", 10), &[("Barbarian King", 20)]);
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert!(approx(r.rush_score, 10.0));
    assert!(approx(r.hero_score, 10.0));
    assert_eq!(r.status, RushStatus::SlightlyBehind);
    assert_eq!(r.total_missing_hero_levels, 10);
    assert_eq!(r.rushed_heroes.len(), 1);
    assert_eq!(r.rushed_heroes[0].target, 30);
    assert_eq!(r.rushed_heroes[0].missing, 10);
    // 20 of 30 possible levels
    assert!(approx(r.rush_percentage, 33.3));
}

#[test]
fn levels_above_target_do_not_offset_deficits() {
    let p = with_heroes(
        player("#A", "Ten", 10),
        &[("Barbarian King", 35), ("Archer Queen", 25)],
    );
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    // AQ target at TH9 is 30 → 5 missing; BK surplus ignored
    assert!(approx(r.rush_score, 5.0));
    // (30 + 25) / (30 + 30)
    assert!(approx(r.rush_percentage, 8.3));
}

#[test]
fn troops_and_spells_carry_lighter_weights() {
    let mut p = player("#A", "Ten", 10);
    p.troops = vec![Unit::home("Barbarian", 1)]; // TH9 target 6
    p.spells = vec![Unit::home("Lightning Spell", 1)]; // TH9 target 6
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert!(approx(r.troop_score, 5.0 * Category::Troop.weight()));
    assert!(approx(r.spell_score, 5.0 * Category::Spell.weight()));
    assert!(approx(r.rush_score, 1.5 + 2.0));
    assert_eq!(r.total_missing_hero_levels, 0);
}

#[test]
fn large_hero_gap_overrides_score_band() {
    // TH13 judged at TH12: BK 65, so 44 → 21 missing
    let p = with_heroes(player("#A", "Thirteen", 13), &[("Barbarian King", 44)]);
    let tables = ReferenceTables::default();

    let r = score(&p, &tables, &RushThresholds::default());
    assert_eq!(r.status, RushStatus::SeverelyRushedHeroes);
    assert!(r.is_rushed);

    let p20 = with_heroes(player("#B", "Thirteen", 13), &[("Barbarian King", 45)]);
    let r20 = score(&p20, &tables, &RushThresholds::default());
    assert_eq!(r20.status, RushStatus::ModeratelyRushed);
    assert_eq!(score(&p20, &tables, &RushThresholds::dashboard()).status, RushStatus::SeverelyRushedHeroes);
}

#[test]
fn builder_base_and_unknown_assets_are_ignored() {
    let mut p = with_heroes(player("#A", "Ten", 10), &[("Barbarian King", 30)]);
    p.heroes.push(builder_unit("Battle Machine", 1));
    p.troops.push(builder_unit("Barbarian", 1));
    p.troops.push(Unit::home("Super Barbarian", 1));
    // Royal Champion has no TH9 target
    p.heroes.push(Unit::home("Royal Champion", 1));
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert!(approx(r.rush_score, 0.0));
    assert_eq!(r.status, RushStatus::Maxed);
}

#[test]
fn nothing_scoreable_gives_zero_percentage() {
    let p = player("#A", "Bare", 9);
    let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
    assert!(approx(r.rush_percentage, 0.0));
    assert_eq!(r.status, RushStatus::Maxed);
}

#[test]
fn custom_tables_replace_defaults() {
    let tables = ReferenceTables::from_json(
        r#"{"heroes": {"Barbarian King": {"9": 10}}, "troops": {}, "spells": {}}"#,
    )
    .unwrap();
    let p = with_heroes(player("#A", "Ten", 10), &[("Barbarian King", 10)]);
    let r = score(&p, &tables, &RushThresholds::default());
    assert_eq!(r.status, RushStatus::Maxed);
}

proptest! {
    #[test]
    fn raising_a_level_never_raises_the_score(a in 0u32..=70, b in 0u32..=70, th in 3u32..=18) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let tables = ReferenceTables::default();
        let t = RushThresholds::default();
        let low = score(&with_heroes(player("#A", "P", th), &[("Barbarian King", lo)]), &tables, &t);
        let high = score(&with_heroes(player("#A", "P", th), &[("Barbarian King", hi)]), &tables, &t);
        prop_assert!(high.rush_score <= low.rush_score);
        prop_assert!(high.status <= low.status);
    }

    #[test]
    fn raising_any_one_asset_never_raises_the_score(
        slot in 0usize..5,
        a in 0u32..=40,
        b in 0u32..=40,
        th in 3u32..=18,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let account = |level: u32| {
            let mut levels = [20, 3, 3, 4, 2];
            levels[slot] = level;
            let mut p = with_heroes(player("#A", "P", th), &[("Archer Queen", levels[0])]);
            p.troops = vec![Unit::home("Barbarian", levels[1]), Unit::home("Archer", levels[2])];
            p.spells = vec![Unit::home("Lightning Spell", levels[3]), Unit::home("Healing Spell", levels[4])];
            p
        };
        let tables = ReferenceTables::default();
        let t = RushThresholds::default();
        let low = score(&account(lo), &tables, &t);
        let high = score(&account(hi), &tables, &t);
        prop_assert!(high.rush_score <= low.rush_score);
        prop_assert!(high.status <= low.status);
    }

    #[test]
    fn percentage_stays_in_range(level in 0u32..=120, th in 3u32..=18) {
        let p = with_heroes(player("#A", "P", th), &[("Archer Queen", level), ("Grand Warden", level)]);
        let r = score(&p, &ReferenceTables::default(), &RushThresholds::default());
        prop_assert!((0.0..=100.0).contains(&r.rush_percentage));
    }
}
