// src/analyze/players.rs
use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::NumStats;
use crate::model::Player;

/// (name, total levels, how many units)
pub type LevelRow = (String, u32, usize);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerSummary {
    /// town hall → players, iterate `.rev()` for highest first
    pub town_halls: BTreeMap<u32, usize>,
    pub builder_halls: BTreeMap<u32, usize>,
    /// per home hero: how many own it and the level spread
    pub heroes: IndexMap<String, NumStats>,
    pub hero_owners: IndexMap<String, usize>,
    pub top_hero_totals: Vec<LevelRow>,
    pub top_troop_totals: Vec<LevelRow>,
    pub war_stars: NumStats,
    pub top_war_stars: Vec<(String, u32)>,
    pub top_attack_wins: Vec<(String, u32)>,
    pub top_defense_wins: Vec<(String, u32)>,
    pub capital_total: u64,
    pub top_capital: Vec<(String, u64)>,
}

fn top_by<T: Copy + Ord>(players: &[Player], top: usize, key: impl Fn(&Player) -> T) -> Vec<(String, T)> {
    let mut v: Vec<(String, T)> = players.iter().map(|p| (p.name.clone(), key(p))).collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    v.truncate(top);
    v
}

pub fn summarize_players(players: &[Player], top: usize) -> PlayerSummary {
    let mut town_halls: BTreeMap<u32, usize> = BTreeMap::new();
    let mut builder_halls: BTreeMap<u32, usize> = BTreeMap::new();
    for p in players {
        *town_halls.entry(p.town_hall_level).or_default() += 1;
        if p.builder_hall_level > 0 {
            *builder_halls.entry(p.builder_hall_level).or_default() += 1;
        }
    }

    let mut hero_levels: IndexMap<String, Vec<u64>> = IndexMap::new();
    for hero in players.iter().flat_map(|p| p.home_heroes()) {
        hero_levels.entry(hero.name.clone()).or_default().push(u64::from(hero.level));
    }
    let hero_owners = hero_levels.iter().map(|(k, v)| (k.clone(), v.len())).collect();
    let heroes = hero_levels
        .into_iter()
        .map(|(k, v)| (k, NumStats::from_values(v)))
        .collect();

    let mut hero_totals: Vec<LevelRow> = players
        .iter()
        .map(|p| (p.name.clone(), p.hero_level_total(), p.home_heroes().count()))
        .collect();
    hero_totals.sort_by(|a, b| b.1.cmp(&a.1));
    hero_totals.truncate(top);

    let mut troop_totals: Vec<LevelRow> = players
        .iter()
        .map(|p| (p.name.clone(), p.home_troops().map(|t| t.level).sum(), p.home_troops().count()))
        .collect();
    troop_totals.sort_by(|a, b| b.1.cmp(&a.1));
    troop_totals.truncate(top);

    PlayerSummary {
        town_halls,
        builder_halls,
        heroes,
        hero_owners,
        top_hero_totals: hero_totals,
        top_troop_totals: troop_totals,
        war_stars: NumStats::from_values(players.iter().map(|p| u64::from(p.war_stars))),
        top_war_stars: top_by(players, top, |p| p.war_stars),
        top_attack_wins: top_by(players, top, |p| p.attack_wins),
        top_defense_wins: top_by(players, top, |p| p.defense_wins),
        capital_total: players.iter().map(|p| p.clan_capital_contributions).sum(),
        top_capital: top_by(players, top, |p| p.clan_capital_contributions),
    }
}

/// Town hall descending, then trophies descending.
pub fn roster(players: &[Player]) -> Vec<&Player> {
    let mut v: Vec<&Player> = players.iter().collect();
    v.sort_by(|a, b| {
        b.town_hall_level
            .cmp(&a.town_hall_level)
            .then(b.trophies.cmp(&a.trophies))
    });
    v
}
