// src/analyze/clan.rs
use std::collections::BTreeMap;

use crate::model::Player;

/// Power weight per town hall; anything not listed (TH7 and below, or newer
/// than the table) weighs 5.
const TH_WEIGHTS: &[(u32, u64)] = &[
    (17, 100), (16, 90), (15, 80), (14, 70), (13, 60),
    (12, 50), (11, 40), (10, 30), (9, 20), (8, 10),
];

pub fn th_weight(th: u32) -> u64 {
    TH_WEIGHTS.iter().find(|(t, _)| *t == th).map_or(5, |(_, w)| *w)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClanStrength {
    pub th_power: u64,
    pub hero_levels: u64,
    pub war_stars: u64,
    /// th_power + 2 * hero_levels + war_stars / 100
    pub score: u64,
    pub below_th12: usize,
    pub th14_plus: usize,
    /// Members with neither donations nor receipts this season.
    pub inactive: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn strength(players: &[Player]) -> ClanStrength {
    let th_power: u64 = players.iter().map(|p| th_weight(p.town_hall_level)).sum();
    let hero_levels: u64 = players.iter().map(|p| u64::from(p.hero_level_total())).sum();
    let war_stars: u64 = players.iter().map(|p| u64::from(p.war_stars)).sum();

    let mut th_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for p in players {
        *th_counts.entry(p.town_hall_level).or_default() += 1;
    }
    let below_th12: usize = th_counts.range(..12).map(|(_, c)| c).sum();
    let th14_plus: usize = th_counts.range(14..).map(|(_, c)| c).sum();

    let inactive: Vec<String> = players
        .iter()
        .filter(|p| p.donations == 0 && p.donations_received == 0)
        .map(|p| p.name.clone())
        .collect();

    let n = players.len() as f64;
    let mut recommendations = Vec::new();
    if below_th12 as f64 > n * 0.3 {
        recommendations.push(format!(
            "{below_th12} members are below TH12. Consider recruiting higher TH players for CWL."
        ));
    }
    if th14_plus as f64 > n * 0.5 {
        recommendations.push(format!("Strong high-level presence with {th14_plus} TH14+ members!"));
    }
    if !inactive.is_empty() {
        recommendations.push(format!(
            "{} members have 0 donations this season (possible inactives)",
            inactive.len()
        ));
    }

    ClanStrength {
        th_power,
        hero_levels,
        war_stars,
        score: th_power + hero_levels * 2 + war_stars / 100,
        below_th12,
        th14_plus,
        inactive,
        recommendations,
    }
}
