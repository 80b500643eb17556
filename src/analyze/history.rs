// src/analyze/history.rs
use super::percent;
use crate::history::{CwlSeasonRecord, HistoryStore, PlayerRecord};

/// Players need this many recorded attacks to enter the leaderboard.
pub const LEADERBOARD_MIN_ATTACKS: u32 = 5;

#[derive(Clone, Debug, Default)]
pub struct HistorySummary<'a> {
    pub players_tracked: usize,
    pub seasons_recorded: usize,
    pub wars_recorded: usize,
    pub last_updated: Option<&'a str>,
    pub total_attacks: u64,
    pub total_stars: u64,
    pub total_three_stars: u64,
    pub avg_stars: f64,
    pub three_star_rate: f64,
    /// Average stars descending, then attacks descending.
    pub leaderboard: Vec<&'a PlayerRecord>,
    pub most_attacks: Vec<&'a PlayerRecord>,
    pub most_three_stars: Vec<&'a PlayerRecord>,
    /// Newest season first.
    pub seasons: Vec<&'a CwlSeasonRecord>,
}

pub fn summarize_history(store: &HistoryStore, top: usize) -> HistorySummary<'_> {
    let players: Vec<&PlayerRecord> = store.players.values().collect();

    let total_attacks: u64 = players.iter().map(|p| u64::from(p.total_attacks)).sum();
    let total_stars: u64 = players.iter().map(|p| u64::from(p.total_stars)).sum();
    let total_three_stars: u64 = players.iter().map(|p| u64::from(p.stars.three_stars)).sum();

    let mut leaderboard: Vec<&PlayerRecord> = players
        .iter()
        .copied()
        .filter(|p| p.total_attacks >= LEADERBOARD_MIN_ATTACKS)
        .collect();
    leaderboard.sort_by(|a, b| {
        b.avg_stars()
            .total_cmp(&a.avg_stars())
            .then(b.total_attacks.cmp(&a.total_attacks))
    });

    let mut most_attacks: Vec<&PlayerRecord> =
        players.iter().copied().filter(|p| p.total_attacks > 0).collect();
    most_attacks.sort_by(|a, b| b.total_attacks.cmp(&a.total_attacks));
    most_attacks.truncate(top);

    let mut most_three_stars: Vec<&PlayerRecord> =
        players.iter().copied().filter(|p| p.stars.three_stars > 0).collect();
    most_three_stars.sort_by(|a, b| b.stars.three_stars.cmp(&a.stars.three_stars));
    most_three_stars.truncate(top);

    HistorySummary {
        players_tracked: store.players.len(),
        seasons_recorded: store.cwl_seasons.len(),
        wars_recorded: store.wars.len(),
        last_updated: store.last_updated.as_deref(),
        total_attacks,
        total_stars,
        total_three_stars,
        avg_stars: if total_attacks == 0 { 0.0 } else { total_stars as f64 / total_attacks as f64 },
        three_star_rate: percent(total_three_stars as f64, total_attacks as f64),
        leaderboard,
        most_attacks,
        most_three_stars,
        seasons: store.cwl_seasons.values().rev().collect(),
    }
}
