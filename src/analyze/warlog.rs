// src/analyze/warlog.rs
use std::collections::BTreeMap;

use super::{count_desc, percent};
use crate::model::WarLogEntry;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarLogSummary {
    pub wars: usize,
    /// result ("win" / "lose" / "tie" / "unknown") → (count, share %)
    pub results: Vec<(String, usize, f64)>,
    pub stars_for: u64,
    pub stars_against: u64,
    pub avg_stars: f64,
    pub avg_destruction_for: f64,
    pub avg_destruction_against: f64,
    /// team size → wars
    pub sizes: BTreeMap<u32, usize>,
}

impl WarLogSummary {
    pub fn star_difference(&self) -> i64 {
        self.stars_for as i64 - self.stars_against as i64
    }

    pub fn wins(&self) -> usize {
        self.results.iter().find(|r| r.0 == "win").map_or(0, |r| r.1)
    }

    pub fn win_rate(&self) -> f64 {
        percent(self.wins() as f64, self.wars as f64)
    }
}

pub fn summarize_warlog(log: &[WarLogEntry]) -> WarLogSummary {
    let n = log.len();
    let total = n as f64;
    let results = count_desc(log.iter().map(|w| w.result.clone().unwrap_or_else(|| s!("unknown"))))
        .into_iter()
        .map(|(r, c)| (r, c, percent(c as f64, total)))
        .collect();

    let stars_for: u64 = log.iter().map(|w| u64::from(w.clan.stars)).sum();
    let stars_against: u64 = log.iter().map(|w| u64::from(w.opponent.stars)).sum();
    let dest_for: f64 = log.iter().map(|w| w.clan.destruction_percentage).sum();
    let dest_against: f64 = log.iter().map(|w| w.opponent.destruction_percentage).sum();

    let mut sizes: BTreeMap<u32, usize> = BTreeMap::new();
    for w in log {
        *sizes.entry(w.team_size).or_default() += 1;
    }

    let avg = |v: f64| if n == 0 { 0.0 } else { v / total };
    WarLogSummary {
        wars: n,
        results,
        stars_for,
        stars_against,
        avg_stars: avg(stars_for as f64),
        avg_destruction_for: avg(dest_for),
        avg_destruction_against: avg(dest_against),
        sizes,
    }
}
