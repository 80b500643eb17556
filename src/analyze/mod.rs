// src/analyze/mod.rs
//! Read-only roll-ups over the fetched collections.
//!
//! Each analyzer takes borrowed API data (or the history store) and returns
//! a plain summary struct; `report::console` decides how to print it and
//! `report::export` reuses several of them for the JSON statistics block.
//! All averages and rates guard the empty case and come out as `0`.
pub mod clan;
pub mod history;
pub mod members;
pub mod players;
pub mod rush;
pub mod war;
pub mod warlog;

pub use clan::{ClanStrength, strength};
pub use history::{HistorySummary, summarize_history};
pub use members::{MemberSummary, summarize_members};
pub use players::{PlayerSummary, roster, summarize_players};
pub use rush::{RushEntry, RushOverview, rush_overview};
pub use war::{AttackSummary, summarize_attacks};
pub use warlog::{WarLogSummary, summarize_warlog};

use indexmap::IndexMap;

/// total / avg / max / min over a set of counters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumStats {
    pub total: u64,
    pub avg: f64,
    pub max: u64,
    pub min: u64,
}

impl NumStats {
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Self {
        let mut n = 0u64;
        let mut s = NumStats { min: u64::MAX, ..Default::default() };
        for v in values {
            n += 1;
            s.total += v;
            s.max = s.max.max(v);
            s.min = s.min.min(v);
        }
        if n == 0 {
            return NumStats::default();
        }
        s.avg = s.total as f64 / n as f64;
        s
    }
}

/// Occurrence counts, most frequent first; ties keep first-seen order.
pub fn count_desc<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: std::hash::Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for k in keys {
        *counts.entry(k).or_default() += 1;
    }
    let mut v: Vec<_> = counts.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    v
}

/// `part / whole * 100`, or 0 for an empty whole.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_stats_empty_is_zero() {
        assert_eq!(NumStats::from_values(Vec::<u64>::new()), NumStats::default());
    }

    #[test]
    fn num_stats_basic() {
        let s = NumStats::from_values([10, 30, 20]);
        assert_eq!((s.total, s.max, s.min), (60, 30, 10));
        assert!((s.avg - 20.0).abs() < 1e-9);
    }

    #[test]
    fn count_desc_is_stable_on_ties() {
        let v = count_desc(["member", "admin", "member", "leader", "admin"]);
        assert_eq!(v, vec![("member", 2), ("admin", 2), ("leader", 1)]);
    }
}
