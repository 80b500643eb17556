// src/analyze/war.rs
use indexmap::IndexMap;

use super::percent;
use crate::war::{HitDirection, PlayerWarStats, StarCounts};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttackSummary {
    pub attacks: u32,
    pub stars: u32,
    pub destruction: f64,
    pub buckets: StarCounts,
    pub hit_up: u32,
    pub hit_same: u32,
    pub hit_down: u32,
    /// (name, attacks left unused)
    pub missed: Vec<(String, u32)>,
}

impl AttackSummary {
    pub fn avg_stars(&self) -> f64 {
        if self.attacks == 0 { 0.0 } else { f64::from(self.stars) / f64::from(self.attacks) }
    }

    pub fn avg_destruction(&self) -> f64 {
        if self.attacks == 0 { 0.0 } else { self.destruction / f64::from(self.attacks) }
    }

    pub fn share(&self, count: u32) -> f64 {
        percent(f64::from(count), f64::from(self.attacks))
    }
}

pub fn summarize_attacks(stats: &IndexMap<String, PlayerWarStats>) -> AttackSummary {
    let mut s = AttackSummary::default();
    for p in stats.values() {
        for a in &p.attacks {
            s.attacks += 1;
            s.stars += a.stars;
            s.destruction += a.destruction;
            s.buckets.add(a.stars);
            match a.hit {
                HitDirection::Up => s.hit_up += 1,
                HitDirection::Same => s.hit_same += 1,
                HitDirection::Down => s.hit_down += 1,
            }
        }
        if p.missed_attacks > 0 {
            s.missed.push((p.name.clone(), p.missed_attacks));
        }
    }
    s
}
