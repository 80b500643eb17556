// src/history/record.rs
use serde::{Deserialize, Serialize};

use crate::war::{HitDirection, StarCounts};

/// One attack as it was recorded; append-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub war_id: String,
    pub war_type: String,
    pub date: String,
    pub stars: u32,
    pub destruction: f64,
    pub defender_th: u32,
    pub attacker_th: u32,
    pub hit_type: HitDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub name: String,
    pub tag: String,
    pub current_th: u32,
    pub total_attacks: u32,
    pub total_stars: u32,
    pub total_destruction: f64,
    #[serde(flatten)]
    pub stars: StarCounts,
    pub wars_participated: u32,
    pub cwl_seasons: u32,
    pub attacks_history: Vec<AttackRecord>,
    pub war_ids: Vec<String>,
}

impl PlayerRecord {
    pub fn new(tag: &str, name: &str, current_th: u32) -> Self {
        Self { name: s!(name), tag: s!(tag), current_th, ..Self::default() }
    }

    pub fn has_war(&self, war_id: &str) -> bool {
        self.war_ids.iter().any(|w| w == war_id)
    }

    pub fn avg_stars(&self) -> f64 {
        ratio(f64::from(self.total_stars), self.total_attacks)
    }

    pub fn avg_destruction(&self) -> f64 {
        ratio(self.total_destruction, self.total_attacks)
    }

    /// Percentage of attacks that were triples.
    pub fn three_star_rate(&self) -> f64 {
        ratio(f64::from(self.stars.three_stars), self.total_attacks) * 100.0
    }
}

fn ratio(num: f64, den: u32) -> f64 {
    if den == 0 { 0.0 } else { num / f64::from(den) }
}

/// Season summary; `complete` is set once the league group reports `ended`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CwlSeasonRecord {
    pub season: String,
    pub wars_analyzed: u32,
    pub total_attacks: u32,
    pub total_stars: u32,
    pub recorded_date: String,
    pub complete: bool,
}
