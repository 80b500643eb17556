// src/war/extract.rs

// Raw war record → per-member attack outcomes. No I/O.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{ClanWar, WarMember};

/// Defender town hall relative to the attacker's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HitDirection {
    #[serde(alias = "↑ UP")]
    Up,
    #[serde(alias = "= SAME")]
    Same,
    #[serde(alias = "↓ DOWN")]
    Down,
}

impl HitDirection {
    pub fn classify(attacker_th: u32, defender_th: u32) -> Self {
        use std::cmp::Ordering::*;
        match defender_th.cmp(&attacker_th) {
            Greater => HitDirection::Up,
            Equal => HitDirection::Same,
            Less => HitDirection::Down,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HitDirection::Up => "UP",
            HitDirection::Same => "SAME",
            HitDirection::Down => "DOWN",
        }
    }
}

/// 3★ / 2★ / 1★ / 0★ counters. Serialized flat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarCounts {
    pub three_stars: u32,
    pub two_stars: u32,
    pub one_star: u32,
    pub zero_stars: u32,
}

impl StarCounts {
    /// Bump exactly one bucket. Anything above 3 counts as a triple.
    pub fn add(&mut self, stars: u32) {
        match stars {
            0 => self.zero_stars += 1,
            1 => self.one_star += 1,
            2 => self.two_stars += 1,
            _ => self.three_stars += 1,
        }
    }

    pub fn merge(&mut self, other: &StarCounts) {
        self.three_stars += other.three_stars;
        self.two_stars += other.two_stars;
        self.one_star += other.one_star;
        self.zero_stars += other.zero_stars;
    }

    pub fn total(&self) -> u32 {
        self.three_stars + self.two_stars + self.one_star + self.zero_stars
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttackOutcome {
    pub stars: u32,
    pub destruction: f64,
    pub defender_th: u32,
    pub defender_position: u32,
    pub attacker_position: u32,
    pub hit: HitDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlayerWarStats {
    pub name: String,
    pub tag: String,
    pub th: u32,
    pub map_position: u32,
    pub attacks: Vec<AttackOutcome>,
    pub total_stars: u32,
    pub total_destruction: f64,
    pub attacks_used: u32,
    pub missed_attacks: u32,
    #[serde(flatten)]
    pub stars: StarCounts,
    pub hit_up: u32,
    pub hit_same: u32,
    pub hit_down: u32,
}

impl PlayerWarStats {
    fn new(member: &WarMember) -> Self {
        Self {
            name: member.name.clone(),
            tag: member.tag.clone(),
            th: member.townhall_level,
            map_position: member.map_position,
            ..Self::default()
        }
    }

    fn push(&mut self, outcome: AttackOutcome) {
        self.total_stars += outcome.stars;
        self.total_destruction += outcome.destruction;
        self.attacks_used += 1;
        self.stars.add(outcome.stars);
        match outcome.hit {
            HitDirection::Up => self.hit_up += 1,
            HitDirection::Same => self.hit_same += 1,
            HitDirection::Down => self.hit_down += 1,
        }
        self.attacks.push(outcome);
    }
}

/// Per-member stats for the `clan` side of `war`, keyed by player tag in
/// ascending map position. Members who have not attacked are included with
/// `attacks_used == 0`.
pub fn extract(war: &ClanWar) -> IndexMap<String, PlayerWarStats> {
    let opponents: HashMap<&str, &WarMember> = war
        .opponent
        .members
        .iter()
        .map(|m| (m.tag.as_str(), m))
        .collect();

    let mut members: Vec<&WarMember> = war.clan.members.iter().collect();
    members.sort_by_key(|m| m.map_position);

    let per_member = war.attacks_per_member();
    let mut out = IndexMap::with_capacity(members.len());

    for member in members {
        let stats = out
            .entry(member.tag.clone())
            .or_insert_with(|| PlayerWarStats::new(member));

        for attack in &member.attacks {
            // Unknown defenders resolve to TH 0 / position 0
            let (defender_th, defender_position) = opponents
                .get(attack.defender_tag.as_str())
                .map(|d| (d.townhall_level, d.map_position))
                .unwrap_or((0, 0));
            stats.push(AttackOutcome {
                stars: attack.stars,
                destruction: attack.destruction_percentage,
                defender_th,
                defender_position,
                attacker_position: member.map_position,
                hit: HitDirection::classify(member.townhall_level, defender_th),
            });
        }
        stats.missed_attacks = per_member.saturating_sub(stats.attacks_used);
    }
    out
}
