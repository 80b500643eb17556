// src/model/war.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::DEFAULT_ATTACKS_PER_MEMBER;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarState {
    #[default]
    NotInWar,
    Preparation,
    InWar,
    WarEnded,
    #[serde(other)]
    Unknown,
}

impl WarState {
    /// Attacks can exist only once the battle day has begun.
    pub fn has_started(self) -> bool {
        matches!(self, WarState::InWar | WarState::WarEnded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WarState::NotInWar => "notInWar",
            WarState::Preparation => "preparation",
            WarState::InWar => "inWar",
            WarState::WarEnded => "warEnded",
            WarState::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarAttack {
    pub attacker_tag: String,
    pub defender_tag: String,
    pub stars: u32,
    pub destruction_percentage: f64,
    pub order: u32,
    pub duration: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarMember {
    pub tag: String,
    pub name: String,
    pub townhall_level: u32,
    pub map_position: u32,
    pub opponent_attacks: u32,
    pub attacks: Vec<WarAttack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_opponent_attack: Option<WarAttack>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarSide {
    pub tag: String,
    pub name: String,
    pub badge_urls: Option<Value>,
    pub clan_level: u32,
    pub attacks: u32,
    pub stars: u32,
    pub destruction_percentage: f64,
    pub members: Vec<WarMember>,
}

/// Current war (`/clans/{tag}/currentwar`) or a league war (`/clanwarleagues/wars/{tag}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWar {
    pub state: WarState,
    pub team_size: u32,
    pub attacks_per_member: Option<u32>,
    pub preparation_start_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub war_start_time: Option<String>,
    pub clan: WarSide,
    pub opponent: WarSide,
}

impl ClanWar {
    pub fn attacks_per_member(&self) -> u32 {
        self.attacks_per_member.unwrap_or(DEFAULT_ATTACKS_PER_MEMBER)
    }

    /// Re-orient so that `clan_tag` is the `clan` side.
    /// League wars list the two clans in no particular order.
    /// `None` when neither side is ours.
    pub fn oriented_for(mut self, clan_tag: &str) -> Option<Self> {
        if self.clan.tag == clan_tag {
            Some(self)
        } else if self.opponent.tag == clan_tag {
            std::mem::swap(&mut self.clan, &mut self.opponent);
            Some(self)
        } else {
            None
        }
    }
}
