// src/model/player.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NamedRef;

/// Which progression track a unit belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Village {
    Home,
    BuilderBase,
    #[default]
    #[serde(other)]
    Other,
}

/// A hero, troop, spell or piece of hero equipment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unit {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub village: Village,
}

impl Unit {
    pub fn home(name: &str, level: u32) -> Self {
        Self { name: s!(name), level, max_level: 0, village: Village::Home }
    }

    pub fn is_home(&self) -> bool {
        self.village == Village::Home
    }
}

/// Player detail from `/players/{tag}`: the point-in-time snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub town_hall_level: u32,
    pub town_hall_weapon_level: Option<u32>,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub war_stars: u32,
    pub attack_wins: u32,
    pub defense_wins: u32,
    pub builder_hall_level: u32,
    pub builder_base_trophies: u32,
    pub best_builder_base_trophies: u32,
    pub role: Option<String>,
    pub war_preference: Option<String>,
    pub donations: u32,
    pub donations_received: u32,
    pub clan_capital_contributions: u64,
    pub clan: Option<Value>,
    pub league: Option<NamedRef>,
    pub builder_base_league: Option<NamedRef>,
    pub achievements: Vec<Value>,
    pub labels: Vec<Value>,
    pub heroes: Vec<Unit>,
    pub troops: Vec<Unit>,
    pub spells: Vec<Unit>,
    pub hero_equipment: Vec<Unit>,
}

impl Player {
    pub fn home_heroes(&self) -> impl Iterator<Item = &Unit> {
        self.heroes.iter().filter(|u| u.is_home())
    }

    pub fn home_troops(&self) -> impl Iterator<Item = &Unit> {
        self.troops.iter().filter(|u| u.is_home())
    }

    pub fn home_spells(&self) -> impl Iterator<Item = &Unit> {
        self.spells.iter().filter(|u| u.is_home())
    }

    /// Sum of home-village hero levels.
    pub fn hero_level_total(&self) -> u32 {
        self.home_heroes().map(|h| h.level).sum()
    }

    pub fn league_name(&self) -> &str {
        self.league.as_ref().map(|l| l.name.as_str()).unwrap_or("Unranked")
    }
}
