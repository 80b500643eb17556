// src/model/mod.rs
//! Wire shapes for the API responses this tool consumes.
//!
//! Every struct is `#[serde(default)]` so that missing or newly added fields
//! never fail a decode; the API omits keys freely (e.g. `league` for unranked
//! players, `attacks` for members who have not attacked yet).
//! Sub-objects the analyzers never look inside are kept as `serde_json::Value`
//! so they can be passed through to the export unchanged.
pub mod clan;
pub mod player;
pub mod war;
pub mod league;

pub use clan::{Clan, ClanMember, WarLogEntry, WarLogSide};
pub use player::{Player, Unit, Village};
pub use league::{GoldPassSeason, Label, LeagueGroup, LeagueGroupClan, LeagueRound, Location, RaidSeason};
pub use war::{ClanWar, WarAttack, WarMember, WarSide, WarState};

use serde::{Deserialize, Serialize};

/// `{ "items": [...] }` envelope used by every list endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// `{ "id": 29000022, "name": "Legend League" }` style references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}
