// src/model/league.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder tag the API uses for league wars not scheduled yet.
pub const UNSCHEDULED_WAR_TAG: &str = "#0";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueRound {
    pub war_tags: Vec<String>,
}

impl LeagueRound {
    pub fn scheduled_tags(&self) -> impl Iterator<Item = &str> {
        self.war_tags
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty() && *t != UNSCHEDULED_WAR_TAG)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueGroupClan {
    pub tag: String,
    pub name: String,
    pub clan_level: u32,
}

/// `/clans/{tag}/currentwar/leaguegroup`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueGroup {
    /// "preparation" | "inWar" | "ended"
    pub state: String,
    /// e.g. "2025-06"
    pub season: String,
    pub clans: Vec<LeagueGroupClan>,
    pub rounds: Vec<LeagueRound>,
}

impl LeagueGroup {
    pub fn has_ended(&self) -> bool {
        self.state == "ended"
    }
}

/// One capital raid weekend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaidSeason {
    pub state: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capital_total_loot: u64,
    pub raids_completed: u32,
    pub total_attacks: u32,
    pub enemy_districts_destroyed: u32,
    pub offensive_reward: u32,
    pub defensive_reward: u32,
    pub members: Vec<Value>,
    pub attack_log: Vec<Value>,
    pub defense_log: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub is_country: bool,
    pub country_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub icon_urls: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldPassSeason {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
