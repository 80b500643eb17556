// src/model/clan.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NamedRef;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Clan {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: Option<Value>,
    pub chat_language: Option<Value>,
    pub badge_urls: Option<Value>,
    pub clan_level: u32,
    pub clan_points: u32,
    pub clan_builder_base_points: u32,
    pub clan_capital_points: u32,
    pub capital_league: Option<NamedRef>,
    pub required_trophies: u32,
    pub war_frequency: String,
    pub war_win_streak: u32,
    pub war_wins: u32,
    pub war_ties: u32,
    pub war_losses: u32,
    pub is_war_log_public: bool,
    pub war_league: Option<NamedRef>,
    /// Member count (the roster itself comes from the members endpoint)
    pub members: u32,
    pub labels: Vec<Value>,
    pub clan_capital: Option<Value>,
}

impl Clan {
    pub fn total_wars(&self) -> u32 {
        self.war_wins + self.war_ties + self.war_losses
    }

    /// Percentage of recorded wars won; 0 with no wars.
    pub fn win_rate(&self) -> f64 {
        let total = self.total_wars();
        if total == 0 { return 0.0; }
        self.war_wins as f64 / total as f64 * 100.0
    }
}

/// One roster row from `/clans/{tag}/members`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    pub role: String,
    pub exp_level: u32,
    pub league: Option<NamedRef>,
    pub trophies: u32,
    pub builder_base_trophies: u32,
    pub clan_rank: u32,
    pub donations: u32,
    pub donations_received: u32,
}

/// One finished war from `/clans/{tag}/warlog`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLogEntry {
    /// "win" | "lose" | "tie"; absent for CWL rounds
    pub result: Option<String>,
    pub end_time: Option<String>,
    pub team_size: u32,
    pub attacks_per_member: Option<u32>,
    pub clan: WarLogSide,
    pub opponent: WarLogSide,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLogSide {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub stars: u32,
    pub destruction_percentage: f64,
    pub exp_earned: Option<u32>,
}
