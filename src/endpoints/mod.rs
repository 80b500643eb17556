// src/endpoints/mod.rs
//! # Remote endpoints
//!
//! One function per API endpoint. Each knows the **path shape** and the
//! **response type**; nothing here decides whether a failure is fatal.
//!
//! ## What lives here
//! - Path construction (tags go in as raw `#XXXX` strings; `ApiClient::url`
//!   percent-encodes them).
//! - Unwrapping the `{ "items": [...] }` envelope for list endpoints.
//!
//! ## What does **not** live here
//! - Mandatory vs optional policy: the runner decides (clan info and the
//!   member roster abort the run; everything else degrades to absent).
//! - Rate limiting: the runner sleeps between per-player fetches.
//!
//! ## Typical call chain
//! ```text
//! runner → endpoints::<area>::<fn>(api, tag) → ApiClient::get_json
//!        ↘ core::net::optional(..) for endpoints allowed to fail
//! ```
pub mod clan;
pub mod player;
pub mod war;
pub mod reference;

use crate::core::ApiClient;
use crate::error::ApiError;
use crate::model::{Clan, ClanMember, ClanWar, GoldPassSeason, LeagueGroup, Player, RaidSeason, WarLogEntry};
use crate::war::cwl::LeagueWarSource;

/// Everything one analysis run reads, one call per endpoint.
/// `ApiClient` is the real implementation; tests substitute canned data.
pub trait ClanSource: LeagueWarSource {
    fn clan(&self, clan_tag: &str) -> Result<Clan, ApiError>;
    fn members(&self, clan_tag: &str) -> Result<Vec<ClanMember>, ApiError>;
    fn player(&self, player_tag: &str) -> Result<Player, ApiError>;
    fn warlog(&self, clan_tag: &str) -> Result<Vec<WarLogEntry>, ApiError>;
    fn current_war(&self, clan_tag: &str) -> Result<ClanWar, ApiError>;
    fn league_group(&self, clan_tag: &str) -> Result<LeagueGroup, ApiError>;
    fn raid_seasons(&self, clan_tag: &str, limit: u32) -> Result<Vec<RaidSeason>, ApiError>;
    fn gold_pass(&self) -> Result<GoldPassSeason, ApiError>;
}

impl ClanSource for ApiClient {
    fn clan(&self, clan_tag: &str) -> Result<Clan, ApiError> {
        clan::info(self, clan_tag)
    }
    fn members(&self, clan_tag: &str) -> Result<Vec<ClanMember>, ApiError> {
        clan::members(self, clan_tag)
    }
    fn player(&self, player_tag: &str) -> Result<Player, ApiError> {
        player::detail(self, player_tag)
    }
    fn warlog(&self, clan_tag: &str) -> Result<Vec<WarLogEntry>, ApiError> {
        clan::warlog(self, clan_tag)
    }
    fn current_war(&self, clan_tag: &str) -> Result<ClanWar, ApiError> {
        clan::current_war(self, clan_tag)
    }
    fn league_group(&self, clan_tag: &str) -> Result<LeagueGroup, ApiError> {
        clan::league_group(self, clan_tag)
    }
    fn raid_seasons(&self, clan_tag: &str, limit: u32) -> Result<Vec<RaidSeason>, ApiError> {
        clan::capital_raid_seasons(self, clan_tag, limit)
    }
    fn gold_pass(&self) -> Result<GoldPassSeason, ApiError> {
        reference::gold_pass(self)
    }
}
