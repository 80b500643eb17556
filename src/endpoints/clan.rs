// src/endpoints/clan.rs
use crate::core::ApiClient;
use crate::error::ApiError;
use crate::model::{Clan, ClanMember, ClanWar, ItemList, LeagueGroup, RaidSeason, WarLogEntry};

pub fn info(api: &ApiClient, clan_tag: &str) -> Result<Clan, ApiError> {
    api.get_json(&["clans", clan_tag], &[])
}

pub fn members(api: &ApiClient, clan_tag: &str) -> Result<Vec<ClanMember>, ApiError> {
    let list: ItemList<ClanMember> = api.get_json(&["clans", clan_tag, "members"], &[])?;
    Ok(list.items)
}

/// Fails with 403 when the clan's war log is private.
pub fn warlog(api: &ApiClient, clan_tag: &str) -> Result<Vec<WarLogEntry>, ApiError> {
    let list: ItemList<WarLogEntry> = api.get_json(&["clans", clan_tag, "warlog"], &[])?;
    Ok(list.items)
}

pub fn current_war(api: &ApiClient, clan_tag: &str) -> Result<ClanWar, ApiError> {
    api.get_json(&["clans", clan_tag, "currentwar"], &[])
}

/// Only answers during (and shortly after) league week.
pub fn league_group(api: &ApiClient, clan_tag: &str) -> Result<LeagueGroup, ApiError> {
    api.get_json(&["clans", clan_tag, "currentwar", "leaguegroup"], &[])
}

pub fn capital_raid_seasons(
    api: &ApiClient,
    clan_tag: &str,
    limit: u32,
) -> Result<Vec<RaidSeason>, ApiError> {
    let list: ItemList<RaidSeason> = api.get_json(
        &["clans", clan_tag, "capitalraidseasons"],
        &[("limit", limit.to_string())],
    )?;
    Ok(list.items)
}
