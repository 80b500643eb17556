// src/endpoints/reference.rs
// Static reference data: leagues, locations, labels, gold pass.
use serde_json::Value;

use crate::core::ApiClient;
use crate::error::ApiError;
use crate::model::{GoldPassSeason, ItemList, Label, Location, NamedRef};

fn items<T: serde::de::DeserializeOwned>(
    api: &ApiClient,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<Vec<T>, ApiError> {
    let list: ItemList<T> = api.get_json(segments, query)?;
    Ok(list.items)
}

pub fn leagues(api: &ApiClient) -> Result<Vec<NamedRef>, ApiError> {
    items(api, &["leagues"], &[])
}

pub fn war_leagues(api: &ApiClient) -> Result<Vec<NamedRef>, ApiError> {
    items(api, &["warleagues"], &[])
}

pub fn capital_leagues(api: &ApiClient) -> Result<Vec<NamedRef>, ApiError> {
    items(api, &["capitalleagues"], &[])
}

pub fn builder_base_leagues(api: &ApiClient) -> Result<Vec<NamedRef>, ApiError> {
    items(api, &["builderbaseleagues"], &[])
}

pub fn locations(api: &ApiClient) -> Result<Vec<Location>, ApiError> {
    items(api, &["locations"], &[])
}

/// Which ranking list to read for a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Ranking {
    Clans,
    Players,
    Capitals,
}

impl Ranking {
    fn segment(self) -> &'static str {
        match self {
            Ranking::Clans => "clans",
            Ranking::Players => "players",
            Ranking::Capitals => "capitals",
        }
    }
}

/// Ranking rows are passed through untyped; nothing downstream inspects them.
pub fn location_rankings(
    api: &ApiClient,
    location_id: u64,
    ranking: Ranking,
    limit: u32,
) -> Result<Vec<Value>, ApiError> {
    let id = location_id.to_string();
    items(
        api,
        &["locations", &id, "rankings", ranking.segment()],
        &[("limit", limit.to_string())],
    )
}

pub fn player_labels(api: &ApiClient) -> Result<Vec<Label>, ApiError> {
    items(api, &["labels", "players"], &[])
}

pub fn clan_labels(api: &ApiClient) -> Result<Vec<Label>, ApiError> {
    items(api, &["labels", "clans"], &[])
}

pub fn gold_pass(api: &ApiClient) -> Result<GoldPassSeason, ApiError> {
    api.get_json(&["goldpass", "seasons", "current"], &[])
}
