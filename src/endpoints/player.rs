// src/endpoints/player.rs
use crate::core::ApiClient;
use crate::error::ApiError;
use crate::model::Player;

pub fn detail(api: &ApiClient, player_tag: &str) -> Result<Player, ApiError> {
    api.get_json(&["players", player_tag], &[])
}
