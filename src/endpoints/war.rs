// src/endpoints/war.rs
use crate::core::ApiClient;
use crate::error::ApiError;
use crate::model::ClanWar;
use crate::war::cwl::LeagueWarSource;

pub fn league_war(api: &ApiClient, war_tag: &str) -> Result<ClanWar, ApiError> {
    api.get_json(&["clanwarleagues", "wars", war_tag], &[])
}

impl LeagueWarSource for ApiClient {
    fn league_war(&self, war_tag: &str) -> Option<ClanWar> {
        crate::core::net::optional("league war", league_war(self, war_tag))
    }
}
