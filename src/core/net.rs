// src/core/net.rs

// HTTPS GET against the JSON API. Blocking: one request in flight at a time.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::options::ApiConfig;
use crate::error::ApiError;

pub struct ApiClient {
    http: Client,
    base: Url,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Url(config.base_url.clone()));
        }
        let http = Client::builder()
            .user_agent(concat!("clan_analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base, token: config.token.clone() })
    }

    /// Base URL + path segments (each percent-encoded, so `#TAG` → `%23TAG`) + query.
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Url(self.base.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET and decode. Any non-2xx status is an error.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(segments, query)?;
        let path = url.path().to_string();
        logd!("GET {}", path);

        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            logd!("HTTP {} body: {}", status.as_u16(), body);
            return Err(ApiError::Status { status: status.as_u16(), path });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { path, source })
    }
}

/// Optional data: log the failure and carry on without it.
pub fn optional<T>(what: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            logw!("{what} unavailable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new("token").with_base_url(base)).unwrap()
    }

    #[test]
    fn url_percent_encodes_tags() {
        let api = client("https://api.example.com/v1");
        let url = api.url(&["clans", "#2J28LL2VU", "members"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/clans/%232J28LL2VU/members");
    }

    #[test]
    fn url_handles_trailing_slash_and_query() {
        let api = client("https://api.example.com/v1/");
        let url = api
            .url(&["clans", "#ABC", "capitalraidseasons"], &[("limit", s!("10"))])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/clans/%23ABC/capitalraidseasons?limit=10"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let err = ApiClient::new(&ApiConfig::new("t").with_base_url("mailto:x@y.z"));
        assert!(matches!(err, Err(ApiError::Url(_))));
    }
}
