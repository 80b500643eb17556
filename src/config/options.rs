// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::rush::RushThresholds;

/// Where and how to reach the API. Built once, passed to `ApiClient::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self { base_url: s!(BASE_URL), token: token.into() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Which rush classification thresholds to apply.
/// `dashboard` forces "Severely Rushed (Heroes)" at 15+ missing hero
/// levels instead of 21+.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThresholdPreset {
    #[default]
    Standard,
    Dashboard,
}

impl ThresholdPreset {
    pub fn thresholds(self) -> RushThresholds {
        match self {
            ThresholdPreset::Standard => RushThresholds::default(),
            ThresholdPreset::Dashboard => RushThresholds::dashboard(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub history: PathBuf,
    pub html: PathBuf,
    pub export: PathBuf,
    pub log: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            history: PathBuf::from(HISTORY_FILE),
            html: PathBuf::from(HTML_REPORT_FILE),
            export: PathBuf::from(DASHBOARD_DIR).join(DASHBOARD_DATA_FILE),
            log: PathBuf::from(STORE_DIR).join(LOG_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub clan_tag: String,
    pub paths: OutputPaths,
    pub thresholds: ThresholdPreset,
    /// JSON file replacing the built-in reference tables
    pub tables_path: Option<PathBuf>,
    pub request_pause_ms: u64,
    pub raid_limit: u32,
    /// Skip console reports; files are still written
    pub quiet: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            clan_tag: s!(DEFAULT_CLAN_TAG),
            paths: OutputPaths::default(),
            thresholds: ThresholdPreset::default(),
            tables_path: None,
            request_pause_ms: REQUEST_PAUSE_MS,
            raid_limit: RAID_SEASON_LIMIT,
            quiet: false,
        }
    }
}
