// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://api.clashofclans.com/v1";
pub const TOKEN_ENV: &str = "COC_API_TOKEN";
pub const REQUEST_PAUSE_MS: u64 = 50; // be polite between per-player fetches

// Clan
pub const DEFAULT_CLAN_TAG: &str = "#2J28LL2VU";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const HISTORY_FILE: &str = "clan_history.json";

// Reports
pub const HTML_REPORT_FILE: &str = "clan_dashboard.html";
pub const DASHBOARD_DIR: &str = "dashboard";
pub const DASHBOARD_DATA_FILE: &str = "clan_data.json";

// Limits
pub const RAID_SEASON_LIMIT: u32 = 10;
pub const EXPORT_WARLOG_LIMIT: usize = 50;
pub const EXPORT_RAID_LIMIT: usize = 10;
pub const DEFAULT_ATTACKS_PER_MEMBER: u32 = 2;
