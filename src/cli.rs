// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::consts::*;
use crate::config::options::{ApiConfig, AppOptions, OutputPaths, ThresholdPreset};
use crate::core::ApiClient;
use crate::endpoints::reference::{self, Ranking};
use crate::error::RunError;
use crate::progress::{ConsoleProgress, NullProgress, Progress};

/// Analyze a Clash of Clans clan: rush scores, war history, HTML + JSON reports.
#[derive(Debug, Parser)]
#[command(name = "clan_analyzer", version, about)]
pub struct Args {
    /// API token (developer.clashofclans.com)
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: String,

    /// Clan tag, with or without the leading '#'
    #[arg(short, long, default_value = DEFAULT_CLAN_TAG)]
    pub clan: String,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Persisted war history
    #[arg(long, default_value = HISTORY_FILE)]
    pub history: PathBuf,

    /// HTML dashboard output
    #[arg(long, default_value = HTML_REPORT_FILE)]
    pub html: PathBuf,

    /// JSON export output [default: dashboard/clan_data.json]
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Debug log file [default: .store/debug.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Rush classification thresholds
    #[arg(long, value_enum, default_value_t = ThresholdPreset::Standard)]
    pub thresholds: ThresholdPreset,

    /// JSON file with replacement max-level tables
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Pause between per-player requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Capital raid seasons to fetch
    #[arg(long, default_value_t = RAID_SEASON_LIMIT)]
    pub raid_limit: u32,

    /// Only write files; no console report
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Print reference data from the API as JSON and exit.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Reference(ReferenceQuery),
}

#[derive(Debug, Subcommand)]
pub enum ReferenceQuery {
    Leagues,
    WarLeagues,
    CapitalLeagues,
    BuilderBaseLeagues,
    Locations,
    Rankings {
        /// Location id (see `locations`)
        location: u64,
        #[arg(value_enum, default_value_t = Ranking::Clans)]
        kind: Ranking,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    PlayerLabels,
    ClanLabels,
    GoldPass,
}

/// '#' is optional on the command line; the API wants it.
pub fn normalize_tag(tag: &str) -> String {
    let t = tag.trim().to_ascii_uppercase();
    if t.starts_with('#') { t } else { format!("#{t}") }
}

impl Args {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| OutputPaths::default().log)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.token.trim()).with_base_url(self.base_url.as_str())
    }

    pub fn options(&self) -> AppOptions {
        let defaults = OutputPaths::default();
        AppOptions {
            clan_tag: normalize_tag(&self.clan),
            paths: OutputPaths {
                history: self.history.clone(),
                html: self.html.clone(),
                export: self.export.clone().unwrap_or(defaults.export),
                log: self.log_path(),
            },
            thresholds: self.thresholds,
            tables_path: self.tables.clone(),
            request_pause_ms: self.pause_ms,
            raid_limit: self.raid_limit,
            quiet: self.quiet,
        }
    }
}

pub fn run(args: &Args) -> Result<(), RunError> {
    let api = ApiClient::new(&args.api_config())?;

    if let Some(Command::Reference(query)) = &args.command {
        return print_reference(&api, query);
    }

    let opts = args.options();
    logf!("analyzing clan {}", opts.clan_tag);

    let mut console = ConsoleProgress::new();
    let mut silent = NullProgress;
    let progress: &mut dyn Progress = if opts.quiet { &mut silent } else { &mut console };

    let summary = crate::runner::run(&api, &opts, progress)?;

    if !opts.quiet {
        println!();
        println!("Fetched {} players ({} failed)", summary.players_fetched, summary.players_failed);
        for path in &summary.files_written {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RunError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_reference(api: &ApiClient, query: &ReferenceQuery) -> Result<(), RunError> {
    match query {
        ReferenceQuery::Leagues => print_json(&reference::leagues(api)?),
        ReferenceQuery::WarLeagues => print_json(&reference::war_leagues(api)?),
        ReferenceQuery::CapitalLeagues => print_json(&reference::capital_leagues(api)?),
        ReferenceQuery::BuilderBaseLeagues => print_json(&reference::builder_base_leagues(api)?),
        ReferenceQuery::Locations => print_json(&reference::locations(api)?),
        ReferenceQuery::Rankings { location, kind, limit } => {
            print_json(&reference::location_rankings(api, *location, *kind, *limit)?)
        }
        ReferenceQuery::PlayerLabels => print_json(&reference::player_labels(api)?),
        ReferenceQuery::ClanLabels => print_json(&reference::clan_labels(api)?),
        ReferenceQuery::GoldPass => print_json(&reference::gold_pass(api)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn tags_gain_hash_and_uppercase() {
        assert_eq!(normalize_tag("2j28ll2vu"), "#2J28LL2VU");
        assert_eq!(normalize_tag(" #ABC "), "#ABC");
    }

    #[test]
    fn options_fill_defaults() {
        let args = Args::try_parse_from(["clan_analyzer", "--token", "t", "--clan", "abc"]).unwrap();
        let opts = args.options();
        assert_eq!(opts.clan_tag, "#ABC");
        assert_eq!(opts.thresholds, ThresholdPreset::Standard);
        assert_eq!(opts.paths.export, OutputPaths::default().export);
        assert!(args.command.is_none());
    }

    #[test]
    fn reference_subcommand_parses() {
        let args = Args::try_parse_from([
            "clan_analyzer", "--token", "t", "reference", "rankings", "32000006", "players", "--limit", "5",
        ])
        .unwrap();
        match args.command {
            Some(Command::Reference(ReferenceQuery::Rankings { location, kind, limit })) => {
                assert_eq!(location, 32000006);
                assert_eq!(kind, Ranking::Players);
                assert_eq!(limit, 5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn dashboard_preset_selectable() {
        let args =
            Args::try_parse_from(["clan_analyzer", "--token", "t", "--thresholds", "dashboard"]).unwrap();
        assert_eq!(args.thresholds, ThresholdPreset::Dashboard);
    }
}
