// src/runner.rs
//
// One analysis pass, strictly sequential:
// load history → clan + members (mandatory) → player details → analyzers →
// war log / current war / league / raids / gold pass (optional) →
// save history → HTML dashboard → JSON export.

use std::fmt;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::analyze;
use crate::config::options::AppOptions;
use crate::core::net::optional;
use crate::endpoints::ClanSource;
use crate::error::RunError;
use crate::history::{HistoryStore, WarRef};
use crate::model::{ClanWar, Player, WarState};
use crate::progress::Progress;
use crate::report::{
    console,
    export::{ExportInput, write_export},
    html::{DashboardInput, write_dashboard},
};
use crate::rush::ReferenceTables;
use crate::war::{analyze_league, extract};

/// Rows shown in the console "top N" lists.
const TOP: usize = 10;

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub players_fetched: usize,
    pub players_failed: usize,
    /// Players newly credited with the current war (0 on a repeat run).
    pub war_records_added: usize,
    pub league_wars_analyzed: u32,
    pub files_written: Vec<PathBuf>,
}

/// Print a console section unless quiet.
fn emit<F>(quiet: bool, render: F)
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    if quiet {
        return;
    }
    let mut buf = String::new();
    if render(&mut buf).is_ok() {
        print!("{buf}");
    }
}

pub fn load_tables(opts: &AppOptions) -> Result<ReferenceTables, RunError> {
    match &opts.tables_path {
        Some(path) => {
            logf!("reference tables from {}", path.display());
            ReferenceTables::load(path)
        }
        None => Ok(ReferenceTables::default()),
    }
}

fn fetch_players(
    source: &impl ClanSource,
    tags: &[(String, String)],
    pause: Duration,
    progress: &mut dyn Progress,
) -> (Vec<Player>, usize) {
    progress.begin(tags.len());
    let mut players = Vec::with_capacity(tags.len());
    let mut failed = 0;
    for (i, (tag, name)) in tags.iter().enumerate() {
        let fetched = match source.player(tag) {
            Ok(p) => {
                players.push(p);
                true
            }
            Err(e) => {
                logw!("player {tag} ({name}) unavailable: {e}");
                progress.log(&format!("Skipping {name}: details unavailable"));
                failed += 1;
                false
            }
        };
        progress.item_done(i, name, fetched);
        if !pause.is_zero() && i + 1 < tags.len() {
            thread::sleep(pause);
        }
    }
    progress.finish();
    (players, failed)
}

pub fn run(
    source: &impl ClanSource,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary, RunError> {
    let quiet = opts.quiet;
    let tag = opts.clan_tag.as_str();
    let tables = load_tables(opts)?;
    let thresholds = opts.thresholds.thresholds();
    let mut summary = RunSummary::default();

    let mut store = HistoryStore::load(&opts.paths.history, tag);

    let clan = source.clan(tag).map_err(|e| {
        loge!("clan {tag} unavailable: {e}");
        RunError::ClanUnavailable(e)
    })?;
    emit(quiet, |w| console::clan_info(w, &clan));

    let members = source.members(tag).map_err(|e| {
        loge!("members of {tag} unavailable: {e}");
        RunError::MembersUnavailable(e)
    })?;
    let tags: Vec<(String, String)> =
        members.iter().map(|m| (m.tag.clone(), m.name.clone())).collect();

    let (players, failed) = fetch_players(
        source,
        &tags,
        Duration::from_millis(opts.request_pause_ms),
        progress,
    );
    summary.players_fetched = players.len();
    summary.players_failed = failed;
    if players.is_empty() {
        loge!("no player details could be fetched");
        return Err(RunError::NoPlayers);
    }

    emit(quiet, |w| console::members(w, &analyze::summarize_members(&members, TOP)));
    emit(quiet, |w| console::players(w, &analyze::summarize_players(&players, TOP)));
    emit(quiet, |w| console::roster(w, &analyze::roster(&players)));
    emit(quiet, |w| console::strength(w, &analyze::strength(&players)));

    let rush = analyze::rush_overview(&players, &tables, &thresholds);
    emit(quiet, |w| console::rush(w, &rush));

    let warlog = optional("war log", source.warlog(tag)).unwrap_or_default();
    emit(quiet, |w| console::warlog(w, &analyze::summarize_warlog(&warlog), &warlog));

    let current_war = optional("current war", source.current_war(tag));
    emit(quiet, |w| console::current_war_header(w, current_war.as_ref()));
    if let Some(war) = current_war.as_ref().filter(|w| w.state != WarState::NotInWar) {
        summary.war_records_added = record_current_war(war, &mut store, quiet);
    }

    let cwl_group = optional("league group", source.league_group(tag));
    if let Some(group) = &cwl_group {
        let league = analyze_league(group, tag, source, &mut store);
        summary.league_wars_analyzed = league.wars_analyzed;
        emit(quiet, |w| console::league(w, &league));
    } else {
        emit(quiet, |w| console::league_absent(w));
    }

    let capital_raids =
        optional("capital raids", source.raid_seasons(tag, opts.raid_limit)).unwrap_or_default();
    let gold_pass = optional("gold pass", source.gold_pass());

    emit(quiet, |w| console::history(w, &analyze::summarize_history(&store, TOP)));

    store.save(&opts.paths.history)?;
    summary.files_written.push(opts.paths.history.clone());

    let generated = Local::now();
    write_dashboard(
        &opts.paths.html,
        &DashboardInput {
            clan: &clan,
            players: &players,
            rush: &rush,
            history: &store,
            generated_at: &generated.format("%Y-%m-%d %H:%M").to_string(),
        },
    )?;
    summary.files_written.push(opts.paths.html.clone());

    write_export(
        &opts.paths.export,
        &ExportInput {
            clan: &clan,
            players: &players,
            rush: &rush,
            history: &store,
            tables: &tables,
            warlog: &warlog,
            current_war: current_war.as_ref(),
            capital_raids: &capital_raids,
            gold_pass: gold_pass.as_ref(),
            cwl_group: cwl_group.as_ref(),
            generated_at: generated.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        },
    )?;
    summary.files_written.push(opts.paths.export.clone());

    logf!(
        "run complete: {} players, {} failed, {} new war records",
        summary.players_fetched, summary.players_failed, summary.war_records_added
    );
    Ok(summary)
}

/// Attack breakdown for the live war; folded into history once battle day starts.
fn record_current_war(war: &ClanWar, store: &mut HistoryStore, quiet: bool) -> usize {
    let stats = extract(war);
    if stats.is_empty() {
        return 0;
    }
    let attack_summary = analyze::summarize_attacks(&stats);
    emit(quiet, |w| console::war_attacks(w, "Current War", &stats, &attack_summary));

    // Preparation day has no attacks; recording it would lock the war ID
    // before any attack could be counted.
    if !war.state.has_started() {
        return 0;
    }
    let war_ref = WarRef::regular(war);
    let added = store.record_war(stats.values(), &war_ref);
    logd!("current war {}: {added} players newly recorded", war_ref.id);
    added
}
