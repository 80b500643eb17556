// src/report/export.rs

// JSON document for the separate front-end. Keys are camelCase; raw API
// sub-objects are passed through as they came in.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::analyze::{RushEntry, RushOverview, count_desc};
use crate::config::consts::{EXPORT_RAID_LIMIT, EXPORT_WARLOG_LIMIT};
use crate::error::RunError;
use crate::file::write_atomic;
use crate::history::{CwlSeasonRecord, HistoryStore, PlayerRecord};
use crate::model::{
    Clan, ClanWar, GoldPassSeason, LeagueGroup, Player, RaidSeason, Unit, WarLogEntry, WarState,
};
use crate::rush::{Category, Deficit, ReferenceTables, RushStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitExport {
    pub name: String,
    pub level: u32,
    /// Max at the player's current town hall when known, else the API's own max.
    pub max_level: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentExport {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub village: crate::model::Village,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RushExport {
    pub is_rushed: bool,
    pub rush_score: f64,
    pub rush_percentage: f64,
    pub status: RushStatus,
    pub hero_score: f64,
    pub troop_score: f64,
    pub spell_score: f64,
    pub total_missing_hero_levels: u32,
    pub rushed_heroes: Vec<Deficit>,
    pub rushed_troops: Vec<Deficit>,
    pub rushed_spells: Vec<Deficit>,
}

impl From<&RushEntry> for RushExport {
    fn from(e: &RushEntry) -> Self {
        let r = &e.report;
        Self {
            is_rushed: r.is_rushed,
            rush_score: r.rush_score,
            rush_percentage: r.rush_percentage,
            status: r.status,
            hero_score: r.hero_score,
            troop_score: r.troop_score,
            spell_score: r.spell_score,
            total_missing_hero_levels: r.total_missing_hero_levels,
            rushed_heroes: r.rushed_heroes.clone(),
            rushed_troops: r.rushed_troops.clone(),
            rushed_spells: r.rushed_spells.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarStatsExport {
    pub total_attacks: u32,
    pub total_stars: u32,
    pub total_destruction: f64,
    pub three_stars: u32,
    pub two_stars: u32,
    pub one_stars: u32,
    pub zero_stars: u32,
    pub wars_participated: u32,
}

impl From<&PlayerRecord> for WarStatsExport {
    fn from(p: &PlayerRecord) -> Self {
        Self {
            total_attacks: p.total_attacks,
            total_stars: p.total_stars,
            total_destruction: p.total_destruction,
            three_stars: p.stars.three_stars,
            two_stars: p.stars.two_stars,
            one_stars: p.stars.one_star,
            zero_stars: p.stars.zero_stars,
            wars_participated: p.wars_participated,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExport<'a> {
    pub tag: &'a str,
    pub name: &'a str,
    pub town_hall_level: u32,
    pub town_hall_weapon_level: Option<u32>,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub war_stars: u32,
    pub attack_wins: u32,
    pub defense_wins: u32,
    pub builder_hall_level: u32,
    pub builder_base_trophies: u32,
    pub best_builder_base_trophies: u32,
    pub role: Option<&'a str>,
    pub war_preference: Option<&'a str>,
    pub donations: u32,
    pub donations_received: u32,
    pub clan_capital_contributions: u64,
    pub clan: Option<&'a Value>,
    pub league: Option<&'a crate::model::NamedRef>,
    pub builder_base_league: Option<&'a crate::model::NamedRef>,
    pub achievements: &'a [Value],
    pub labels: &'a [Value],
    pub heroes: Vec<UnitExport>,
    pub troops: Vec<UnitExport>,
    pub spells: Vec<UnitExport>,
    pub hero_equipment: Vec<EquipmentExport>,
    pub rush_analysis: Option<RushExport>,
    pub war_stats: WarStatsExport,
}

fn units<'u>(
    list: impl Iterator<Item = &'u Unit>,
    category: Category,
    tier: u32,
    tables: &ReferenceTables,
) -> Vec<UnitExport> {
    list.map(|u| UnitExport {
        name: u.name.clone(),
        level: u.level,
        max_level: tables
            .lookup(category, &u.name, tier)
            .filter(|m| *m > 0)
            .unwrap_or(u.max_level),
    })
    .collect()
}

impl<'a> PlayerExport<'a> {
    pub fn build(
        p: &'a Player,
        rush: Option<&RushEntry>,
        record: Option<&PlayerRecord>,
        tables: &ReferenceTables,
    ) -> Self {
        let tier = p.town_hall_level;
        Self {
            tag: &p.tag,
            name: &p.name,
            town_hall_level: p.town_hall_level,
            town_hall_weapon_level: p.town_hall_weapon_level,
            exp_level: p.exp_level,
            trophies: p.trophies,
            best_trophies: p.best_trophies,
            war_stars: p.war_stars,
            attack_wins: p.attack_wins,
            defense_wins: p.defense_wins,
            builder_hall_level: p.builder_hall_level,
            builder_base_trophies: p.builder_base_trophies,
            best_builder_base_trophies: p.best_builder_base_trophies,
            role: p.role.as_deref(),
            war_preference: p.war_preference.as_deref(),
            donations: p.donations,
            donations_received: p.donations_received,
            clan_capital_contributions: p.clan_capital_contributions,
            clan: p.clan.as_ref(),
            league: p.league.as_ref(),
            builder_base_league: p.builder_base_league.as_ref(),
            achievements: &p.achievements,
            labels: &p.labels,
            heroes: units(p.home_heroes(), Category::Hero, tier, tables),
            troops: units(p.home_troops(), Category::Troop, tier, tables),
            spells: units(p.home_spells(), Category::Spell, tier, tables),
            hero_equipment: p
                .hero_equipment
                .iter()
                .map(|e| EquipmentExport {
                    name: e.name.clone(),
                    level: e.level,
                    max_level: e.max_level,
                    village: e.village,
                })
                .collect(),
            rush_analysis: rush.map(RushExport::from),
            war_stats: record.map(WarStatsExport::from).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalExport<'a> {
    pub cwl_seasons: &'a BTreeMap<String, CwlSeasonRecord>,
    pub last_updated: Option<&'a str>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub th_distribution: BTreeMap<u32, usize>,
    pub role_distribution: BTreeMap<String, usize>,
    pub league_distribution: BTreeMap<String, usize>,
    pub rush_distribution: BTreeMap<String, usize>,
    pub total_war_stars: u64,
    pub total_donations: u64,
    pub total_capital_contributions: u64,
    pub average_trophies: f64,
    pub rushed_count: usize,
    pub average_rush_score: f64,
}

/// Coarse bucket the front-end charts by. Hero overrides fold into
/// "Severely Rushed" and new accounts into "Other".
fn distribution_bucket(status: RushStatus) -> &'static str {
    match status {
        RushStatus::SeverelyRushedHeroes => RushStatus::SeverelyRushed.label(),
        RushStatus::NewAccount => "Other",
        other => other.label(),
    }
}

pub fn statistics(players: &[Player], rush: &RushOverview) -> Statistics {
    let mut th_distribution = BTreeMap::new();
    for p in players {
        *th_distribution.entry(p.town_hall_level).or_insert(0usize) += 1;
    }
    let role_distribution = count_desc(
        players.iter().map(|p| p.role.clone().unwrap_or_else(|| s!("unknown"))),
    )
    .into_iter()
    .collect();
    let league_distribution = count_desc(players.iter().map(|p| s!(p.league_name())))
        .into_iter()
        .collect();
    let mut rush_distribution = BTreeMap::new();
    for (status, n) in &rush.statuses {
        *rush_distribution.entry(s!(distribution_bucket(*status))).or_insert(0) += *n;
    }

    let n = players.len() as f64;
    let trophies: u64 = players.iter().map(|p| u64::from(p.trophies)).sum();
    let rush_total: f64 = rush.entries.iter().map(|e| e.report.rush_score).sum();

    Statistics {
        th_distribution,
        role_distribution,
        league_distribution,
        rush_distribution,
        total_war_stars: players.iter().map(|p| u64::from(p.war_stars)).sum(),
        total_donations: players.iter().map(|p| u64::from(p.donations)).sum(),
        total_capital_contributions: players.iter().map(|p| p.clan_capital_contributions).sum(),
        average_trophies: if players.is_empty() { 0.0 } else { trophies as f64 / n },
        rushed_count: rush.rushed,
        average_rush_score: if rush.entries.is_empty() {
            0.0
        } else {
            rush_total / rush.entries.len() as f64
        },
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport<'a> {
    pub last_updated: String,
    pub clan: &'a Clan,
    pub players: Vec<PlayerExport<'a>>,
    pub war_log: &'a [WarLogEntry],
    pub current_war: Option<&'a ClanWar>,
    pub capital_raids: &'a [RaidSeason],
    pub gold_pass: Option<&'a GoldPassSeason>,
    pub cwl_group: Option<&'a LeagueGroup>,
    pub historical_data: HistoricalExport<'a>,
    pub statistics: Statistics,
}

/// Everything fetched and derived in one run.
pub struct ExportInput<'a> {
    pub clan: &'a Clan,
    pub players: &'a [Player],
    pub rush: &'a RushOverview,
    pub history: &'a HistoryStore,
    pub tables: &'a ReferenceTables,
    pub warlog: &'a [WarLogEntry],
    pub current_war: Option<&'a ClanWar>,
    pub capital_raids: &'a [RaidSeason],
    pub gold_pass: Option<&'a GoldPassSeason>,
    pub cwl_group: Option<&'a LeagueGroup>,
    pub generated_at: String,
}

pub fn build_export<'a>(input: &ExportInput<'a>) -> DashboardExport<'a> {
    let players = input
        .players
        .iter()
        .map(|p| {
            PlayerExport::build(
                p,
                input.rush.get(&p.tag),
                input.history.players.get(&p.tag),
                input.tables,
            )
        })
        .collect();

    DashboardExport {
        last_updated: input.generated_at.clone(),
        clan: input.clan,
        players,
        war_log: &input.warlog[..input.warlog.len().min(EXPORT_WARLOG_LIMIT)],
        current_war: input.current_war.filter(|w| w.state != WarState::NotInWar),
        capital_raids: &input.capital_raids[..input.capital_raids.len().min(EXPORT_RAID_LIMIT)],
        gold_pass: input.gold_pass,
        cwl_group: input.cwl_group,
        historical_data: HistoricalExport {
            cwl_seasons: &input.history.cwl_seasons,
            last_updated: input.history.last_updated.as_deref(),
        },
        statistics: statistics(input.players, input.rush),
    }
}

pub fn write_export(path: &Path, input: &ExportInput<'_>) -> Result<(), RunError> {
    let doc = build_export(input);
    let json = serde_json::to_string_pretty(&doc)?;
    write_atomic(path, json.as_bytes())?;
    logf!("dashboard data exported to {}", path.display());
    Ok(())
}
