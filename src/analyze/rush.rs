// src/analyze/rush.rs
use super::{count_desc, percent};
use crate::model::Player;
use crate::rush::{ReferenceTables, RushReport, RushStatus, RushThresholds, score};

/// Heroes this many levels short (or more) are called out by name.
pub const HERO_CALLOUT_ABOVE: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct RushEntry {
    pub name: String,
    pub tag: String,
    pub th: u32,
    pub report: RushReport,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RushOverview {
    /// Highest rush score first.
    pub entries: Vec<RushEntry>,
    pub rushed: usize,
    pub statuses: Vec<(RushStatus, usize)>,
}

impl RushOverview {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn not_rushed(&self) -> usize {
        self.total() - self.rushed
    }

    pub fn rushed_share(&self) -> f64 {
        percent(self.rushed as f64, self.total() as f64)
    }

    pub fn get(&self, tag: &str) -> Option<&RushEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Players missing more than a handful of hero levels, worst first.
    pub fn hero_rushed(&self, top: usize) -> Vec<&RushEntry> {
        let mut v: Vec<&RushEntry> = self
            .entries
            .iter()
            .filter(|e| e.report.total_missing_hero_levels > HERO_CALLOUT_ABOVE)
            .collect();
        v.sort_by(|a, b| b.report.total_missing_hero_levels.cmp(&a.report.total_missing_hero_levels));
        v.truncate(top);
        v
    }
}

pub fn rush_overview(
    players: &[Player],
    tables: &ReferenceTables,
    thresholds: &RushThresholds,
) -> RushOverview {
    let mut entries: Vec<RushEntry> = players
        .iter()
        .map(|p| RushEntry {
            name: p.name.clone(),
            tag: p.tag.clone(),
            th: p.town_hall_level,
            report: score(p, tables, thresholds),
        })
        .collect();
    entries.sort_by(|a, b| b.report.rush_score.total_cmp(&a.report.rush_score));

    let rushed = entries.iter().filter(|e| e.report.is_rushed).count();
    let statuses = count_desc(entries.iter().map(|e| e.report.status));
    RushOverview { entries, rushed, statuses }
}
