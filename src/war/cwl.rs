// src/war/cwl.rs

// League week: walk every round, fold our side of each started war into
// the history store, and keep a season-wide tally for the in-run tables.

use indexmap::IndexMap;

use super::extract::{PlayerWarStats, StarCounts, extract};
use crate::history::{CwlSeasonRecord, HistoryStore, WarRef, now_iso, season_key};
use crate::model::{ClanWar, LeagueGroup, WarState};

/// Anything that can hand out league wars by tag.
/// The API client implements this; tests use an in-memory map.
pub trait LeagueWarSource {
    /// `None` when the war cannot be fetched.
    fn league_war(&self, war_tag: &str) -> Option<ClanWar>;
}

impl<S: LeagueWarSource + ?Sized> LeagueWarSource for &S {
    fn league_war(&self, war_tag: &str) -> Option<ClanWar> {
        (**self).league_war(war_tag)
    }
}

/// Season-wide totals for one player.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaguePlayerTotals {
    pub name: String,
    pub tag: String,
    pub th: u32,
    pub total_stars: u32,
    pub total_destruction: f64,
    pub attacks_used: u32,
    pub stars: StarCounts,
    /// Wars in which the player used at least one attack.
    pub wars_participated: u32,
    pub hit_up: u32,
    pub hit_same: u32,
    pub hit_down: u32,
}

impl LeaguePlayerTotals {
    fn absorb(&mut self, war: &PlayerWarStats) {
        self.name = war.name.clone();
        self.tag = war.tag.clone();
        self.th = self.th.max(war.th);
        self.total_stars += war.total_stars;
        self.total_destruction += war.total_destruction;
        self.attacks_used += war.attacks_used;
        self.stars.merge(&war.stars);
        self.hit_up += war.hit_up;
        self.hit_same += war.hit_same;
        self.hit_down += war.hit_down;
        if war.attacks_used > 0 {
            self.wars_participated += 1;
        }
    }

    pub fn avg_stars(&self) -> f64 {
        if self.attacks_used == 0 { 0.0 } else { f64::from(self.total_stars) / f64::from(self.attacks_used) }
    }

    pub fn avg_destruction(&self) -> f64 {
        if self.attacks_used == 0 { 0.0 } else { self.total_destruction / f64::from(self.attacks_used) }
    }
}

/// One scheduled war we took part in, oriented so `clan` is us.
#[derive(Clone, Debug)]
pub struct LeagueRoundWar {
    pub round: usize,
    pub war_tag: String,
    pub war: ClanWar,
    /// Empty until the battle day starts.
    pub stats: IndexMap<String, PlayerWarStats>,
}

#[derive(Clone, Debug, Default)]
pub struct LeagueSummary {
    pub season: String,
    pub state: String,
    pub clans: Vec<(String, String)>,
    pub round_count: usize,
    pub wars: Vec<LeagueRoundWar>,
    pub players: IndexMap<String, LeaguePlayerTotals>,
    /// Started wars only; preparation-day wars are listed but not counted.
    pub wars_analyzed: u32,
    /// Season was already marked complete before this run.
    pub previously_complete: bool,
}

impl LeagueSummary {
    pub fn total_attacks(&self) -> u32 {
        self.players.values().map(|p| p.attacks_used).sum()
    }

    pub fn total_stars(&self) -> u32 {
        self.players.values().map(|p| p.total_stars).sum()
    }

    pub fn total_three_stars(&self) -> u32 {
        self.players.values().map(|p| p.stars.three_stars).sum()
    }

    /// Players sorted by stars, then destruction, both descending.
    pub fn ranked(&self) -> Vec<&LeaguePlayerTotals> {
        let mut v: Vec<_> = self.players.values().collect();
        v.sort_by(|a, b| {
            b.total_stars
                .cmp(&a.total_stars)
                .then(b.total_destruction.total_cmp(&a.total_destruction))
        });
        v
    }
}

/// Walk the league group, recording every started war into `store` under
/// a season/round-scoped war ID, and write the season record when at least
/// one war was analyzed.
pub fn analyze_league(
    group: &LeagueGroup,
    clan_tag: &str,
    source: &impl LeagueWarSource,
    store: &mut HistoryStore,
) -> LeagueSummary {
    let key = season_key(&group.season);
    let mut summary = LeagueSummary {
        season: group.season.clone(),
        state: group.state.clone(),
        clans: group.clans.iter().map(|c| (c.name.clone(), c.tag.clone())).collect(),
        round_count: group.rounds.len(),
        previously_complete: store.season_complete(&key),
        ..LeagueSummary::default()
    };

    for (idx, round) in group.rounds.iter().enumerate() {
        let round_no = idx + 1;
        for war_tag in round.scheduled_tags() {
            let Some(war) = source.league_war(war_tag) else {
                logd!("league war {war_tag} unavailable");
                continue;
            };
            let Some(war) = war.oriented_for(clan_tag) else {
                continue;
            };

            let mut entry = LeagueRoundWar {
                round: round_no,
                war_tag: s!(war_tag),
                war,
                stats: IndexMap::new(),
            };

            if entry.war.state.has_started() {
                summary.wars_analyzed += 1;
                entry.stats = extract(&entry.war);

                let war_ref = WarRef::league(&group.season, round_no, war_tag);
                let recorded = store.record_war(entry.stats.values(), &war_ref);
                logd!("CWL round {round_no} {war_tag}: {recorded} players newly recorded");

                for stats in entry.stats.values() {
                    summary
                        .players
                        .entry(stats.tag.clone())
                        .or_default()
                        .absorb(stats);
                }
            } else if entry.war.state == WarState::Preparation {
                logd!("CWL round {round_no} {war_tag} still in preparation");
            }
            summary.wars.push(entry);
        }
    }

    if summary.wars_analyzed > 0 {
        store.record_season(
            &key,
            CwlSeasonRecord {
                season: group.season.clone(),
                wars_analyzed: summary.wars_analyzed,
                total_attacks: summary.total_attacks(),
                total_stars: summary.total_stars(),
                recorded_date: now_iso(),
                complete: group.has_ended(),
            },
        );
    }
    summary
}
