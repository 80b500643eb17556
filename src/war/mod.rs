// src/war/mod.rs
pub mod cwl;
pub mod extract;

pub use cwl::{LeagueSummary, LeagueWarSource, analyze_league};
pub use extract::{AttackOutcome, HitDirection, PlayerWarStats, StarCounts, extract};
