// src/rush/mod.rs
//! Rush scoring.
//!
//! A player is judged against the levels attainable one town hall *below*
//! their current one. `tables` holds those levels; `score` turns a player
//! snapshot into a [`RushReport`].
pub mod score;
pub mod tables;

pub use score::{Deficit, RushReport, RushStatus, RushThresholds, score};
pub use tables::{Category, ReferenceTables};
