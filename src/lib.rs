// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analyze;
pub mod cli;
pub mod config;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod file;
pub mod history;
pub mod model;
pub mod progress;
pub mod report;
pub mod runner;
pub mod rush;
pub mod war;
