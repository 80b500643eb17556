// src/report/mod.rs
//! Presentation. Nothing here fetches or mutates; every renderer takes the
//! analyzer outputs by reference.
//!
//! - `console`: the stdout report, section by section
//! - `html`:    one self-contained dashboard page (Chart.js from a CDN)
//! - `export`:  camelCase JSON for the separate front-end
pub mod console;
pub mod export;
pub mod html;
