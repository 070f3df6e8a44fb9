//! Race driver: configuration, finish rules, tick loop, results.
//!
//! The track and horses know nothing about when a race ends. This module
//! decides that via `FinishRule` and turns the final field into a
//! `RaceResult`.

pub mod config;
pub mod result;
pub mod runner;

pub use config::{FinishRule, RaceConfig, DEFAULT_TICKS};
pub use result::{standings, RaceResult, Standing};
pub use runner::Race;
