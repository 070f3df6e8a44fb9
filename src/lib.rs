//! # hippodrome
//!
//! A minimal horse-race simulation.
//!
//! Horses with fixed speeds advance by `speed * r` each tick, `r` drawn
//! uniformly from `[0.2, 0.9)`. The horse with the greatest distance leads;
//! ties go to the earliest lane.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every draw goes through a `RandomSource`
//!    passed in by the caller. Tests use `FixedDraw`, races use a seeded
//!    `RaceRng`.
//!
//! 2. **Fail fast**: horses, tracks and races are validated on
//!    construction and return `Result`. Once built, nothing fails.
//!
//! 3. **No presentation**: the driver reports standings; rendering and
//!    pacing belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Horses, the `Racer` trait, random sources, errors
//! - `track`: The `Hippodrome` race collection
//! - `race`: Configuration, finish rules, the `Race` driver, results

pub mod core;
pub mod race;
pub mod track;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, FixedDraw, Horse, HorseSpec, RaceRng, RaceRngState, Racer, RandomSource,
    ValidationError, MAX_DRAW, MIN_DRAW,
};

pub use crate::track::Hippodrome;

pub use crate::race::{FinishRule, Race, RaceConfig, RaceResult, Standing};
