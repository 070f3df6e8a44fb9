//! The race driver.
//!
//! `Race` owns a field and a random source and ticks the field until its
//! `FinishRule` says stop. It does no sleeping and no printing; callers
//! that want to animate a race call `tick` themselves and render
//! `standings` between ticks.
//!
//! ```
//! use hippodrome::race::{Race, RaceConfig};
//!
//! let mut race = Race::from_config(RaceConfig::default().with_seed(42)).unwrap();
//! let result = race.run();
//!
//! assert_eq!(result.ticks, 100);
//! assert_eq!(result.winner.lane, race.track().winner_index());
//! ```

use tracing::{debug, info};

use crate::core::{ConfigError, Horse, RaceRng, RandomSource, Racer};
use crate::track::Hippodrome;

use super::config::{FinishRule, RaceConfig};
use super::result::{standings, RaceResult, Standing};

/// A race in progress.
#[derive(Clone, Debug)]
pub struct Race<H = Horse, R = RaceRng> {
    track: Hippodrome<H>,
    rng: R,
    finish: FinishRule,
    ticks: u32,
}

impl<H: Racer, R: RandomSource> Race<H, R> {
    /// Create a race over an already validated field.
    pub fn new(track: Hippodrome<H>, rng: R, finish: FinishRule) -> Result<Self, ConfigError> {
        finish.validate()?;
        Ok(Self {
            track,
            rng,
            finish,
            ticks: 0,
        })
    }

    /// The field.
    #[must_use]
    pub fn track(&self) -> &Hippodrome<H> {
        &self.track
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn finish(&self) -> FinishRule {
        self.finish
    }

    /// Ticks run so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Whether the finish rule has been met.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self.finish {
            FinishRule::Ticks(n) => self.ticks >= n,
            FinishRule::Distance { target, max_ticks } => {
                self.ticks >= max_ticks || self.track.winner().distance() >= target
            }
        }
    }

    /// Advance the field once and return the new tick count.
    ///
    /// Ticking past the finish is allowed; `run` is what stops. The count
    /// saturates at `u32::MAX`.
    pub fn tick(&mut self) -> u32 {
        self.track.advance(&mut self.rng);
        self.ticks = self.ticks.saturating_add(1);
        debug!(
            tick = self.ticks,
            leader = self.track.winner().name(),
            distance = self.track.winner().distance(),
            "tick"
        );
        self.ticks
    }

    /// Current ranking, furthest first.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.track)
    }

    /// Tick until finished and report the result.
    pub fn run(&mut self) -> RaceResult {
        while !self.is_finished() {
            self.tick();
        }
        let result = RaceResult::from_track(self.ticks, &self.track);
        info!(
            ticks = result.ticks,
            winner = %result.winner.name,
            distance = result.winner.distance,
            "race finished"
        );
        result
    }
}

impl Race<Horse, RaceRng> {
    /// Build a race from configuration.
    ///
    /// Horses are validated in lane order and the first failure is returned.
    pub fn from_config(config: RaceConfig) -> Result<Self, ConfigError> {
        let track = Hippodrome::from_specs(config.horses)?;
        let rng = match config.seed {
            Some(seed) => RaceRng::new(seed),
            None => RaceRng::from_entropy(),
        };
        debug!(horses = track.len(), seed = rng.seed(), "race configured");
        Self::new(track, rng, config.finish)
    }
}
