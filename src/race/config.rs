//! Race configuration.
//!
//! A race is described by:
//! - `seed`: RNG seed; `None` draws one from the OS
//! - `horses`: the field, in lane order
//! - `finish`: when the driver stops ticking
//!
//! ```
//! use hippodrome::race::{FinishRule, RaceConfig};
//!
//! let config = RaceConfig::from_json(r#"{
//!     "seed": 7,
//!     "horses": [{"name": "Zephyr", "speed": 2.6}, {"name": "Blaze", "speed": 2.7}],
//!     "finish": {"distance": {"target": 50.0, "max_ticks": 1000}}
//! }"#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.finish, FinishRule::Distance { target: 50.0, max_ticks: 1000 });
//! ```

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{ConfigError, HorseSpec};

/// Ticks run by the default finish rule.
pub const DEFAULT_TICKS: u32 = 100;

/// When a race ends.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishRule {
    /// Run exactly this many ticks.
    Ticks(u32),
    /// Stop once any racer reaches `target`, or after `max_ticks`.
    Distance { target: f64, max_ticks: u32 },
}

impl Default for FinishRule {
    fn default() -> Self {
        FinishRule::Ticks(DEFAULT_TICKS)
    }
}

impl FinishRule {
    /// Reject rules that could never stop a race or that stop before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = match *self {
            FinishRule::Ticks(0) => "tick count must be positive".to_string(),
            FinishRule::Distance { max_ticks: 0, .. } => "max_ticks must be positive".to_string(),
            FinishRule::Distance { target, .. } if !(target > 0.0) || target.is_infinite() => {
                format!("target distance must be positive and finite, got {target}")
            }
            _ => return Ok(()),
        };
        error!(finish = ?self, %reason, "finish rule rejected");
        Err(ConfigError::InvalidFinish(reason))
    }

    /// Upper bound on ticks under this rule.
    #[must_use]
    pub fn tick_limit(&self) -> u32 {
        match *self {
            FinishRule::Ticks(n) => n,
            FinishRule::Distance { max_ticks, .. } => max_ticks,
        }
    }
}

/// Full description of a race.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    #[serde(default)]
    pub seed: Option<u64>,

    /// Absent and empty are distinct errors, so this stays optional.
    #[serde(default)]
    pub horses: Option<Vec<HorseSpec>>,

    #[serde(default)]
    pub finish: FinishRule,
}

impl RaceConfig {
    /// Create a configuration for `horses` with the default finish rule.
    pub fn new(horses: Vec<HorseSpec>) -> Self {
        Self {
            seed: None,
            horses: Some(horses),
            finish: FinishRule::default(),
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the finish rule.
    #[must_use]
    pub fn with_finish(mut self, finish: FinishRule) -> Self {
        self.finish = finish;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Only the syntax and the finish rule are checked here; horses are
    /// validated when the race is built.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.finish.validate()?;
        Ok(config)
    }
}

impl Default for RaceConfig {
    /// The classic seven-horse field over 100 ticks.
    fn default() -> Self {
        Self::new(vec![
            HorseSpec::new("Bucephalus", 2.4),
            HorseSpec::new("Ace of Spades", 2.5),
            HorseSpec::new("Zephyr", 2.6),
            HorseSpec::new("Blaze", 2.7),
            HorseSpec::new("Lobster", 2.8),
            HorseSpec::new("Pegasus", 2.9),
            HorseSpec::new("Cherry", 3.0),
        ])
    }
}
