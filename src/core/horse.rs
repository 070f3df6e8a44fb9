//! Horses and the `Racer` trait.
//!
//! A `Horse` has an immutable name and speed and a distance that only
//! grows. Each tick it moves `speed * r`, with `r` drawn from
//! `[MIN_DRAW, MAX_DRAW)` of the injected `RandomSource`.
//!
//! ```
//! use hippodrome::core::{FixedDraw, Horse};
//!
//! let mut horse = Horse::with_distance("Pegasus", 10.0, 100.0).unwrap();
//! horse.advance(&mut FixedDraw(0.5));
//! assert!((horse.distance() - 105.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::ValidationError;
use super::rng::{RandomSource, MAX_DRAW, MIN_DRAW};

/// Anything that can take part in a race.
///
/// `Hippodrome` is generic over this trait so a field can be made of
/// instrumented racers in tests.
pub trait Racer {
    /// Display name.
    fn name(&self) -> &str;

    /// Fixed speed.
    fn speed(&self) -> f64;

    /// Distance covered so far.
    fn distance(&self) -> f64;

    /// Move forward by one tick.
    fn advance(&mut self, rng: &mut dyn RandomSource);
}

/// A race horse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Horse {
    name: String,
    speed: f64,
    distance: f64,
}

impl Horse {
    /// Create a horse at the start line.
    pub fn new(name: impl Into<String>, speed: f64) -> Result<Self, ValidationError> {
        Self::with_distance(name, speed, 0.0)
    }

    /// Create a horse that has already covered `distance`.
    ///
    /// Checks run in order: name, then speed, then distance. The first
    /// failing check is reported.
    pub fn with_distance(
        name: impl Into<String>,
        speed: f64,
        distance: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if is_blank(&name) {
            error!(name = ?name, "horse rejected: name is blank");
            return Err(ValidationError::BlankName);
        }
        // Written as a negated `>=` so NaN is rejected too.
        if !(speed >= 0.0) {
            error!(%name, speed, "horse rejected: speed is negative");
            return Err(ValidationError::NegativeSpeed { speed });
        }
        if !(distance >= 0.0) {
            error!(%name, distance, "horse rejected: distance is negative");
            return Err(ValidationError::NegativeDistance { distance });
        }

        debug!(%name, speed, distance, "horse created");
        Ok(Self {
            name,
            speed,
            distance,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Advance by `speed * r`, `r` drawn from `[MIN_DRAW, MAX_DRAW)`.
    ///
    /// A negative or NaN draw moves the horse by zero, so distance never
    /// decreases whatever source is injected.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        let step = self.speed * rng.random_double(MIN_DRAW, MAX_DRAW);
        self.distance += step.max(0.0);
    }
}

/// True when `name` has no character other than whitespace.
///
/// Whitespace here is the ASCII controls `\t`..`\r` and `\u{1C}`..`\u{1F}`
/// plus the Unicode space, line and paragraph separators, except the
/// non-breaking ones (`\u{A0}`, `\u{2007}`, `\u{202F}`). `\u{85}` is not
/// whitespace.
fn is_blank(name: &str) -> bool {
    name.chars().all(|c| {
        matches!(c, '\t'..='\r' | '\u{1C}'..='\u{1F}')
            || (c.is_whitespace() && !matches!(c, '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}'))
    })
}

impl Racer for Horse {
    fn name(&self) -> &str {
        Horse::name(self)
    }

    fn speed(&self) -> f64 {
        Horse::speed(self)
    }

    fn distance(&self) -> f64 {
        Horse::distance(self)
    }

    fn advance(&mut self, rng: &mut dyn RandomSource) {
        Horse::advance(self, rng);
    }
}

/// Serialized description of a horse, as found in race configuration.
///
/// `name` is optional so that a missing name is reported as
/// `ValidationError::NullName` instead of a parse error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HorseSpec {
    pub name: Option<String>,
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl HorseSpec {
    /// Describe a horse starting at distance zero.
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: Some(name.into()),
            speed,
            distance: None,
        }
    }
}

impl TryFrom<HorseSpec> for Horse {
    type Error = ValidationError;

    fn try_from(spec: HorseSpec) -> Result<Self, Self::Error> {
        let Some(name) = spec.name else {
            error!("horse rejected: name is null");
            return Err(ValidationError::NullName);
        };
        Horse::with_distance(name, spec.speed, spec.distance.unwrap_or(0.0))
    }
}

impl From<&Horse> for HorseSpec {
    fn from(horse: &Horse) -> Self {
        Self {
            name: Some(horse.name.clone()),
            speed: horse.speed,
            distance: Some(horse.distance),
        }
    }
}
