//! The race collection.

use serde::Serialize;
use tracing::{error, trace};

use crate::core::{Horse, HorseSpec, RandomSource, Racer, ValidationError};

/// An ordered, non-empty field of racers.
///
/// Order is fixed at construction and breaks ties in `winner`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hippodrome<H = Horse> {
    horses: Vec<H>,
}

impl<H: Racer> Hippodrome<H> {
    /// Build a field from `horses`, keeping their order.
    pub fn new(horses: Vec<H>) -> Result<Self, ValidationError> {
        if horses.is_empty() {
            error!("hippodrome rejected: horses are empty");
            return Err(ValidationError::EmptyCollection);
        }
        Ok(Self { horses })
    }

    /// Build a field from a collection that may be absent.
    pub fn from_optional(horses: Option<Vec<H>>) -> Result<Self, ValidationError> {
        match horses {
            Some(horses) => Self::new(horses),
            None => {
                error!("hippodrome rejected: horses are null");
                Err(ValidationError::NullCollection)
            }
        }
    }

    /// The field, in construction order.
    #[must_use]
    pub fn horses(&self) -> &[H] {
        &self.horses
    }

    /// Number of racers. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.horses.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advance every racer once, in order. One call is one tick.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        for horse in &mut self.horses {
            horse.advance(rng);
        }
        trace!(horses = self.horses.len(), "field advanced");
    }

    /// The racer with the greatest distance; the first one on ties.
    #[must_use]
    pub fn winner(&self) -> &H {
        &self.horses[self.winner_index()]
    }

    /// Lane (index) of the current winner.
    #[must_use]
    pub fn winner_index(&self) -> usize {
        let mut best = 0;
        for (lane, horse) in self.horses.iter().enumerate().skip(1) {
            // Strictly greater, so earlier lanes keep ties.
            if horse.distance() > self.horses[best].distance() {
                best = lane;
            }
        }
        best
    }

    /// Give the racers back.
    #[must_use]
    pub fn into_horses(self) -> Vec<H> {
        self.horses
    }
}

impl Hippodrome<Horse> {
    /// Build a field of horses from their serialized descriptions.
    ///
    /// The first invalid horse aborts construction.
    pub fn from_specs(specs: Option<Vec<HorseSpec>>) -> Result<Self, ValidationError> {
        let horses = specs
            .map(|specs| {
                specs
                    .into_iter()
                    .map(Horse::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Self::from_optional(horses)
    }
}

impl<'a, H> IntoIterator for &'a Hippodrome<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.horses.iter()
    }
}
