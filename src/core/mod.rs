//! Core race types: horses, the random source, errors.
//!
//! Nothing here knows about a race loop. The driver in `race` and the
//! collection in `track` build on these types.

pub mod error;
pub mod horse;
pub mod rng;

pub use error::{ConfigError, ValidationError};
pub use horse::{Horse, HorseSpec, Racer};
pub use rng::{FixedDraw, RaceRng, RaceRngState, RandomSource, MAX_DRAW, MIN_DRAW};
