//! Random draws for horse movement.
//!
//! Movement randomness goes through the `RandomSource` trait rather than a
//! global generator, so a race can be driven by a seeded RNG in production
//! and by a fixed draw in tests.
//!
//! ```
//! use hippodrome::core::{FixedDraw, RaceRng, RandomSource};
//!
//! let mut rng = RaceRng::new(42);
//! let r = rng.random_double(0.2, 0.9);
//! assert!((0.2..0.9).contains(&r));
//!
//! // A fixed draw ignores the bounds entirely.
//! let mut fixed = FixedDraw(0.5);
//! assert_eq!(fixed.random_double(0.2, 0.9), 0.5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lower bound of the per-tick speed multiplier.
pub const MIN_DRAW: f64 = 0.2;

/// Upper bound (exclusive) of the per-tick speed multiplier.
pub const MAX_DRAW: f64 = 0.9;

/// Source of uniform random draws.
///
/// Implementations are trusted to stay in the requested range, but a
/// `Horse` clamps each step at zero, so an out-of-range draw can stall a
/// horse and never move it backwards.
pub trait RandomSource {
    /// Draw a value uniformly from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draw a value from `[min, max)`.
    fn random_double(&mut self, min: f64, max: f64) -> f64 {
        self.next_unit() * (max - min) + min
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn random_double(&mut self, min: f64, max: f64) -> f64 {
        (**self).random_double(min, max)
    }
}

/// Deterministic RNG for races.
///
/// Uses ChaCha8 so the same seed replays the same race on every platform.
#[derive(Clone, Debug)]
pub struct RaceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RaceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RaceRngState {
        RaceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RaceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for RaceRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for checkpointing a race mid-run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A source that always yields the same draw.
///
/// `random_double` returns the wrapped value as-is, whatever bounds are
/// requested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_unit(&mut self) -> f64 {
        self.0
    }

    fn random_double(&mut self, _min: f64, _max: f64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = RaceRng::new(42);
        let mut rng2 = RaceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_unit(), rng2.next_unit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RaceRng::new(1);
        let mut rng2 = RaceRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_unit()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_unit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_random_double_stays_in_half_open_range() {
        let mut rng = RaceRng::new(7);

        for _ in 0..10_000 {
            let r = rng.random_double(MIN_DRAW, MAX_DRAW);
            assert!(r >= MIN_DRAW);
            assert!(r < MAX_DRAW);
        }
    }

    #[test]
    fn test_random_double_scales_unit_draw() {
        struct Half;
        impl RandomSource for Half {
            fn next_unit(&mut self) -> f64 {
                0.5
            }
        }

        assert!((Half.random_double(0.2, 0.9) - 0.55).abs() < 1e-12);
        assert!((Half.random_double(10.0, 20.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_draw_ignores_bounds() {
        let mut fixed = FixedDraw(0.3);
        assert_eq!(fixed.random_double(0.2, 0.9), 0.3);
        assert_eq!(fixed.random_double(5.0, 6.0), 0.3);
        assert_eq!(fixed.next_unit(), 0.3);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = RaceRng::new(9);
        let mut expected = rng.clone();

        fn draw<S: RandomSource>(mut source: S) -> f64 {
            source.random_double(0.2, 0.9)
        }

        assert_eq!(draw(&mut rng), expected.random_double(0.2, 0.9));
    }

    #[test]
    fn test_state_restores_sequence() {
        let mut rng = RaceRng::new(42);
        for _ in 0..100 {
            rng.next_unit();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_unit()).collect();

        let mut restored = RaceRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_unit()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = RaceRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RaceRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
