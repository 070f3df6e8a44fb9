//! The race track: an ordered field of racers advanced together.

pub mod hippodrome;

pub use hippodrome::Hippodrome;
