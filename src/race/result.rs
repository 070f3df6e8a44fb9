//! Standings and final race results.

use serde::{Deserialize, Serialize};

use crate::core::Racer;
use crate::track::Hippodrome;

/// One racer's position at a point in the race.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Index in the field, 0-based.
    pub lane: usize,
    pub name: String,
    pub speed: f64,
    pub distance: f64,
}

impl Standing {
    fn of<H: Racer>(lane: usize, racer: &H) -> Self {
        Self {
            lane,
            name: racer.name().to_string(),
            speed: racer.speed(),
            distance: racer.distance(),
        }
    }
}

/// Rank the field by distance, furthest first.
///
/// The sort is stable, so tied racers stay in lane order and the first
/// entry is always the hippodrome's winner.
pub fn standings<H: Racer>(track: &Hippodrome<H>) -> Vec<Standing> {
    let mut ranked: Vec<_> = track
        .horses()
        .iter()
        .enumerate()
        .map(|(lane, racer)| Standing::of(lane, racer))
        .collect();
    ranked.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    ranked
}

/// Outcome of a finished race.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Ticks run.
    pub ticks: u32,
    pub winner: Standing,
    /// Whole field, furthest first.
    pub standings: Vec<Standing>,
}

impl RaceResult {
    pub(crate) fn from_track<H: Racer>(ticks: u32, track: &Hippodrome<H>) -> Self {
        let standings = standings(track);
        let winner = standings[0].clone();
        Self {
            ticks,
            winner,
            standings,
        }
    }
}
