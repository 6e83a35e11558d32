use crate::error::Error;
use crate::math::Coord;
use crate::solver::{Outcome, RaceTrack, RaceTrackAttributes, SearchStats, SolverConfig};
use crate::util::Rect;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single puzzle instance, as read from a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    /// The grid width in cells.
    pub width: i32,
    /// The grid height in cells.
    pub height: i32,
    /// The cell the car starts on.
    pub start: Coord,
    /// The cell the car must reach.
    pub target: Coord,
    /// The obstacles on the grid.
    pub obstacles: SmallVec<[Rect; 4]>,
}

impl Puzzle {
    /// Gets the puzzle as race track attributes.
    pub fn attributes(&self) -> RaceTrackAttributes<'_> {
        RaceTrackAttributes {
            width: self.width,
            height: self.height,
            start: self.start,
            target: self.target,
            obstacles: &self.obstacles,
        }
    }

    /// Validates the puzzle and builds a race track for it.
    pub fn race_track(&self, config: &SolverConfig) -> Result<RaceTrack, Error> {
        RaceTrack::new(&self.attributes()).map(|rt| rt.with_config(*config))
    }

    /// Solves the puzzle.
    pub fn solve(&self, config: &SolverConfig) -> Result<Outcome, Error> {
        self.race_track(config)?.race()
    }

    /// Solves the puzzle and returns the search counters alongside the outcome.
    pub fn solve_with_stats(&self, config: &SolverConfig) -> Result<(Outcome, SearchStats), Error> {
        self.race_track(config)?.race_with_stats()
    }
}
