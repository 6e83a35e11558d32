//! The breadth-first search over car states.

#[cfg(feature = "debug")]
use crate::debug::take_debug_frame;
use crate::debug::debug_expansion;
use crate::error::{Error, Feature};
use crate::math::{Coord, SPEED_VALUES};
use crate::queue::Frontier;
use crate::state::CarState;
use crate::track::{CellStatus, Track};
use crate::util::Rect;
use crate::visited::VisitedSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds the number of steps a search will consider.
/// A successor is only kept if its step count is strictly below the limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepLimit {
    /// The number of cells on the grid. This is a heuristic and can cut off
    /// solutions that need more steps than there are cells.
    CellCount,
    /// The number of `(position, velocity)` pairs. No shortest path repeats a
    /// pair, so this never cuts off a solution.
    #[default]
    StateSpace,
    /// A fixed number of steps.
    Fixed(usize),
}

impl StepLimit {
    /// Resolves the limit to a step count for the given track.
    pub fn resolve(&self, track: &Track) -> usize {
        match self {
            StepLimit::CellCount => track.cell_count(),
            StepLimit::StateSpace => track.cell_count() * SPEED_VALUES * SPEED_VALUES,
            StepLimit::Fixed(steps) => *steps,
        }
    }
}

/// Parameters of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// The step count cutoff.
    pub step_limit: StepLimit,
    /// Whether to skip `(position, velocity)` pairs that were already queued.
    pub dedup: bool,
    /// The maximum number of states to expand before giving up.
    pub max_expansions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_limit: StepLimit::StateSpace,
            dedup: true,
            max_expansions: None,
        }
    }
}

impl SolverConfig {
    /// The configuration that reproduces the plain search: a cell count cutoff
    /// and no visited set.
    pub fn legacy() -> Self {
        Self {
            step_limit: StepLimit::CellCount,
            dedup: false,
            max_expansions: None,
        }
    }
}

/// The result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The target can be reached in this many steps, and no fewer.
    Solved(usize),
    /// The target cannot be reached.
    NoSolution,
}

impl Outcome {
    /// The step count, or `-1` if there is no solution.
    pub fn as_steps(&self) -> i64 {
        match self {
            Outcome::Solved(steps) => *steps as i64,
            Outcome::NoSolution => -1,
        }
    }

    /// The step count, if there is a solution.
    pub fn steps(&self) -> Option<usize> {
        match self {
            Outcome::Solved(steps) => Some(*steps),
            Outcome::NoSolution => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(steps) => write!(f, "Optimal solution takes {steps} steps"),
            Outcome::NoSolution => write!(f, "No solution"),
        }
    }
}

/// Counters gathered during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: usize,
    /// Successors added to the frontier.
    pub enqueued: usize,
    /// States taken off the frontier on a blocked cell.
    pub blocked: usize,
    /// Successors dropped for leaving the grid.
    pub out_of_bounds: usize,
    /// Successors dropped for reaching the step limit.
    pub over_limit: usize,
    /// Successors dropped because their position and velocity were already queued.
    pub revisited: usize,
    /// The largest number of states on the frontier at once.
    pub peak_frontier: usize,
}

impl SearchStats {
    /// The mean number of successors enqueued per expanded state.
    pub fn branching_factor(&self) -> f64 {
        if self.expanded == 0 {
            0.0
        } else {
            self.enqueued as f64 / self.expanded as f64
        }
    }
}

/// The attributes of a race track puzzle.
#[derive(Clone, Copy, Debug)]
pub struct RaceTrackAttributes<'a> {
    /// The grid width in cells.
    pub width: i32,
    /// The grid height in cells.
    pub height: i32,
    /// The cell the car starts on.
    pub start: Coord,
    /// The cell the car must reach.
    pub target: Coord,
    /// The obstacles on the grid.
    pub obstacles: &'a [Rect],
}

/// A validated puzzle, ready to be raced.
#[derive(Debug)]
pub struct RaceTrack {
    /// The occupancy grid.
    track: Track,
    /// The cell the car starts on.
    start: Coord,
    /// The search parameters.
    config: SolverConfig,
    /// The states expanded by the most recent search.
    #[cfg(feature = "debug")]
    debug: std::cell::RefCell<serde_json::Value>,
}

impl RaceTrack {
    /// Builds a race track using the default [`SolverConfig`].
    ///
    /// # Errors
    /// Fails with [`Error::OutOfBounds`] or [`Error::InvalidRectangle`] if the
    /// attributes do not describe a valid puzzle.
    pub fn new(attribs: &RaceTrackAttributes) -> Result<Self, Error> {
        let track = Track::new(
            attribs.width,
            attribs.height,
            attribs.target,
            attribs.obstacles,
        )?;
        if !track.contains(attribs.start) {
            return Err(Error::OutOfBounds {
                feature: Feature::Start,
                coord: attribs.start,
                width: attribs.width,
                height: attribs.height,
            });
        }
        Ok(Self {
            track,
            start: attribs.start,
            config: SolverConfig::default(),
            #[cfg(feature = "debug")]
            debug: Default::default(),
        })
    }

    /// Replaces the search parameters.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the occupancy grid.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Gets the cell the car starts on.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Gets the search parameters.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the minimum number of steps needed to reach the target.
    pub fn race(&self) -> Result<Outcome, Error> {
        self.race_with_stats().map(|(outcome, _)| outcome)
    }

    /// Like [`race`](Self::race), but also returns the search counters.
    pub fn race_with_stats(&self) -> Result<(Outcome, SearchStats), Error> {
        let limit = self.config.step_limit.resolve(&self.track);
        log::debug!(
            "Racing {}x{} track from {:?}, step limit {}",
            self.track.width(),
            self.track.height(),
            (self.start.x, self.start.y),
            limit
        );

        #[cfg(feature = "debug")]
        take_debug_frame();

        let mut stats = SearchStats::default();
        let result = self.search(limit, &mut stats);

        #[cfg(feature = "debug")]
        {
            *self.debug.borrow_mut() = take_debug_frame();
        }

        match &result {
            Ok(outcome) => log::debug!("{outcome} ({stats:?})"),
            Err(err) => log::debug!("Search failed: {err} ({stats:?})"),
        }
        result.map(|outcome| (outcome, stats))
    }

    /// Gets the states expanded by the most recent search as a JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&self) -> serde_json::Value {
        self.debug.borrow().clone()
    }

    /// Runs the breadth-first search.
    ///
    /// States are queued in non-decreasing step order, so the first target
    /// state taken off the frontier has the fewest steps.
    fn search(&self, limit: usize, stats: &mut SearchStats) -> Result<Outcome, Error> {
        let initial = CarState::initial(self.start);
        let mut frontier = Frontier::new(initial);
        let mut visited = self.config.dedup.then(|| {
            let mut visited =
                VisitedSet::new(self.track.width() as usize, self.track.height() as usize);
            visited.insert(initial.pos, initial.vel);
            visited
        });

        while let Some(state) = frontier.pop() {
            stats.peak_frontier = frontier.peak_len();
            match self.track.get(state.pos) {
                Some(CellStatus::Target) => return Ok(Outcome::Solved(state.steps)),
                Some(CellStatus::Free) => {}
                Some(CellStatus::Blocked) | None => {
                    stats.blocked += 1;
                    continue;
                }
            }

            if let Some(max) = self.config.max_expansions {
                if stats.expanded >= max {
                    return Err(Error::BudgetExceeded { limit: max });
                }
            }
            stats.expanded += 1;
            debug_expansion(&state);
            log::trace!(
                "Expanding {:?} at {:?} after {} steps",
                (state.vel.x, state.vel.y),
                (state.pos.x, state.pos.y),
                state.steps
            );

            for succ in state.successors() {
                if !self.track.contains(succ.pos) {
                    stats.out_of_bounds += 1;
                    continue;
                }
                if succ.steps >= limit {
                    stats.over_limit += 1;
                    continue;
                }
                if let Some(visited) = visited.as_mut() {
                    if !visited.insert(succ.pos, succ.vel) {
                        stats.revisited += 1;
                        continue;
                    }
                }
                stats.enqueued += 1;
                frontier.push(succ);
            }
        }

        stats.peak_frontier = frontier.peak_len();
        Ok(Outcome::NoSolution)
    }
}

/// Finds the minimum number of steps from `start` to `target` using the default
/// [`SolverConfig`].
pub fn solve(
    width: i32,
    height: i32,
    start: Coord,
    target: Coord,
    obstacles: &[Rect],
) -> Result<Outcome, Error> {
    solve_with(width, height, start, target, obstacles, &SolverConfig::default())
}

/// Finds the minimum number of steps from `start` to `target`.
pub fn solve_with(
    width: i32,
    height: i32,
    start: Coord,
    target: Coord,
    obstacles: &[Rect],
    config: &SolverConfig,
) -> Result<Outcome, Error> {
    let attribs = RaceTrackAttributes {
        width,
        height,
        start,
        target,
        obstacles,
    };
    RaceTrack::new(&attribs)?.with_config(*config).race()
}
