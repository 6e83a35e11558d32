use crate::math::{within_speed_limit, Coord, Velocity};
use arrayvec::ArrayVec;
use itertools::iproduct;

/// The maximum number of successors a single state can have.
pub const MAX_SUCCESSORS: usize = 9;

/// A snapshot of the car during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarState {
    /// The cell the car occupies.
    pub pos: Coord,
    /// The velocity the car arrived with, in cells per step.
    pub vel: Velocity,
    /// The number of steps taken from the initial state.
    pub steps: usize,
}

impl CarState {
    /// Creates the initial state: stationary at `start` with no steps taken.
    pub fn initial(start: Coord) -> Self {
        Self {
            pos: start,
            vel: Velocity::new(0, 0),
            steps: 0,
        }
    }

    /// Enumerates the velocities reachable by changing each component by at most one,
    /// dropping any that exceed the speed limit.
    pub fn next_velocities(&self) -> ArrayVec<Velocity, MAX_SUCCESSORS> {
        iproduct!(-1..=1, -1..=1)
            .map(|(dx, dy)| self.vel + Velocity::new(dx, dy))
            .filter(|vel| within_speed_limit(*vel))
            .collect()
    }

    /// Enumerates the states reachable in one step.
    ///
    /// No bounds checking or de-duplication happens here; the search decides
    /// which successors to keep.
    pub fn successors(&self) -> ArrayVec<CarState, MAX_SUCCESSORS> {
        self.next_velocities()
            .into_iter()
            .map(|vel| CarState {
                pos: self.pos + vel,
                vel,
                steps: self.steps + 1,
            })
            .collect()
    }
}
