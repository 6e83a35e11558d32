use crate::math::{velocity_index, Coord, Velocity, SPEED_VALUES};
use pathfinding::matrix::Matrix;

/// The set of `(position, velocity)` pairs already queued by a search.
///
/// Each cell holds a bitmask with one bit per velocity.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    masks: Matrix<u64>,
}

// Every velocity needs its own bit
const _: () = assert!(SPEED_VALUES * SPEED_VALUES <= u64::BITS as usize);

impl VisitedSet {
    /// Creates an empty set for a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            masks: Matrix::new(width, height, 0),
        }
    }

    /// Marks the pair as visited. Returns true if it was not already visited.
    ///
    /// The coordinate must be on the grid and the velocity within the speed limit.
    pub fn insert(&mut self, pos: Coord, vel: Velocity) -> bool {
        let bit = 1u64 << velocity_index(vel);
        let mask = &mut self.masks[(pos.x as usize, pos.y as usize)];
        let fresh = *mask & bit == 0;
        *mask |= bit;
        fresh
    }
}
