//! Integer vector types for positions and velocities on the track.

use cgmath::{Point2, Vector2};

/// A cell coordinate on the track.
pub type Coord = Point2<i32>;

/// A velocity in cells per step.
pub type Velocity = Vector2<i32>;

/// The largest velocity magnitude allowed on either axis.
pub const MAX_SPEED: i32 = 3;

/// The number of distinct values a velocity component can take.
pub const SPEED_VALUES: usize = (2 * MAX_SPEED + 1) as usize;

/// Returns true if both components of the velocity lie within `[-MAX_SPEED, MAX_SPEED]`.
pub fn within_speed_limit(vel: Velocity) -> bool {
    vel.x.abs() <= MAX_SPEED && vel.y.abs() <= MAX_SPEED
}

/// Maps a velocity within the speed limit to a unique index in `0..SPEED_VALUES^2`.
pub(crate) fn velocity_index(vel: Velocity) -> usize {
    let vx = (vel.x + MAX_SPEED) as usize;
    let vy = (vel.y + MAX_SPEED) as usize;
    vx * SPEED_VALUES + vy
}
