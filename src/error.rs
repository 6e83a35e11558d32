//! Error types for track construction and search.

use crate::math::Coord;
use crate::util::Rect;
use std::fmt;
use thiserror::Error;

/// The part of a puzzle that a coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Start,
    Target,
    /// A corner of the obstacle with the given index.
    Obstacle(usize),
    /// A coordinate passed directly to [`crate::Track::status_at`].
    Query,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Start => write!(f, "start"),
            Feature::Target => write!(f, "target"),
            Feature::Obstacle(idx) => write!(f, "obstacle #{idx}"),
            Feature::Query => write!(f, "query"),
        }
    }
}

/// Errors that can occur when building a track or running a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate lies outside the `width` x `height` grid.
    #[error("{feature} coordinate ({}, {}) is outside the {width}x{height} grid", .coord.x, .coord.y)]
    OutOfBounds {
        feature: Feature,
        coord: Coord,
        width: i32,
        height: i32,
    },

    /// An obstacle has `x1 > x2` or `y1 > y2`.
    #[error(
        "obstacle #{index} is inverted: x {}..{}, y {}..{}",
        .rect.x.min, .rect.x.max, .rect.y.min, .rect.y.max
    )]
    InvalidRectangle { index: usize, rect: Rect },

    /// The grid has more cells than a track may hold.
    #[error("a {width}x{height} grid exceeds the limit of {limit} cells")]
    TrackTooLarge {
        width: i32,
        height: i32,
        limit: usize,
    },

    /// The search expanded more states than the configured budget allows.
    #[error("search exceeded its budget of {limit} expansions")]
    BudgetExceeded { limit: usize },
}
