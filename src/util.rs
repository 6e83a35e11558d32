//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use crate::math::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval on the integer number line.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if the interval is non-empty, i.e. `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Returns true if this interval contains the value, including both end points.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

/// An axis-aligned obstacle rectangle.
/// Both extents are closed, so the boundary cells belong to the rectangle.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The horizontal extent, `x1..=x2`.
    pub x: Interval<i32>,
    /// The vertical extent, `y1..=y2`.
    pub y: Interval<i32>,
}

impl Rect {
    /// Creates a rectangle from its bounding coordinates, in the `(x1, x2, y1, y2)` order
    /// used by the text format.
    pub const fn new(x1: i32, x2: i32, y1: i32, y2: i32) -> Self {
        Self {
            x: Interval::new(x1, x2),
            y: Interval::new(y1, y2),
        }
    }

    /// Returns true if `x1 <= x2` and `y1 <= y2`.
    pub fn is_ordered(&self) -> bool {
        self.x.is_ordered() && self.y.is_ordered()
    }

    /// Returns true if the cell lies inside the rectangle or on its boundary.
    pub fn contains(&self, cell: Coord) -> bool {
        self.x.contains(cell.x) && self.y.contains(cell.y)
    }

    /// The two opposite corners, `(x1, y1)` and `(x2, y2)`.
    pub fn corners(&self) -> [Coord; 2] {
        [
            Coord::new(self.x.min, self.y.min),
            Coord::new(self.x.max, self.y.max),
        ]
    }

    /// Iterates over every cell covered by the rectangle, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let ys = self.y;
        (self.x.min..=self.x.max)
            .flat_map(move |x| (ys.min..=ys.max).map(move |y| Coord::new(x, y)))
    }
}
