use crate::error::{Error, Feature};
use crate::math::Coord;
use crate::util::Rect;
use pathfinding::matrix::Matrix;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest number of cells a track may have.
pub const MAX_CELLS: usize = 1 << 22;

/// The status of a single cell on the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellStatus {
    #[default]
    Free,
    Blocked,
    Target,
}

/// An immutable occupancy grid over `[0, width) x [0, height)`.
///
/// Cells are stored column-major, so the matrix row is the `x` coordinate.
#[derive(Clone, Debug)]
pub struct Track {
    /// The width of the grid in cells.
    width: i32,
    /// The height of the grid in cells.
    height: i32,
    /// The status of every cell, indexed by `(x, y)`.
    cells: Matrix<CellStatus>,
}

impl Track {
    /// Builds a track from its dimensions, target cell and obstacles.
    ///
    /// Obstacles are marked first and the target last, so a target inside an
    /// obstacle remains reachable as a goal.
    ///
    /// # Errors
    /// * [`Error::OutOfBounds`] if the target or an obstacle corner is off the grid.
    /// * [`Error::InvalidRectangle`] if an obstacle has `x1 > x2` or `y1 > y2`.
    /// * [`Error::TrackTooLarge`] if the grid has more than [`MAX_CELLS`] cells.
    pub fn new(width: i32, height: i32, target: Coord, obstacles: &[Rect]) -> Result<Self, Error> {
        let in_bounds = |coord: Coord| {
            (0..width).contains(&coord.x) && (0..height).contains(&coord.y)
        };
        let out_of_bounds = |feature, coord| Error::OutOfBounds {
            feature,
            coord,
            width,
            height,
        };

        if !in_bounds(target) {
            return Err(out_of_bounds(Feature::Target, target));
        }
        let cell_count = (width as usize).checked_mul(height as usize);
        if cell_count.map_or(true, |count| count > MAX_CELLS) {
            return Err(Error::TrackTooLarge {
                width,
                height,
                limit: MAX_CELLS,
            });
        }
        for (index, rect) in obstacles.iter().enumerate() {
            if !rect.is_ordered() {
                return Err(Error::InvalidRectangle { index, rect: *rect });
            }
            if let Some(corner) = rect.corners().into_iter().find(|c| !in_bounds(*c)) {
                return Err(out_of_bounds(Feature::Obstacle(index), corner));
            }
        }

        // Both dimensions are positive here, since the target is in bounds
        let mut cells = Matrix::new(width as usize, height as usize, CellStatus::Free);
        for rect in obstacles {
            for cell in rect.cells() {
                cells[(cell.x as usize, cell.y as usize)] = CellStatus::Blocked;
            }
        }
        cells[(target.x as usize, target.y as usize)] = CellStatus::Target;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The width of the grid in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The height of the grid in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Gets the status of the cell at `(x, y)`.
    pub fn status_at(&self, x: i32, y: i32) -> Result<CellStatus, Error> {
        let coord = Coord::new(x, y);
        self.get(coord).ok_or(Error::OutOfBounds {
            feature: Feature::Query,
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// Gets the status of a cell, or `None` if it is off the grid.
    pub fn get(&self, coord: Coord) -> Option<CellStatus> {
        self.contains(coord)
            .then(|| self.cells[(coord.x as usize, coord.y as usize)])
    }

    /// Returns an iterator over every cell on the grid and its status.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, CellStatus)> + '_ {
        let height = self.height;
        (0..self.width)
            .flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
            .map(|coord| (coord, self.cells[(coord.x as usize, coord.y as usize)]))
    }
}

#[cfg(test)]
mod test {
    use super::{CellStatus, Track, MAX_CELLS};
    use crate::error::{Error, Feature};
    use crate::math::Coord;
    use crate::util::Rect;

    #[test]
    fn obstacles_are_inclusive() {
        let rect = Rect::new(1, 4, 2, 3);
        let track = Track::new(5, 5, Coord::new(4, 4), &[rect]).unwrap();
        for (coord, status) in track.iter_cells() {
            let expected = if coord == Coord::new(4, 4) {
                CellStatus::Target
            } else if rect.contains(coord) {
                CellStatus::Blocked
            } else {
                CellStatus::Free
            };
            assert_eq!(status, expected, "cell {:?}", coord);
        }
        assert_eq!(track.status_at(1, 2), Ok(CellStatus::Blocked));
        assert_eq!(track.status_at(4, 3), Ok(CellStatus::Blocked));
    }

    #[test]
    fn target_overrides_obstacle() {
        let track = Track::new(3, 3, Coord::new(1, 1), &[Rect::new(0, 2, 0, 2)]).unwrap();
        assert_eq!(track.status_at(1, 1), Ok(CellStatus::Target));
        assert_eq!(track.status_at(0, 0), Ok(CellStatus::Blocked));
    }

    #[test]
    fn queries_off_the_grid_fail() {
        let track = Track::new(4, 2, Coord::new(0, 0), &[]).unwrap();
        assert_eq!(track.cell_count(), 8);
        for (x, y) in [(-1, 0), (4, 0), (0, -1), (0, 2)] {
            assert!(matches!(
                track.status_at(x, y),
                Err(Error::OutOfBounds {
                    feature: Feature::Query,
                    ..
                })
            ));
        }
        assert_eq!(track.status_at(3, 1), Ok(CellStatus::Free));
    }

    #[test]
    fn construction_validates_input() {
        let err = Track::new(5, 5, Coord::new(5, 0), &[]).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { feature: Feature::Target, .. }));

        let obstacles = [Rect::new(1, 1, 0, 0), Rect::new(2, 5, 0, 0)];
        let err = Track::new(5, 5, Coord::new(0, 0), &obstacles).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                feature: Feature::Obstacle(1),
                coord: Coord::new(5, 0),
                width: 5,
                height: 5
            }
        );

        let err = Track::new(5, 5, Coord::new(0, 0), &[Rect::new(2, 1, 0, 0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidRectangle { index: 0, .. }));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let err = Track::new(100_000, 100_000, Coord::new(0, 0), &[]).unwrap_err();
        assert_eq!(
            err,
            Error::TrackTooLarge {
                width: 100_000,
                height: 100_000,
                limit: MAX_CELLS
            }
        );
        assert!(Track::new(MAX_CELLS as i32, 1, Coord::new(0, 0), &[]).is_ok());
    }

    #[test]
    fn empty_grid_has_no_valid_target() {
        let err = Track::new(0, 3, Coord::new(0, 0), &[]).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { feature: Feature::Target, .. }));
    }
}
