//! Random puzzle generation, used for stress testing the solver.

use crate::math::Coord;
use crate::puzzle::Puzzle;
use crate::util::Rect;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;

/// The parameters of a randomly generated puzzle.
#[derive(Clone, Copy, Debug)]
pub struct GenerateParams {
    /// The grid width in cells.
    pub width: i32,
    /// The grid height in cells.
    pub height: i32,
    /// The number of obstacles to place.
    pub obstacles: usize,
    /// The mean side length of an obstacle in cells.
    pub mean_size: f64,
    /// The standard deviation of an obstacle's side length in cells.
    pub size_stddev: f64,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            obstacles: 3,
            mean_size: 2.0,
            size_stddev: 1.0,
        }
    }
}

/// Errors caused by invalid [GenerateParams].
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot generate a puzzle on a {width}x{height} grid")]
    EmptyGrid { width: i32, height: i32 },
    #[error("obstacle size deviation must be non-negative, found {0}")]
    NegativeStdDev(f64),
    #[error("invalid obstacle size distribution")]
    SizeDistribution(#[from] NormalError),
}

/// Generates a valid puzzle with randomly placed obstacles.
///
/// The start and target are drawn from the free cells and are distinct unless
/// only one free cell remains. Obstacles are dropped if they cover the whole grid.
pub fn random_puzzle<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerateParams,
) -> Result<Puzzle, GenerateError> {
    let GenerateParams { width, height, .. } = *params;
    if width <= 0 || height <= 0 {
        return Err(GenerateError::EmptyGrid { width, height });
    }
    if !(params.size_stddev >= 0.0) {
        return Err(GenerateError::NegativeStdDev(params.size_stddev));
    }
    let size = Normal::new(params.mean_size, params.size_stddev)?;

    let mut obstacles = (0..params.obstacles)
        .map(|_| {
            let w = (size.sample(rng).round() as i32).clamp(1, width);
            let h = (size.sample(rng).round() as i32).clamp(1, height);
            let x = rng.gen_range(0..=width - w);
            let y = rng.gen_range(0..=height - h);
            Rect::new(x, x + w - 1, y, y + h - 1)
        })
        .collect::<Vec<_>>();

    let cells = (0..width)
        .flat_map(|x| (0..height).map(move |y| Coord::new(x, y)))
        .collect::<Vec<_>>();
    let free = loop {
        let free = cells
            .iter()
            .copied()
            .filter(|c| !obstacles.iter().any(|r| r.contains(*c)))
            .collect::<Vec<_>>();
        if !free.is_empty() {
            break free;
        }
        obstacles.pop();
    };

    let picked = free.choose_multiple(rng, 2).copied().collect::<Vec<_>>();
    let start = picked[0];
    let target = picked.get(1).copied().unwrap_or(start);

    Ok(Puzzle {
        width,
        height,
        start,
        target,
        obstacles: obstacles.into_iter().collect(),
    })
}

/// Generates a batch of random puzzles.
pub fn random_batch<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerateParams,
    cases: usize,
) -> Result<Vec<Puzzle>, GenerateError> {
    (0..cases).map(|_| random_puzzle(rng, params)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::track::{CellStatus, Track};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn puzzles_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = GenerateParams {
            obstacles: 6,
            ..Default::default()
        };
        for puzzle in random_batch(&mut rng, &params, 50).unwrap() {
            let track = Track::new(puzzle.width, puzzle.height, puzzle.target, &puzzle.obstacles)
                .unwrap();
            assert_eq!(track.get(puzzle.start), Some(CellStatus::Free));
            assert_ne!(puzzle.start, puzzle.target);
        }
    }

    #[test]
    fn full_cover_is_thinned_out() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = GenerateParams {
            width: 2,
            height: 2,
            obstacles: 4,
            mean_size: 10.0,
            size_stddev: 0.0,
        };
        let puzzle = random_puzzle(&mut rng, &params).unwrap();
        // Every obstacle covers the whole grid, so all of them are dropped
        assert!(puzzle.obstacles.is_empty());
    }

    #[test]
    fn rejects_bad_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = GenerateParams {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            random_puzzle(&mut rng, &params),
            Err(GenerateError::EmptyGrid { .. })
        ));
        for size_stddev in [-1.0, f64::NAN] {
            let params = GenerateParams {
                size_stddev,
                ..Default::default()
            };
            assert!(matches!(
                random_puzzle(&mut rng, &params),
                Err(GenerateError::NegativeStdDev(_))
            ));
        }
        // Rejected by the distribution itself
        let params = GenerateParams {
            size_stddev: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            random_puzzle(&mut rng, &params),
            Err(GenerateError::SizeDistribution(_))
        ));
    }
}
