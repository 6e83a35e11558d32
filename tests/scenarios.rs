//! Tests that solve small hand-made tracks.

use race_track::{
    parse_batch, solve, solve_with, Coord, Outcome, RaceTrack, RaceTrackAttributes, Rect,
    SolverConfig, StepLimit,
};

/// Test the reference track with a wall across the middle.
#[test]
fn wall_with_gap() {
    let obstacles = [Rect::new(1, 4, 2, 3)];
    let outcome = solve(5, 5, Coord::new(4, 0), Coord::new(4, 4), &obstacles);
    assert_eq!(outcome, Ok(Outcome::Solved(7)));
}

/// Test that a track split in two by obstacles has no solution.
#[test]
fn partitioned_track() {
    let obstacles = [Rect::new(1, 1, 0, 2), Rect::new(0, 2, 1, 1)];
    let outcome = solve(3, 3, Coord::new(0, 0), Coord::new(2, 2), &obstacles);
    assert_eq!(outcome, Ok(Outcome::NoSolution));
    assert_eq!(outcome.unwrap().as_steps(), -1);
}

/// Test that starting on the target takes no steps.
#[test]
fn start_on_target() {
    let outcome = solve(1, 1, Coord::new(0, 0), Coord::new(0, 0), &[]);
    assert_eq!(outcome, Ok(Outcome::Solved(0)));
}

/// Test a straight run, where the car accelerates to top speed and may overshoot.
#[test]
fn straight_run() {
    // Positions 0 -> 1 -> 3 -> 6 -> 9 with speeds 1, 2, 3, 3
    let outcome = solve(10, 1, Coord::new(0, 0), Coord::new(9, 0), &[]);
    assert_eq!(outcome, Ok(Outcome::Solved(4)));

    // The car has to brake to land on a nearby target
    let outcome = solve(10, 1, Coord::new(0, 0), Coord::new(2, 0), &[]);
    assert_eq!(outcome, Ok(Outcome::Solved(2)));
}

/// Test that the car can jump over an obstacle, since only landing cells are checked.
#[test]
fn jump_over_obstacle() {
    let obstacles = [Rect::new(2, 2, 0, 0)];
    let outcome = solve(4, 1, Coord::new(0, 0), Coord::new(3, 0), &obstacles);
    // 0 -> 1 -> 3
    assert_eq!(outcome, Ok(Outcome::Solved(2)));
}

/// Test a track where the car must dodge around a blocked cell next to the target.
/// Turning back up needs a step with no vertical velocity, so the route takes three steps.
#[test]
fn dodge_under_obstacle() {
    let obstacles = [Rect::new(1, 1, 1, 1)];
    let attribs = RaceTrackAttributes {
        width: 3,
        height: 2,
        start: Coord::new(0, 1),
        target: Coord::new(2, 1),
        obstacles: &obstacles,
    };
    let rt = RaceTrack::new(&attribs).unwrap();
    assert_eq!(rt.race(), Ok(Outcome::Solved(3)));

    let rt = rt.with_config(SolverConfig::legacy());
    assert_eq!(rt.race(), Ok(Outcome::Solved(3)));

    // A cutoff at the optimum drops the final move
    let rt = rt.with_config(SolverConfig {
        step_limit: StepLimit::Fixed(3),
        ..Default::default()
    });
    assert_eq!(rt.race(), Ok(Outcome::NoSolution));
}

/// Test that both configurations agree on a batch read from the text format.
#[test]
fn batch_matches_legacy_search() {
    let input = "2\n5 5\n4 0 4 4\n1\n1 4 2 3\n3 3\n0 0 2 2\n2\n1 1 0 2\n0 2 1 1\n";
    let puzzles = parse_batch(input).unwrap();
    let expected = [Outcome::Solved(7), Outcome::NoSolution];
    for (puzzle, expected) in puzzles.iter().zip(expected) {
        for config in [SolverConfig::default(), SolverConfig::legacy()] {
            assert_eq!(puzzle.solve(&config), Ok(expected));
        }
        let solved = solve_with(
            puzzle.width,
            puzzle.height,
            puzzle.start,
            puzzle.target,
            &puzzle.obstacles,
            &SolverConfig::legacy(),
        );
        assert_eq!(solved, Ok(expected));
    }
}
