pub use batch::{Batch, CaseReport};
pub use error::{Error, Feature};
pub use format::{parse_batch, read_batch, write_batch, ParseError};
pub use math::{Coord, Velocity};
pub use puzzle::Puzzle;
pub use queue::Frontier;
pub use solver::{
    solve, solve_with, Outcome, RaceTrack, RaceTrackAttributes, SearchStats, SolverConfig,
    StepLimit,
};
pub use state::CarState;
pub use track::{CellStatus, Track, MAX_CELLS};
pub use util::{Interval, Rect};
use slotmap::new_key_type;

mod batch;
mod debug;
mod error;
pub mod format;
pub mod generate;
pub mod math;
mod puzzle;
mod queue;
mod solver;
mod state;
mod track;
mod util;
mod visited;

new_key_type! {
    /// Unique ID of a case in a [Batch].
    pub struct CaseId;
}
