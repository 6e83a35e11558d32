use crate::error::Error;
use crate::puzzle::Puzzle;
use crate::solver::{Outcome, SearchStats, SolverConfig};
use crate::CaseId;
use slotmap::SlotMap;

/// A set of independent puzzles.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    /// The puzzles, in the order they were added.
    cases: SlotMap<CaseId, Puzzle>,
}

/// The result of solving one case of a [Batch].
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
    /// The case that was solved.
    pub id: CaseId,
    /// The outcome and search counters, or the reason the case is invalid.
    pub result: Result<(Outcome, SearchStats), Error>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a puzzle to the batch.
    pub fn add(&mut self, puzzle: Puzzle) -> CaseId {
        self.cases.insert(puzzle)
    }

    /// Gets a reference to the puzzle with the given ID.
    pub fn get(&self, id: CaseId) -> Option<&Puzzle> {
        self.cases.get(id)
    }

    /// The number of puzzles in the batch.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the batch has no puzzles.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns an iterator over the puzzles in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (CaseId, &Puzzle)> {
        self.cases.iter()
    }

    /// Solves every puzzle independently.
    ///
    /// An invalid puzzle is reported in its own [CaseReport] and does not stop
    /// the remaining puzzles from being solved.
    pub fn solve_all(&self, config: &SolverConfig) -> Vec<CaseReport> {
        self.cases
            .iter()
            .enumerate()
            .map(|(idx, (id, puzzle))| {
                let result = puzzle.solve_with_stats(config);
                if let Err(err) = &result {
                    log::warn!("Case {}: {}", idx + 1, err);
                }
                CaseReport { id, result }
            })
            .collect()
    }
}

impl FromIterator<Puzzle> for Batch {
    fn from_iter<T: IntoIterator<Item = Puzzle>>(iter: T) -> Self {
        let mut batch = Batch::new();
        for puzzle in iter {
            batch.add(puzzle);
        }
        batch
    }
}
