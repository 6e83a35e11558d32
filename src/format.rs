//! Reading and writing the text batch format.
//!
//! A batch starts with the number of cases. Each case is:
//!
//! ```text
//! <width> <height>
//! <start x> <start y> <target x> <target y>
//! <obstacle count>
//! <x1> <x2> <y1> <y2>
//! ...
//! ```
//!
//! with one line per obstacle. Blank lines are skipped.

use crate::math::Coord;
use crate::puzzle::Puzzle;
use crate::util::Rect;
use smallvec::SmallVec;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while reading a batch. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),

    /// The input ended before a required record.
    #[error("line {line}: unexpected end of input, expected {what}")]
    UnexpectedEof { line: usize, what: &'static str },

    /// A record has the wrong number of fields.
    #[error("line {line}: expected {expected} fields for {what}, found {found}")]
    FieldCount {
        line: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A field is not an integer.
    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A count is negative.
    #[error("line {line}: {what} cannot be negative, found {value}")]
    NegativeCount {
        line: usize,
        what: &'static str,
        value: i32,
    },
}

/// Reads non-blank lines and splits them into integer fields.
struct Records<R> {
    lines: io::Lines<R>,
    /// The number of the most recently read line.
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Reads the next non-blank line, if there is one.
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Reads a record of exactly `N` integers.
    fn next<const N: usize>(
        &mut self,
        what: &'static str,
        fields: [&'static str; N],
    ) -> Result<[i32; N], ParseError> {
        let line = self.next_line()?.ok_or(ParseError::UnexpectedEof {
            line: self.line + 1,
            what,
        })?;
        let values = line.split_whitespace().collect::<Vec<_>>();
        if values.len() != N {
            return Err(ParseError::FieldCount {
                line: self.line,
                what,
                expected: N,
                found: values.len(),
            });
        }

        let mut out = [0; N];
        for ((out, value), field) in out.iter_mut().zip(values).zip(fields) {
            *out = value.parse().map_err(|source| ParseError::InvalidNumber {
                line: self.line,
                field,
                value: value.to_string(),
                source,
            })?;
        }
        Ok(out)
    }

    /// Reads a single non-negative count.
    fn next_count(&mut self, what: &'static str) -> Result<usize, ParseError> {
        let [value] = self.next(what, [what])?;
        usize::try_from(value).map_err(|_| ParseError::NegativeCount {
            line: self.line,
            what,
            value,
        })
    }

    fn next_puzzle(&mut self) -> Result<Puzzle, ParseError> {
        let [width, height] = self.next("grid size", ["width", "height"])?;
        let [sx, sy, tx, ty] = self.next(
            "start and target",
            ["start x", "start y", "target x", "target y"],
        )?;
        let num_obstacles = self.next_count("obstacle count")?;
        let mut obstacles = SmallVec::new();
        for _ in 0..num_obstacles {
            let [x1, x2, y1, y2] = self.next("obstacle", ["x1", "x2", "y1", "y2"])?;
            obstacles.push(Rect::new(x1, x2, y1, y2));
        }

        Ok(Puzzle {
            width,
            height,
            start: Coord::new(sx, sy),
            target: Coord::new(tx, ty),
            obstacles,
        })
    }
}

/// Reads a batch of puzzles.
///
/// Coordinates are only checked to be integers; range checks happen when each
/// puzzle is solved, so one bad case does not hide the others.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Vec<Puzzle>, ParseError> {
    let mut records = Records::new(reader);
    let num_cases = records.next_count("case count")?;
    let puzzles = (0..num_cases)
        .map(|_| records.next_puzzle())
        .collect::<Result<Vec<_>, _>>()?;

    if records.next_line()?.is_some() {
        log::warn!(
            "Ignoring input after the last case, from line {}",
            records.line
        );
    }
    Ok(puzzles)
}

/// Reads a batch of puzzles from a string.
pub fn parse_batch(input: &str) -> Result<Vec<Puzzle>, ParseError> {
    read_batch(input.as_bytes())
}

/// Writes a batch of puzzles in the format accepted by [`read_batch`].
pub fn write_batch<W: Write>(mut out: W, puzzles: &[Puzzle]) -> io::Result<()> {
    writeln!(out, "{}", puzzles.len())?;
    for puzzle in puzzles {
        writeln!(out, "{} {}", puzzle.width, puzzle.height)?;
        writeln!(
            out,
            "{} {} {} {}",
            puzzle.start.x, puzzle.start.y, puzzle.target.x, puzzle.target.y
        )?;
        writeln!(out, "{}", puzzle.obstacles.len())?;
        for rect in &puzzle.obstacles {
            writeln!(out, "{} {} {} {}", rect.x.min, rect.x.max, rect.y.min, rect.y.max)?;
        }
    }
    Ok(())
}
