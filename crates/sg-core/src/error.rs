//! Core error type.
//!
//! Variants fall into two groups.  Configuration errors describe a run that
//! cannot proceed with the parameters it was given; invariant violations are
//! contract breaches by the caller.  Neither is retried: the run halts.

use thiserror::Error;

use crate::Coord;

#[derive(Debug, Error)]
pub enum SgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cell {coord} has no neighbors within radius {radius}")]
    Isolated { coord: Coord, radius: usize },

    #[error("no empty cell available to relocate the occupant of {0}")]
    NoEmptyCell(Coord),

    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("cell {0} is empty; only occupied cells can be evaluated")]
    EmptyCell(Coord),

    #[error("parse error: {0}")]
    Parse(String),
}

impl SgError {
    /// `true` for errors caused by the run's parameters rather than by a
    /// caller breaking a precondition.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SgError::Config(_) | SgError::Isolated { .. } | SgError::NoEmptyCell(_)
        )
    }
}

/// Shorthand result type for all `sg-*` crates.
pub type SgResult<T> = Result<T, SgError>;
