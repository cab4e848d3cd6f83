//! Square neighborhood enumeration.
//!
//! A neighborhood of radius `r` around `(row, col)` is every coordinate
//! `(row + dr, col + dc)` with `dr, dc ∈ [-r, r]`, minus the center itself,
//! clipped to the grid.  Interior cells have `(2r + 1)² − 1` neighbors; cells
//! near an edge have fewer, which is expected.
//!
//! Coordinates are produced in row-major order so that every consumer sees
//! the same sequence for the same inputs.

use crate::{Coord, SgError, SgResult};

/// Enumerate the neighbors of `center` on a `rows × cols` grid.
///
/// # Errors
/// - [`SgError::OutOfBounds`] if `center` lies outside the grid.
/// - [`SgError::Config`] if `radius` is zero or either dimension is zero.
pub fn neighbors(center: Coord, rows: usize, cols: usize, radius: usize) -> SgResult<Neighborhood> {
    if rows == 0 || cols == 0 {
        return Err(SgError::Config(format!("grid dimensions must be positive, got {rows}x{cols}")));
    }
    if radius == 0 {
        return Err(SgError::Config("neighborhood radius must be at least 1".into()));
    }
    if !center.in_bounds(rows, cols) {
        return Err(SgError::OutOfBounds { coord: center, rows, cols });
    }

    let row_lo = center.row.saturating_sub(radius);
    let col_lo = center.col.saturating_sub(radius);
    Ok(Neighborhood {
        center,
        row_lo,
        row_hi: center.row.saturating_add(radius).min(rows - 1),
        col_lo,
        col_hi: center.col.saturating_add(radius).min(cols - 1),
        cursor: Some(Coord::new(row_lo, col_lo)),
    })
}

/// Iterator over the in-bounds neighbors of one cell.
///
/// Cheap to clone; a clone restarts from wherever the original was, so clone
/// before consuming to walk the same neighborhood twice.
#[derive(Clone, Debug)]
pub struct Neighborhood {
    center: Coord,
    row_lo: usize,
    row_hi: usize,
    col_lo: usize,
    col_hi: usize,
    /// Next window position to yield, `None` once the window is exhausted.
    cursor: Option<Coord>,
}

impl Neighborhood {
    /// The cell this neighborhood surrounds.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Number of neighbors in the full (unconsumed) window.
    pub fn window_len(&self) -> usize {
        (self.row_hi - self.row_lo + 1) * (self.col_hi - self.col_lo + 1) - 1
    }

    fn advance(&mut self, at: Coord) {
        self.cursor = if at.col < self.col_hi {
            Some(Coord::new(at.row, at.col + 1))
        } else if at.row < self.row_hi {
            Some(Coord::new(at.row + 1, self.col_lo))
        } else {
            None
        };
    }
}

impl Iterator for Neighborhood {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        loop {
            let at = self.cursor?;
            self.advance(at);
            if at != self.center {
                return Some(at);
            }
        }
    }
}

impl std::iter::FusedIterator for Neighborhood {}
