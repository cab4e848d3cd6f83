//! The simulation lattice.
//!
//! Storage is a single row-major `Vec<Cell>`; `(row, col)` maps to index
//! `row * cols + col`.  The grid never changes shape after construction.

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, WeightedIndex};

use crate::{Cell, Coord, Neighborhood, SgError, SgResult, SimRng, neighbors};

// ── CellCounts ────────────────────────────────────────────────────────────────

/// Population of each cell state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCounts {
    pub empty:  usize,
    pub type_a: usize,
    pub type_b: usize,
}

impl CellCounts {
    pub fn of(&self, cell: Cell) -> usize {
        match cell {
            Cell::Empty => self.empty,
            Cell::TypeA => self.type_a,
            Cell::TypeB => self.type_b,
        }
    }

    #[inline]
    pub fn occupied(&self) -> usize {
        self.type_a + self.type_b
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.empty + self.occupied()
    }
}

impl fmt::Display for CellCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={} B={} empty={}", self.type_a, self.type_b, self.empty)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A fixed-size `rows × cols` lattice of [`Cell`]s.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(rows: usize, cols: usize) -> SgResult<Self> {
        Ok(Self { rows, cols, cells: vec![Cell::Empty; checked_len(rows, cols)?] })
    }

    /// Wrap row-major `cells`; the length must equal `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> SgResult<Self> {
        if cells.len() != checked_len(rows, cols)? {
            return Err(SgError::Config(format!(
                "{} cells supplied for a {rows}x{cols} grid",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Populate every cell independently from the categorical distribution
    /// `prior_dist = [p_empty, p_type_a, p_type_b]`.
    ///
    /// Cells are drawn in row-major order, so a given RNG state always yields
    /// the same grid.
    pub fn random(rows: usize, cols: usize, prior_dist: &[f64; 3], rng: &mut SimRng) -> SgResult<Self> {
        let dist = WeightedIndex::new(prior_dist)
            .map_err(|e| SgError::Config(format!("invalid prior_dist {prior_dist:?}: {e}")))?;
        let cells = (0..checked_len(rows, cols)?)
            .map(|_| Cell::ALL[dist.sample(rng.inner())])
            .collect();
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.rows, self.cols)
    }

    /// The cell at `coord`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.offset(coord)])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> SgResult<()> {
        if !self.contains(coord) {
            return Err(SgError::OutOfBounds { coord, rows: self.rows, cols: self.cols });
        }
        let i = self.offset(coord);
        self.cells[i] = cell;
        Ok(())
    }

    /// One row as a slice.  Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Coord::new(i / cols, i % cols))
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cell in &self.cells {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::TypeA => counts.type_a += 1,
                Cell::TypeB => counts.type_b += 1,
            }
        }
        counts
    }

    /// Neighbors of `center` within `radius`, clipped to this grid.
    pub fn neighbors(&self, center: Coord, radius: usize) -> SgResult<Neighborhood> {
        neighbors(center, self.rows, self.cols, radius)
    }

    #[inline]
    fn offset(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

/// `rows * cols`, or a configuration error if the product overflows.
pub(crate) fn checked_len(rows: usize, cols: usize) -> SgResult<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| SgError::Config(format!("grid of {rows}x{cols} cells is too large")))
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    /// Panics if `coord` is out of bounds; use [`Grid::get`] to check.
    fn index(&self, coord: Coord) -> &Cell {
        assert!(self.contains(coord), "coordinate {coord} outside {}x{} grid", self.rows, self.cols);
        &self.cells[self.offset(coord)]
    }
}

// ── Text form ─────────────────────────────────────────────────────────────────
//
// One line per row, glyphs separated by single spaces:
//
//   A A .
//   . B A
//   B . B

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (col, cell) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = SgError;

    /// Parse the text form.  Whitespace between glyphs is optional and blank
    /// lines are skipped; every row must have the same width.
    fn from_str(s: &str) -> SgResult<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = None;

        for (line_no, line) in s.lines().enumerate() {
            let row: Vec<Cell> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Cell::from_glyph(c).ok_or_else(|| {
                        SgError::Parse(format!("line {}: unknown cell glyph {c:?}", line_no + 1))
                    })
                })
                .collect::<SgResult<_>>()?;
            if row.is_empty() {
                continue;
            }
            match cols {
                None => cols = Some(row.len()),
                Some(width) if width != row.len() => {
                    return Err(SgError::Parse(format!(
                        "line {}: expected {width} cells, found {}",
                        line_no + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend(row);
            rows += 1;
        }

        let cols = cols.ok_or_else(|| SgError::Parse("grid text contains no cells".into()))?;
        Grid::from_cells(rows, cols, cells)
    }
}
