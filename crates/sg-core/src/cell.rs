//! Cell states and grid coordinates.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// The state of one lattice cell.
///
/// The declaration order is also the categorical order used by
/// [`SimConfig::prior_dist`][crate::SimConfig::prior_dist]:
/// `[Empty, TypeA, TypeB]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cell {
    #[default]
    Empty,
    TypeA,
    TypeB,
}

impl Cell {
    /// All states in categorical order.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::TypeA, Cell::TypeB];

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Single-character form used by text fixtures and the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::TypeA => 'A',
            Cell::TypeB => 'B',
        }
    }

    /// Inverse of [`glyph`][Self::glyph].
    pub fn from_glyph(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'A' => Some(Cell::TypeA),
            'B' => Some(Cell::TypeB),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::TypeA => "type_a",
            Cell::TypeB => "type_b",
        };
        f.write_str(name)
    }
}

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A `(row, col)` lattice coordinate.
///
/// Validity depends on the grid it is used with; see
/// [`Grid::contains`][crate::Grid::contains].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` iff `row < rows && col < cols`.
    #[inline]
    pub fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
