//! Similarity measurement and the relocation decision.

use sg_core::{Coord, Grid, SgError, SgResult, SimConfig};

// ── Similarity ────────────────────────────────────────────────────────────────

/// Same-type neighbor tally for one occupied cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Similarity {
    /// Neighbors holding the same type as the center.
    pub same:  usize,
    /// All in-bounds neighbors, empty cells included.
    pub total: usize,
}

impl Similarity {
    /// `same / total`.  `total` is never zero for a value returned by
    /// [`similarity`].
    #[inline]
    pub fn fraction(self) -> f64 {
        self.same as f64 / self.total as f64
    }
}

/// Tally the neighbors of the occupied cell at `coord`.
///
/// # Errors
/// - [`SgError::EmptyCell`] if `coord` is empty.
/// - [`SgError::Isolated`] if the clipped window holds no neighbors.
/// - Anything [`Grid::neighbors`] rejects (out-of-bounds center, zero radius).
pub fn similarity(grid: &Grid, coord: Coord, radius: usize) -> SgResult<Similarity> {
    let hood = grid.neighbors(coord, radius)?;
    let own = grid[coord];
    if own.is_empty() {
        return Err(SgError::EmptyCell(coord));
    }

    let total = hood.window_len();
    if total == 0 {
        return Err(SgError::Isolated { coord, radius });
    }
    let same = hood.filter(|&n| grid[n] == own).count();
    Ok(Similarity { same, total })
}

/// `true` iff the occupant at `coord` must move: its same-type fraction is
/// strictly below `tolerance`.  A fraction exactly equal to `tolerance` stays.
pub fn must_relocate(grid: &Grid, coord: Coord, radius: usize, tolerance: f64) -> SgResult<bool> {
    Ok(similarity(grid, coord, radius)?.fraction() < tolerance)
}

/// Mean same-type fraction over all occupied cells.
///
/// A coarse segregation measure: 0.5 is roughly what a well-mixed two-type
/// grid without vacancies shows, 1.0 is complete separation.  `None` when the
/// grid has no occupants.
pub fn mean_similarity(grid: &Grid, radius: usize) -> SgResult<Option<f64>> {
    let mut sum = 0.0;
    let mut occupied = 0usize;
    for (coord, cell) in grid.iter() {
        if cell.is_occupied() {
            sum += similarity(grid, coord, radius)?.fraction();
            occupied += 1;
        }
    }
    Ok((occupied > 0).then(|| sum / occupied as f64))
}

// ── RelocationPolicy ──────────────────────────────────────────────────────────

/// The fixed radius and tolerance of a run.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RelocationPolicy {
    pub radius:    usize,
    pub tolerance: f64,
}

impl RelocationPolicy {
    pub fn new(radius: usize, tolerance: f64) -> Self {
        Self { radius, tolerance }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.neighbor_size, config.neighbor_tol)
    }

    #[inline]
    pub fn must_relocate(&self, grid: &Grid, coord: Coord) -> SgResult<bool> {
        must_relocate(grid, coord, self.radius, self.tolerance)
    }

    #[inline]
    pub fn similarity(&self, grid: &Grid, coord: Coord) -> SgResult<Similarity> {
        similarity(grid, coord, self.radius)
    }

    #[inline]
    pub fn mean_similarity(&self, grid: &Grid) -> SgResult<Option<f64>> {
        mean_similarity(grid, self.radius)
    }
}
