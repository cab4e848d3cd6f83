//! Run parameters.

use crate::grid::checked_len;
use crate::{Coord, SgError, SgResult};

/// Allowed deviation of `prior_dist` from summing to exactly 1.
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-8;

/// Immutable parameters of one simulation run.
///
/// Usually loaded by name from an experiments file (see `sg-config`) and
/// passed to the simulation builder, which calls [`validate`][Self::validate].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of grid rows.
    pub height: usize,

    /// Number of grid columns.
    pub width: usize,

    /// Neighborhood radius (half-width of the square window).  At least 1.
    pub neighbor_size: usize,

    /// Minimum same-type neighbor fraction an occupant accepts, in `[0, 1]`.
    pub neighbor_tol: f64,

    /// Initial probability of each cell state, ordered
    /// `[empty, type_a, type_b]`.  Must sum to 1.
    pub prior_dist: [f64; 3],

    /// Number of frames to run.
    pub max_frame: u64,

    /// Render every `show_every` frames, starting with frame 0.
    pub show_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            height:        50,
            width:         50,
            neighbor_size: 1,
            neighbor_tol:  0.5,
            prior_dist:    [0.1, 0.45, 0.45],
            max_frame:     50,
            show_every:    5,
        }
    }
}

impl SimConfig {
    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// `height * width`; a configuration error if the product overflows.
    #[inline]
    pub fn cell_count(&self) -> SgResult<usize> {
        checked_len(self.height, self.width)
    }

    /// Check every parameter, returning the first problem found.
    ///
    /// A 1×1 grid is rejected as [`SgError::Isolated`]: with any radius its
    /// only cell has no neighbors, so the similarity fraction is undefined.
    pub fn validate(&self) -> SgResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SgError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if self.neighbor_size == 0 {
            return Err(SgError::Config("neighbor_size must be at least 1".into()));
        }
        if self.cell_count()? < 2 {
            return Err(SgError::Isolated { coord: Coord::new(0, 0), radius: self.neighbor_size });
        }
        if !(0.0..=1.0).contains(&self.neighbor_tol) {
            return Err(SgError::Config(format!(
                "neighbor_tol must be a fraction in [0, 1], got {}",
                self.neighbor_tol
            )));
        }
        if let Some(p) = self.prior_dist.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(SgError::Config(format!(
                "prior_dist entries must be probabilities in [0, 1], got {p}"
            )));
        }
        let sum: f64 = self.prior_dist.iter().sum();
        if (sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(SgError::Config(format!(
                "prior_dist {:?} sums to {sum}, expected 1",
                self.prior_dist
            )));
        }
        if self.max_frame == 0 {
            return Err(SgError::Config("max_frame must be positive".into()));
        }
        if self.show_every == 0 {
            return Err(SgError::Config("show_every must be positive".into()));
        }
        Ok(())
    }
}
