//! Fluent builder for constructing a [`Sim`].

use sg_core::{Frame, Grid, SimConfig, SimRng};
use sg_policy::RelocationPolicy;
use tracing::info;

use crate::{Sim, SimError, SimResult, SimState};

/// Fluent builder for [`Sim`].  This is the engine's *uninitialized* state.
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, radius, tolerance, prior, frame counts
/// - [`SimRng`] — the run's only source of randomness
///
/// # Optional inputs
///
/// | Method     | Default                                      |
/// |------------|----------------------------------------------|
/// | `.grid(g)` | Random grid drawn from `config.prior_dist`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, SimRng::new(seed)).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    rng:    SimRng,
    grid:   Option<Grid>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, rng: SimRng) -> Self {
        Self { config, rng, grid: None }
    }

    /// Start from a fixed grid instead of a random one.
    ///
    /// Its dimensions must equal `(config.height, config.width)`.  The RNG is
    /// then only used for destination choice.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Validate the configuration, populate the grid, and return a running
    /// [`Sim`] at frame 0.
    pub fn build(mut self) -> SimResult<Sim> {
        self.config.validate()?;
        let (rows, cols) = self.config.dims();

        let grid = match self.grid {
            Some(g) => {
                if (g.rows(), g.cols()) != (rows, cols) {
                    return Err(SimError::GridMismatch {
                        rows,
                        cols,
                        got_rows: g.rows(),
                        got_cols: g.cols(),
                    });
                }
                g
            }
            None => Grid::random(rows, cols, &self.config.prior_dist, &mut self.rng)?,
        };

        let counts = grid.counts();
        info!(
            rows,
            cols,
            type_a = counts.type_a,
            type_b = counts.type_b,
            empty = counts.empty,
            max_frame = self.config.max_frame,
            "simulation initialized"
        );

        Ok(Sim {
            policy:  RelocationPolicy::from_config(&self.config),
            empties: grid.empty_cells(),
            config:  self.config,
            grid,
            rng:     self.rng,
            frame:   Frame::ZERO,
            state:   SimState::Running,
        })
    }
}
