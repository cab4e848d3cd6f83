//! The `Sim` struct and its frame loop.

use sg_core::{Cell, CellCounts, Coord, Frame, Grid, SgError, SgResult, SimConfig, SimRng};
use sg_policy::RelocationPolicy;
use tracing::{debug, info, warn};

use crate::{SimError, SimObserver, SimResult};

// ── SimState ──────────────────────────────────────────────────────────────────

/// Lifecycle of a run after [`SimBuilder::build`][crate::SimBuilder::build].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimState {
    /// Frames remain; `step` is accepted.
    Running,
    /// `max_frame` frames have run.  Terminal.
    Completed,
    /// A step failed.  Terminal; the grid is left as the failing sweep
    /// found it.
    Halted,
}

/// Outcome of one successful [`Sim::step`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FrameReport {
    /// The frame that was just executed.
    pub frame:       Frame,
    /// Occupants that moved during the sweep.
    pub relocations: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.  Owns the grid exclusively for the whole run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub(crate) config:  SimConfig,
    pub(crate) policy:  RelocationPolicy,
    pub(crate) grid:    Grid,
    pub(crate) rng:     SimRng,
    /// Every currently empty coordinate, in no particular order.  Kept in
    /// sync with `grid` on each move so destination choice is O(1).
    pub(crate) empties: Vec<Coord>,
    pub(crate) frame:   Frame,
    pub(crate) state:   SimState,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn policy(&self) -> RelocationPolicy {
        self.policy
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The next frame to execute (equivalently, frames executed so far).
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != SimState::Running
    }

    pub fn counts(&self) -> CellCounts {
        self.grid.counts()
    }

    /// Mean same-type neighbor fraction over occupied cells.
    pub fn mean_similarity(&self) -> SgResult<Option<f64>> {
        self.policy.mean_similarity(&self.grid)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Execute one frame.
    ///
    /// # Errors
    /// - [`SimError::Finished`] if the run is already completed or halted.
    /// - Any error raised during the sweep; the run is then halted.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<FrameReport> {
        if self.state != SimState::Running {
            return Err(SimError::Finished { frame: self.frame });
        }

        let frame = self.frame;
        observer.on_frame_start(frame);
        if frame.is_render_frame(self.config.show_every) {
            observer.on_render(frame, &self.grid);
        }

        let relocations = match self.sweep() {
            Ok(n) => n,
            Err(e) => {
                warn!(frame = frame.0, error = %e, "simulation halted");
                self.state = SimState::Halted;
                return Err(e.into());
            }
        };
        observer.on_frame_end(frame, relocations);
        debug!(frame = frame.0, relocations, "frame complete");

        self.frame = frame.next();
        if self.frame.0 >= self.config.max_frame {
            self.state = SimState::Completed;
            info!(frames = self.frame.0, "simulation completed");
            observer.on_sim_end(self.frame, &self.grid);
        }

        Ok(FrameReport { frame, relocations })
    }

    /// Run until `config.max_frame` frames have executed.
    ///
    /// Returns immediately if the run is already completed.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.state == SimState::Running {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run at most `n` frames, stopping early at completion.
    ///
    /// Returns the number of frames executed.  Useful for tests and
    /// incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut done = 0;
        while done < n && self.state == SimState::Running {
            self.step(observer)?;
            done += 1;
        }
        Ok(done)
    }

    // ── Core frame processing ─────────────────────────────────────────────

    /// Row-major pass over the live grid.  Returns the number of moves.
    fn sweep(&mut self) -> SgResult<usize> {
        let mut moved = 0;
        for coord in self.grid.coords() {
            let cell = self.grid[coord];
            if cell.is_empty() {
                continue;
            }
            if self.policy.must_relocate(&self.grid, coord)? {
                self.relocate(coord, cell)?;
                moved += 1;
            }
        }
        Ok(moved)
    }

    /// Move the occupant of `from` to a uniformly chosen empty cell.
    fn relocate(&mut self, from: Coord, cell: Cell) -> SgResult<()> {
        let slot = self
            .rng
            .choose_index(self.empties.len())
            .ok_or(SgError::NoEmptyCell(from))?;
        // The vacated origin takes the destination's place in the empty list.
        let to = std::mem::replace(&mut self.empties[slot], from);
        self.grid.set(to, cell)?;
        self.grid.set(from, Cell::Empty)?;
        Ok(())
    }
}
