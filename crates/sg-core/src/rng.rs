//! Seeded simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, created from an explicit seed and passed
//! into the engine.  It is consumed in a fixed order: first one draw per cell
//! (row-major) for initial population, then one draw per relocation for the
//! destination.  The same seed and configuration therefore reproduce the same
//! grid at every frame.  There is no process-wide generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Single-threaded by construction: the engine holds it by value and only
/// touches it from the sweep.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform index into a collection of `len` items; `None` when `len == 0`.
    #[inline]
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
