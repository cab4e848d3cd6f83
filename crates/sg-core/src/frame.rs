//! Simulation frame counter.

use std::fmt;

/// One full sweep of the grid.
///
/// Frames are numbered from zero; a run configured with `max_frame = F`
/// executes frames `0..F`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame after `self`.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }

    /// `true` if this frame falls on a render boundary of `cadence`.
    ///
    /// A zero cadence never matches.
    #[inline]
    pub fn is_render_frame(self, cadence: u64) -> bool {
        cadence > 0 && self.0.is_multiple_of(cadence)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
