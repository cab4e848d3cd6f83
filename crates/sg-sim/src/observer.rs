//! Render hook and progress callbacks.

use sg_core::{Frame, Grid};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The engine never inspects what a callback
/// did; they are one-way notifications.
///
/// # Example — frame printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_render(&mut self, frame: Frame, grid: &Grid) {
///         println!("{frame}\n{grid}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before rendering or sweeping.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called on render frames (every `config.show_every` frames, starting
    /// with frame 0) with the grid as it stands before that frame's sweep.
    fn on_render(&mut self, _frame: Frame, _grid: &Grid) {}

    /// Called after the sweep of each frame.
    ///
    /// `relocations` is the number of occupants that moved this frame.
    fn on_frame_end(&mut self, _frame: Frame, _relocations: usize) {}

    /// Called once when the run reaches `max_frame`, with the final grid.
    fn on_sim_end(&mut self, _final_frame: Frame, _grid: &Grid) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Adapts a closure into a render hook.
///
/// ```rust,ignore
/// let mut frames = Vec::new();
/// sim.run(&mut FnObserver(|frame, grid: &Grid| frames.push((frame, grid.clone()))))?;
/// ```
pub struct FnObserver<F>(pub F);

impl<F: FnMut(Frame, &Grid)> SimObserver for FnObserver<F> {
    fn on_render(&mut self, frame: Frame, grid: &Grid) {
        (self.0)(frame, grid);
    }
}
