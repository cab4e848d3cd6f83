//! `TextRenderer<W>` — bridges `SimObserver` to any `Write` sink.

use std::io::{BufRead, Write};

use sg_core::{Frame, Grid, SimConfig};
use sg_policy::mean_similarity;
use sg_sim::SimObserver;
use tracing::warn;

use crate::{RenderError, RenderResult};

/// A [`SimObserver`] that prints each render frame as glyph rows.
///
/// Errors are stored internally because `SimObserver` methods have no return
/// value; the simulation never waits on or reacts to them.  After
/// `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct TextRenderer<W: Write> {
    out:        W,
    radius:     usize,
    /// When set, each render blocks until a line is read from this source.
    pause:      Option<Box<dyn BufRead>>,
    last_error: Option<RenderError>,
}

impl<W: Write> TextRenderer<W> {
    /// `radius` is used for the similarity figure in each frame header.
    pub fn new(out: W, radius: usize) -> Self {
        Self { out, radius, pause: None, last_error: None }
    }

    pub fn from_config(out: W, config: &SimConfig) -> Self {
        Self::new(out, config.neighbor_size)
    }

    /// Wait for a line on `input` after every rendered frame.
    ///
    /// Pausing stops for good once `input` reaches end of file.
    pub fn with_pause<R: BufRead + 'static>(mut self, input: R) -> Self {
        self.pause = Some(Box::new(input));
        self
    }

    /// Take the stored error (if any).  Only the first error is kept.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, label: &str, grid: &Grid) -> RenderResult<()> {
        write!(self.out, "{label}  {}", grid.counts())?;
        if let Some(similarity) = mean_similarity(grid, self.radius)? {
            write!(self.out, "  similarity {similarity:.3}")?;
        }
        writeln!(self.out)?;
        write!(self.out, "{grid}")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn wait(&mut self) -> RenderResult<()> {
        let Some(input) = self.pause.as_mut() else {
            return Ok(());
        };
        writeln!(self.out, "press Enter to continue")?;
        self.out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            self.pause = None;
        }
        Ok(())
    }

    fn store_err(&mut self, result: RenderResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "render failed");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TextRenderer<W> {
    fn on_render(&mut self, frame: Frame, grid: &Grid) {
        let result = self
            .draw(&format!("Iteration {}", frame.0), grid)
            .and_then(|()| self.wait());
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_frame: Frame, grid: &Grid) {
        let result = self.draw(&format!("Completed after {} frames", final_frame.0), grid);
        self.store_err(result);
    }
}
