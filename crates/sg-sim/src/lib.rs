//! `sg-sim` — frame loop orchestrator for the schelling segregation simulator.
//!
//! # Frame loop
//!
//! ```text
//! build:  validate config → populate grid from prior_dist → frame = 0
//! for frame in 0..config.max_frame:
//!   ① Render  — if frame % show_every == 0, observer.on_render(frame, grid)
//!   ② Sweep   — row-major over every cell; each occupied cell that
//!               RelocationPolicy rejects moves to a uniformly chosen
//!               empty cell, leaving its origin empty.  The grid is
//!               updated in place, so later cells see earlier moves.
//!   ③ Advance — frame += 1; at max_frame the run is Completed.
//! ```
//!
//! The sweep is deliberately sequential.  Parallelizing it would need a
//! snapshot-before-sweep rule and would change results.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::{SimConfig, SimRng};
//! use sg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), SimRng::new(42)).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FnObserver, NoopObserver, SimObserver};
pub use sim::{FrameReport, Sim, SimState};
