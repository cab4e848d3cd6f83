//! `sg-render` — draws simulation frames as text.
//!
//! [`TextRenderer`] implements `sg_sim::SimObserver`, so it plugs straight
//! into `Sim::run` as the render hook:
//!
//! ```rust,ignore
//! use sg_render::TextRenderer;
//!
//! let mut renderer = TextRenderer::from_config(std::io::stdout(), &config);
//! sim.run(&mut renderer)?;
//! if let Some(e) = renderer.take_error() { eprintln!("render error: {e}"); }
//! ```
//!
//! Output for one render frame:
//!
//! ```text
//! Iteration 5  A=12 B=11 empty=2  similarity 0.613
//! A A . B B
//! A A B B B
//! ...
//! ```

pub mod error;
pub mod text;


pub use error::{RenderError, RenderResult};
pub use text::TextRenderer;
