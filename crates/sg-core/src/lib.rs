//! `sg-core` — foundational types for the schelling segregation simulator.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`cell`]          | `Cell` (empty / type A / type B), `Coord`           |
//! | [`grid`]          | `Grid`, `CellCounts`                                |
//! | [`neighborhood`]  | `neighbors`, `Neighborhood` iterator                |
//! | [`frame`]         | `Frame` counter                                     |
//! | [`config`]        | `SimConfig` and its validation                      |
//! | [`rng`]           | `SimRng` (seeded, injectable)                       |
//! | [`error`]         | `SgError`, `SgResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod neighborhood;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Coord};
pub use config::SimConfig;
pub use error::{SgError, SgResult};
pub use frame::Frame;
pub use grid::{CellCounts, Grid};
pub use neighborhood::{Neighborhood, neighbors};
pub use rng::SimRng;
