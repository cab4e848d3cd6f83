//! `sg-policy` — the move/stay decision rule.
//!
//! An occupant relocates when the fraction of its neighbors sharing its type
//! falls strictly below the run's tolerance.  The neighborhood is the clipped
//! square window from [`sg_core::neighbors`].
//!
//! # Denominator
//!
//! The fraction is `same / window_len`, where `window_len` counts *every*
//! in-bounds neighbor, empty ones included.  An occupant surrounded by vacant
//! cells is therefore unhappy even if no neighbor is of the other type.  This
//! is the classic behavior of the model and changing it changes outcomes.
//!
//! ```rust,ignore
//! let policy = RelocationPolicy::from_config(&config);
//! if policy.must_relocate(&grid, coord)? { /* move */ }
//! ```

pub mod policy;


pub use policy::{RelocationPolicy, Similarity, mean_similarity, must_relocate, similarity};
