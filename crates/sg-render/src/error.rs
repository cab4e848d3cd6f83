//! Error types for sg-render.

use sg_core::SgError;
use thiserror::Error;

/// Errors that can occur while drawing frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("similarity measurement failed: {0}")]
    Similarity(#[from] SgError),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
