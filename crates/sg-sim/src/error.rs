use sg_core::{Frame, SgError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("initial grid is {got_rows}x{got_cols} but the configuration expects {rows}x{cols}")]
    GridMismatch {
        rows:     usize,
        cols:     usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("simulation already finished at frame {frame}")]
    Finished { frame: Frame },

    #[error(transparent)]
    Core(#[from] SgError),
}

impl SimError {
    /// `true` when the run failed because of its parameters.
    pub fn is_config_error(&self) -> bool {
        match self {
            SimError::GridMismatch { .. } => true,
            SimError::Core(e) => e.is_config_error(),
            SimError::Finished { .. } => false,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
