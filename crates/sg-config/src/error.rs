use sg_core::SgError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("experiments parse error: {0}")]
    Parse(String),

    #[error("unknown experiment {name:?}; available: {known}")]
    UnknownExperiment { name: String, known: String },

    #[error("experiment {name:?} is invalid: {source}")]
    Invalid {
        name:   String,
        #[source]
        source: SgError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
