//! `sg-config` — named experiment configurations.
//!
//! A single CSV file holds any number of named run configurations; the
//! application picks one by name (the CLI's `--config`, default `default`).
//!
//! ```rust,ignore
//! let config = sg_config::load_experiment(Path::new("experiments.csv"), "default")?;
//! ```

pub mod error;
pub mod loader;


pub use error::{ConfigError, ConfigResult};
pub use loader::{DEFAULT_EXPERIMENT, Experiments, load_experiment, load_experiments_csv, load_experiments_reader};
