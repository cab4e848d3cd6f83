//! CSV experiment loader.
//!
//! # CSV format
//!
//! One row per named configuration:
//!
//! ```csv
//! name,height,width,neighbor_size,neighbor_tol,prior_empty,prior_a,prior_b,max_frame,show_every
//! default,50,50,1,0.5,0.1,0.45,0.45,50,5
//! crowded,80,80,2,0.4,0.02,0.49,0.49,100,10
//! ```
//!
//! `prior_empty`, `prior_a`, `prior_b` form `SimConfig::prior_dist` in that
//! order.  Names must be unique.  Rows are parsed eagerly but only validated
//! when selected, so one broken experiment does not block the others.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use sg_core::SimConfig;

use crate::{ConfigError, ConfigResult};

/// Experiment selected when none is named.
pub const DEFAULT_EXPERIMENT: &str = "default";

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ExperimentRecord {
    name:          String,
    height:        usize,
    width:         usize,
    neighbor_size: usize,
    neighbor_tol:  f64,
    prior_empty:   f64,
    prior_a:       f64,
    prior_b:       f64,
    max_frame:     u64,
    show_every:    u64,
}

impl ExperimentRecord {
    fn into_entry(self) -> (String, SimConfig) {
        let config = SimConfig {
            height:        self.height,
            width:         self.width,
            neighbor_size: self.neighbor_size,
            neighbor_tol:  self.neighbor_tol,
            prior_dist:    [self.prior_empty, self.prior_a, self.prior_b],
            max_frame:     self.max_frame,
            show_every:    self.show_every,
        };
        (self.name, config)
    }
}

// ── Experiments ───────────────────────────────────────────────────────────────

/// All experiments from one file, in file order.
#[derive(Clone, Debug, Default)]
pub struct Experiments {
    entries: Vec<(String, SimConfig)>,
}

impl Experiments {
    /// The validated configuration named `name`.
    ///
    /// # Errors
    /// - [`ConfigError::UnknownExperiment`] if no row has that name.
    /// - [`ConfigError::Invalid`] if the row fails [`SimConfig::validate`].
    pub fn get(&self, name: &str) -> ConfigResult<&SimConfig> {
        let (_, config) = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| ConfigError::UnknownExperiment {
                name:  name.to_owned(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })?;
        config.validate().map_err(|source| ConfigError::Invalid {
            name: name.to_owned(),
            source,
        })?;
        Ok(config)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every experiment from a CSV file.
pub fn load_experiments_csv(path: &Path) -> ConfigResult<Experiments> {
    let file = std::fs::File::open(path)?;
    let experiments = load_experiments_reader(file)?;
    debug!(path = %path.display(), count = experiments.len(), "loaded experiments");
    Ok(experiments)
}

/// Like [`load_experiments_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded defaults.
pub fn load_experiments_reader<R: Read>(reader: R) -> ConfigResult<Experiments> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries: Vec<(String, SimConfig)> = Vec::new();

    for result in csv_reader.deserialize::<ExperimentRecord>() {
        let (name, config) = result
            .map_err(|e| ConfigError::Parse(e.to_string()))?
            .into_entry();
        if entries.iter().any(|(n, _)| *n == name) {
            return Err(ConfigError::Parse(format!("duplicate experiment name {name:?}")));
        }
        entries.push((name, config));
    }

    Ok(Experiments { entries })
}

/// Load `path` and select `name` in one call.
pub fn load_experiment(path: &Path, name: &str) -> ConfigResult<SimConfig> {
    load_experiments_csv(path)?.get(name).cloned()
}
