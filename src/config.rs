use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every vector length the dataset generator writes.
pub const FULL_SIZES: [usize; 11] = [10, 30, 50, 70, 100, 300, 500, 700, 1000, 5000, 10000];

/// Lengths measured when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 2] = [10, 30];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Parameters of a measurement run. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Vector lengths to benchmark; each must exist in the dataset.
    pub sizes: Vec<usize>,
    /// Untimed iterations before measuring.
    pub warmup_iterations: u32,
    /// Timed iterations; the reported figure averages over all of them.
    pub measurement_iterations: u32,
    /// Operation calls per iteration.
    pub invocations_per_iteration: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            warmup_iterations: 0,
            measurement_iterations: 1,
            invocations_per_iteration: 10_000,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("no sizes configured".into()));
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::Invalid("sizes must be positive".into()));
        }
        if self.measurement_iterations == 0 {
            return Err(ConfigError::Invalid(
                "measurement_iterations must be at least 1".into(),
            ));
        }
        if self.invocations_per_iteration == 0 {
            return Err(ConfigError::Invalid(
                "invocations_per_iteration must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
