//! Layered configuration: serde sections over compiled defaults.
//!
//! Every section and field carries `#[serde(default)]`, so a TOML file
//! may set only the keys it cares about; missing keys fall back to the
//! values in [`defaults`].

pub mod defaults;

mod dynamics_config;
mod search_config;

pub use dynamics_config::{DynamicsConfig, DynamicsWeights};
pub use search_config::SearchConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

/// Top-level configuration for the limbic workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimbicConfig {
    pub search: SearchConfig,
    pub dynamics: DynamicsConfig,
}

impl LimbicConfig {
    /// Load a TOML file over the compiled defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        debug!(path = %path.display(), "loaded limbic config");
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
