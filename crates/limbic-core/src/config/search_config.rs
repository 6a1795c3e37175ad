//! Host-side search defaults.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Defaults a host applies when a query omits the optional knobs.
///
/// The engine itself always receives explicit values; this section only
/// standardizes what "omitted" resolves to at the call boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Option string used when a query passes none.
    pub default_option: String,
    /// Neighbor count used when a query passes none.
    pub default_k: i64,
    /// Search radius used when a query passes none.
    pub default_radius: f64,
    /// Gaussian width used when a query passes none.
    pub default_sigma: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_option: defaults::DEFAULT_OPTION.to_string(),
            default_k: defaults::DEFAULT_K,
            default_radius: defaults::DEFAULT_RADIUS,
            default_sigma: defaults::DEFAULT_SIGMA,
        }
    }
}
