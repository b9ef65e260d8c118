//! Resolver configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the entitlement resolver and its verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum gap between verification attempts, in milliseconds.
    /// Attempts inside this window are suppressed. Default: 2000.
    pub min_verify_interval_ms: u64,
    /// Route consumers navigate to when access is denied. Default: "/plans".
    pub plans_route: String,
    /// Grant provisional access while the slow path is still verifying.
    /// Default: true.
    pub optimistic_default: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_verify_interval_ms: 2_000,
            plans_route: "/plans".to_string(),
            optimistic_default: true,
        }
    }
}

impl ResolverConfig {
    /// The minimum verification interval as a `Duration`.
    pub fn min_verify_interval(&self) -> Duration {
        Duration::from_millis(self.min_verify_interval_ms)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
