//! Coordinator configuration from defaults, environment variables or a JSON file.

use crate::domain::{invariant_cross_chain_ordering, CoordinatorError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use xs_02_timelock::TimelockOffsets;

/// Default relayer base URL.
pub const DEFAULT_RELAYER_URL: &str = "http://localhost:8080";

/// Default upper bound on fill parts per order.
pub const DEFAULT_MAX_PARTS: u32 = 1024;

/// Configuration for the Swap Coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Offsets new orders are deployed with
    pub offsets: TimelockOffsets,

    /// Maximum number of fill parts per order
    pub max_parts: u32,

    /// Relayer base URL
    pub relayer_url: String,

    /// Relayer request timeout in seconds
    pub relayer_timeout_secs: u64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            offsets: TimelockOffsets::default(),
            max_parts: DEFAULT_MAX_PARTS,
            relayer_url: DEFAULT_RELAYER_URL.to_string(),
            relayer_timeout_secs: 5,
        }
    }
}

impl CoordinatorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XS_RELAYER_URL`: Relayer base URL (default: http://localhost:8080)
    /// - `XS_MAX_PARTS`: Maximum fill parts per order (default: 1024)
    /// - `XS_RELAYER_TIMEOUT_SECS`: Relayer request timeout (default: 5)
    ///
    /// Offsets keep their defaults; use a JSON file to change them.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            offsets: defaults.offsets,
            max_parts: parse_var(
                "XS_MAX_PARTS",
                env::var("XS_MAX_PARTS").ok(),
                defaults.max_parts,
            ),
            relayer_url: env::var("XS_RELAYER_URL").unwrap_or(defaults.relayer_url),
            relayer_timeout_secs: parse_var(
                "XS_RELAYER_TIMEOUT_SECS",
                env::var("XS_RELAYER_TIMEOUT_SECS").ok(),
                defaults.relayer_timeout_secs,
            ),
        }
    }

    /// Load and validate configuration from a JSON file.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoordinatorError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CoordinatorError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| CoordinatorError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check offsets and limits.
    pub fn validate(&self) -> Result<(), CoordinatorError> {
        self.offsets.validate()?;
        invariant_cross_chain_ordering(&self.offsets)?;
        if self.max_parts == 0 {
            return Err(CoordinatorError::Config("max_parts must be at least 1".into()));
        }
        if self.relayer_timeout_secs == 0 {
            return Err(CoordinatorError::Config(
                "relayer_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Relayer request timeout.
    pub fn relayer_timeout(&self) -> Duration {
        Duration::from_secs(self.relayer_timeout_secs)
    }
}

/// Parse an optional variable value, keeping `default` when it is unset or invalid.
fn parse_var<T: FromStr + Copy>(name: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(variable = name, value = %raw, "Unparseable value, using default");
            default
        }
    }
}
