//! # Swap Telemetry
//!
//! Structured logging for XSwap services and tools.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swap_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::for_service("xswap"))?;
//!     // Application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XS_SERVICE_NAME` | `xswap` | Service name in logs |
//! | `XS_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `XS_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `XS_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
