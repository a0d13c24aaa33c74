//! Shared configuration for the ManageSieve command service.
//!
//! Values are layered by [`ortho_config`]: built-in defaults first, then an
//! optional TOML file (`--config-path` or `MANAGESIEVE_CONFIG_PATH`), then
//! `MANAGESIEVE_*` environment variables, then command-line flags. Later layers
//! win.
//!
//! The service only needs a handful of knobs today: the tracing filter and
//! output format used by the telemetry layer, and the ceiling applied to a
//! single request line by the session driver.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_LINE_BYTES, default_log_filter, default_log_filter_string,
    default_log_format, default_max_line_bytes,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "MANAGESIEVE")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[ortho_config(default = defaults::default_log_filter_string())]
    #[serde(default = "defaults::default_log_filter_string")]
    pub log_filter: String,
    /// Output format for log events.
    #[ortho_config(default = defaults::default_log_format())]
    #[serde(default = "defaults::default_log_format")]
    pub log_format: LogFormat,
    /// Longest request line accepted from a client, in bytes.
    #[ortho_config(default = defaults::default_max_line_bytes())]
    #[serde(default = "defaults::default_max_line_bytes")]
    pub max_line_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            max_line_bytes: default_max_line_bytes(),
        }
    }
}

impl Config {
    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Longest request line accepted from a client, in bytes.
    #[must_use]
    pub const fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Rejects values no session could run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogFilter`] when the filter is blank and
    /// [`ConfigError::ZeroLineLimit`] when `max_line_bytes` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        if self.max_line_bytes == 0 {
            return Err(ConfigError::ZeroLineLimit);
        }
        Ok(())
    }
}

/// Semantic problems found in an otherwise well-formed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The log filter was set to an empty string.
    #[error("log filter must not be empty")]
    EmptyLogFilter,
    /// The request line limit was set to zero.
    #[error("max_line_bytes must be greater than zero")]
    ZeroLineLimit,
}
