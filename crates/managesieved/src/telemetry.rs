//! Structured telemetry initialisation for the command service.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use managesieve_config::{Config, LogFormat};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Only the first successful call installs a subscriber. Later calls return a
/// fresh [`TelemetryHandle`] and leave the global state alone, even when their
/// configuration differs.
///
/// # Examples
///
/// ```rust
/// use managesieve_config::Config;
///
/// # fn main() -> Result<(), managesieved::TelemetryError> {
/// let config = Config::default();
/// let first = managesieved::initialise_telemetry(&config)?;
/// let second = managesieved::initialise_telemetry(&config)?;
///
/// // The second call finds the subscriber from the first and installs
/// // nothing.
/// drop(first);
/// drop(second);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the filter expression does not
/// parse, and [`TelemetryError::Subscriber`] when another subscriber was
/// already installed outside this module.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| TelemetryHandle)
}

/// Parses an `EnvFilter` expression such as `managesieved::dispatch=debug,info`.
fn build_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter(error.to_string()))
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = build_filter(config.log_filter())?;

    let builder = |env_filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            // Stdout is left to the protocol when a connection runs over
            // stdio.
            .with_writer(io::stderr)
            // Colour codes only on interactive terminals, never in log files
            // or collectors.
            .with_ansi(io::stderr().is_terminal())
            // UTC timestamps line up session events across hosts.
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        // Flattened so event fields sit beside `timestamp` and `level`
        // rather than under a nested `fields` object.
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::level("info")]
    #[case::targets("managesieved::dispatch=debug,warn")]
    #[case::module_off("managesieved::session=off")]
    fn accepts_filter_expressions(#[case] expression: &str) {
        assert!(build_filter(expression).is_ok());
    }

    #[test]
    fn rejects_malformed_filter() {
        let error = build_filter("managesieved=loud").expect_err("filter should not parse");
        assert!(matches!(error, TelemetryError::Filter(_)));
        assert!(error.to_string().starts_with("invalid log filter"));
    }

    #[test]
    fn initialise_is_idempotent() {
        let config = Config::default();
        initialise(&config).expect("first initialisation");
        initialise(&config).expect("second initialisation");
    }
}
