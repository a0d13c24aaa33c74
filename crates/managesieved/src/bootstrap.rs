//! Service bootstrap orchestration.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use tracing::info;

use managesieve_config::{Config, ConfigError};

use crate::connection::{LineSession, SESSION_TARGET};
use crate::dispatch::CommandDispatcher;
use crate::operations::ScriptOperations;
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the service configuration.
    ///
    /// # Errors
    ///
    /// Returns the layered loader error when any configuration source is
    /// unreadable or malformed.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader that layers configuration over an explicit argument list.
///
/// The first argument is the program name, as with [`std::env::args_os`].
#[derive(Debug, Clone)]
pub struct ArgsConfigLoader {
    args: Vec<OsString>,
}

impl ArgsConfigLoader {
    /// Captures the arguments to parse on every [`ConfigLoader::load`].
    #[must_use]
    pub fn new<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfigLoader for ArgsConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load_from_iter(self.args.iter().cloned())
    }
}

/// Loader that hands out a configuration resolved elsewhere.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Configuration loaded but holds unusable values.
    #[error("invalid configuration: {source}")]
    InvalidConfiguration {
        /// Validation failure.
        #[source]
        source: ConfigError,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Result of a successful bootstrap invocation.
#[derive(Debug)]
pub struct Service {
    config: Config,
    driver: LineSession,
    telemetry: TelemetryHandle,
}

impl Service {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Session driver to run for each accepted connection.
    #[must_use]
    pub const fn line_session(&self) -> &LineSession {
        &self.driver
    }

    /// Dispatcher shared by every connection.
    #[must_use]
    pub const fn dispatcher(&self) -> &CommandDispatcher {
        self.driver.dispatcher()
    }

    /// Accessor for the telemetry handle, primarily useful for testing.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }
}

/// Bootstraps the service over the supplied script operations.
///
/// Configuration is loaded and validated before telemetry is installed, so a
/// rejected configuration never touches the global subscriber.
///
/// # Errors
///
/// Returns [`BootstrapError`] when loading, validation or telemetry set-up
/// fails.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    operations: Arc<dyn ScriptOperations>,
) -> Result<Service, BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;
    config
        .validate()
        .map_err(|source| BootstrapError::InvalidConfiguration { source })?;
    let telemetry =
        telemetry::initialise(&config).map_err(|source| BootstrapError::Telemetry { source })?;

    let driver = LineSession::from_config(CommandDispatcher::new(operations), &config);
    info!(
        target: SESSION_TARGET,
        max_line_bytes = config.max_line_bytes(),
        log_format = %config.log_format(),
        "service ready"
    );

    Ok(Service {
        config,
        driver,
        telemetry,
    })
}
