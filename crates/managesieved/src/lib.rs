//! ManageSieve command dispatch service.
//!
//! The crate sits between a client connection and a script repository. Each
//! request line is split into a verb and its raw arguments, and the verb
//! decides what happens next: script-management verbs call exactly one method
//! of [`ScriptOperations`], session-transition verbs get a fixed placeholder
//! reply, and anything else is answered with `NO unknown <verb> command`.
//!
//! The repository itself is not part of this crate. Callers provide a
//! [`ScriptOperations`] implementation and drive connections with a
//! [`LineSession`], typically obtained from [`bootstrap_with`] after
//! configuration has been loaded through [`managesieve_config`] and
//! structured telemetry installed.
//!
//! ```text
//! client ──line──▶ LineSession ──▶ CommandDispatcher ──▶ ScriptOperations
//!        ◀─line──              ◀── response / DispatchError ◀──
//! ```

mod bootstrap;
mod connection;
pub mod dispatch;
pub mod operations;
mod session;
mod telemetry;

pub use bootstrap::{
    ArgsConfigLoader, BootstrapError, ConfigLoader, Service, StaticConfigLoader, SystemConfigLoader,
    bootstrap_with,
};
pub use connection::{LineSession, SessionError};
pub use dispatch::{CommandDispatcher, DispatchError, Verb};
pub use operations::{OperationError, OperationResult, ResponseCode, ScriptOperations};
pub use session::Session;
pub use telemetry::{TelemetryError, TelemetryHandle, initialise as initialise_telemetry};

#[cfg(test)]
mod tests;
