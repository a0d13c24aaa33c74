//! Request line to response line.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::operations::ScriptOperations;
use crate::session::Session;

use super::errors::DispatchError;
use super::request::Request;
use super::response;
use super::router::{DISPATCH_TARGET, Route, route};
use super::verb::Verb;

/// Routes request lines to script operations.
///
/// Each call handles exactly one line and produces exactly one response line:
/// the verbatim result of at most one script operation, a stub reply, or the
/// unknown-verb reply. Operation failures are returned as
/// [`DispatchError::Operation`] and never rewritten.
///
/// The dispatcher keeps no per-connection state, so a single instance can be
/// cloned into every connection.
#[derive(Clone)]
pub struct CommandDispatcher {
    operations: Arc<dyn ScriptOperations>,
}

impl CommandDispatcher {
    /// Creates a dispatcher over the given script operations.
    #[must_use]
    pub fn new(operations: Arc<dyn ScriptOperations>) -> Self {
        Self { operations }
    }

    /// Handles one request line for `session`.
    ///
    /// `line` must not include its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Operation`] when the script operation bound to
    /// the verb fails.
    pub fn dispatch(&self, session: &mut Session, line: &str) -> Result<String, DispatchError> {
        let request = Request::parse(line);
        let Some(verb) = Verb::parse(request.verb()) else {
            debug!(
                target: DISPATCH_TARGET,
                verb = request.verb(),
                "unknown verb"
            );
            return Ok(response::unknown_command(request.verb()));
        };

        match route(verb) {
            Route::Stub(reply) => {
                debug!(
                    target: DISPATCH_TARGET,
                    verb = verb.as_str(),
                    "answering stub verb"
                );
                Ok(reply.render(verb))
            }
            Route::Operation(operation) => {
                debug!(
                    target: DISPATCH_TARGET,
                    verb = verb.as_str(),
                    operation = operation.as_str(),
                    "routing command"
                );
                operation
                    .invoke(self.operations.as_ref(), session, request.arguments())
                    .map_err(|source| DispatchError::operation(verb, source))
            }
        }
    }
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CommandDispatcher")
            .finish_non_exhaustive()
    }
}
