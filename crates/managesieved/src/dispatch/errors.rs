//! Error types for command dispatch failures.
//!
//! The dispatcher never turns a failed script operation into response text.
//! It hands the failure back, tagged with the verb that triggered it, and the
//! caller decides what the client sees.

use thiserror::Error;

use crate::operations::OperationError;

use super::verb::Verb;

/// Errors surfaced by [`CommandDispatcher::dispatch`](super::CommandDispatcher::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The script operation bound to the verb failed.
    #[error("{verb} failed: {source}")]
    Operation {
        /// Verb whose operation failed.
        verb: Verb,
        /// Failure reported by the operation.
        #[source]
        source: OperationError,
    },
}

impl DispatchError {
    /// Creates an operation failure for the given verb.
    #[must_use]
    pub const fn operation(verb: Verb, source: OperationError) -> Self {
        Self::Operation { verb, source }
    }

    /// Verb that was being dispatched when the failure occurred.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        match self {
            Self::Operation { verb, .. } => *verb,
        }
    }

    /// Renders the failure as the `NO` line sent to the client.
    #[must_use]
    pub fn response_line(&self) -> String {
        match self {
            Self::Operation { source, .. } => source.response_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_names_verb_and_cause() {
        let error = DispatchError::operation(
            Verb::GetScript,
            OperationError::script_not_found("vacation"),
        );
        assert_eq!(error.to_string(), "GETSCRIPT failed: script not found: vacation");
        assert_eq!(error.verb(), Verb::GetScript);
        assert!(error.source().is_some());
    }

    #[test]
    fn response_line_comes_from_the_operation_error() {
        let error = DispatchError::operation(
            Verb::PutScript,
            OperationError::quota_exceeded("script too large"),
        );
        assert_eq!(
            error.response_line(),
            r#"NO (QUOTA) "quota exceeded: script too large""#
        );
    }
}
