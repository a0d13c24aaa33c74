//! Failures reported by script operations.

use std::fmt;

use thiserror::Error;

use crate::dispatch::response;

/// Bracketed response codes defined by RFC 5804 for `NO` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// The named script does not exist.
    Nonexistent,
    /// A script with the target name already exists.
    AlreadyExists,
    /// The script is active and cannot be removed.
    Active,
    /// The operation would exceed the user's quota.
    Quota,
    /// A transient server-side failure; the client may retry.
    TryLater,
}

impl ResponseCode {
    /// Returns the code as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nonexistent => "NONEXISTENT",
            Self::AlreadyExists => "ALREADYEXISTS",
            Self::Active => "ACTIVE",
            Self::Quota => "QUOTA",
            Self::TryLater => "TRYLATER",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Errors raised by [`ScriptOperations`](super::ScriptOperations)
/// implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The verb needs an authenticated session.
    #[error("authentication required")]
    NotAuthenticated,

    /// The argument string could not be parsed for this verb.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        /// What was wrong with the arguments.
        message: String,
    },

    /// The named script does not exist.
    #[error("script not found: {name}")]
    ScriptNotFound {
        /// Script name as supplied by the client.
        name: String,
    },

    /// A script with the target name already exists.
    #[error("script already exists: {name}")]
    DuplicateScript {
        /// Conflicting script name.
        name: String,
    },

    /// The script is active and the operation requires it not to be.
    #[error("script is active: {name}")]
    ScriptActive {
        /// Active script name.
        name: String,
    },

    /// Storing the script would exceed the user's quota.
    #[error("quota exceeded: {message}")]
    QuotaExceeded {
        /// Which limit was hit.
        message: String,
    },

    /// The script failed Sieve validation.
    #[error("invalid script: {message}")]
    InvalidSyntax {
        /// Validator diagnostic.
        message: String,
    },

    /// The script repository could not be reached.
    #[error("script repository unavailable: {message}")]
    Unavailable {
        /// Backend diagnostic.
        message: String,
    },
}

impl OperationError {
    /// Creates an invalid arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Creates a script not found error.
    pub fn script_not_found(name: impl Into<String>) -> Self {
        Self::ScriptNotFound { name: name.into() }
    }

    /// Creates a duplicate script error.
    pub fn duplicate_script(name: impl Into<String>) -> Self {
        Self::DuplicateScript { name: name.into() }
    }

    /// Creates an active script error.
    pub fn script_active(name: impl Into<String>) -> Self {
        Self::ScriptActive { name: name.into() }
    }

    /// Creates a quota exceeded error.
    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::QuotaExceeded {
            message: message.into(),
        }
    }

    /// Creates an invalid syntax error.
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            message: message.into(),
        }
    }

    /// Creates a repository unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Returns the RFC 5804 response code for this failure, if one applies.
    #[must_use]
    pub const fn response_code(&self) -> Option<ResponseCode> {
        match self {
            Self::ScriptNotFound { .. } => Some(ResponseCode::Nonexistent),
            Self::DuplicateScript { .. } => Some(ResponseCode::AlreadyExists),
            Self::ScriptActive { .. } => Some(ResponseCode::Active),
            Self::QuotaExceeded { .. } => Some(ResponseCode::Quota),
            Self::Unavailable { .. } => Some(ResponseCode::TryLater),
            Self::NotAuthenticated | Self::InvalidArguments { .. } | Self::InvalidSyntax { .. } => {
                None
            }
        }
    }

    /// Renders the failure as a `NO` response line.
    #[must_use]
    pub fn response_line(&self) -> String {
        response::no(self.response_code(), &self.to_string())
    }
}
