//! Error types for the line session driver.

use std::io;

use thiserror::Error;

/// Errors that end a line session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading a request or writing a response failed.
    #[error("session I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A request line exceeded the configured limit.
    #[error("request of at least {size} bytes exceeds the {max_size} byte limit")]
    RequestTooLarge {
        /// Bytes buffered when the limit was hit.
        size: usize,
        /// Configured limit.
        max_size: usize,
    },
}

impl SessionError {
    pub(crate) const fn request_too_large(size: usize, max_size: usize) -> Self {
        Self::RequestTooLarge { size, max_size }
    }
}
