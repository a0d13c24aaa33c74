//! Drives one client connection through the dispatcher.
//!
//! [`LineSession`] reads request lines from a buffered reader, hands each one
//! to the [`CommandDispatcher`] and writes exactly one response line back
//! before reading the next request. Accepting sockets, TLS and timeouts are
//! left to whoever owns the transport; the driver only needs `BufRead` and
//! `Write`.

mod errors;
mod reader;

use std::io::{BufRead, Write};
use std::str;

use tracing::{debug, warn};

use managesieve_config::Config;

use crate::dispatch::{CommandDispatcher, ResponseWriter, response};
use crate::session::Session;

pub use self::errors::SessionError;
use self::reader::read_request_line;

/// Tracing target for session driver events.
pub(crate) const SESSION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::session");

const REQUEST_TOO_LARGE: &str = "request too large";
const REQUEST_NOT_UTF8: &str = "request is not valid UTF-8";

/// Request/response loop for a single connection.
#[derive(Debug, Clone)]
pub struct LineSession {
    dispatcher: CommandDispatcher,
    max_line_bytes: usize,
}

impl LineSession {
    /// Creates a driver that rejects request lines longer than
    /// `max_line_bytes`.
    #[must_use]
    pub const fn new(dispatcher: CommandDispatcher, max_line_bytes: usize) -> Self {
        Self {
            dispatcher,
            max_line_bytes,
        }
    }

    /// Creates a driver using the line limit from `config`.
    #[must_use]
    pub const fn from_config(dispatcher: CommandDispatcher, config: &Config) -> Self {
        Self::new(dispatcher, config.max_line_bytes())
    }

    /// Dispatcher requests are handed to.
    #[must_use]
    pub const fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Longest request line accepted, in bytes.
    #[must_use]
    pub const fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Serves requests until the reader reaches end of stream.
    ///
    /// Returns the number of responses written. Failed operations and
    /// non-UTF-8 requests are answered with a `NO` line and the session
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RequestTooLarge`] after answering an over-long
    /// line, and [`SessionError::Io`] when reading or writing fails.
    pub fn serve<R, W>(
        &self,
        reader: &mut R,
        writer: W,
        session: &mut Session,
    ) -> Result<usize, SessionError>
    where
        R: BufRead + ?Sized,
        W: Write,
    {
        let mut responses = ResponseWriter::new(writer);
        let mut served = 0_usize;
        loop {
            let line = match read_request_line(reader, self.max_line_bytes) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!(target: SESSION_TARGET, served, "client closed session");
                    return Ok(served);
                }
                Err(error @ SessionError::RequestTooLarge { .. }) => {
                    warn!(target: SESSION_TARGET, error = %error, "closing session");
                    responses.write_line(&response::no(None, REQUEST_TOO_LARGE))?;
                    return Err(error);
                }
                Err(error) => return Err(error),
            };

            responses.write_line(&self.respond(session, &line))?;
            served = served.saturating_add(1);
        }
    }

    fn respond(&self, session: &mut Session, line: &[u8]) -> String {
        let Ok(text) = str::from_utf8(line) else {
            warn!(
                target: SESSION_TARGET,
                bytes = line.len(),
                "rejecting non UTF-8 request"
            );
            return response::no(None, REQUEST_NOT_UTF8);
        };

        match self.dispatcher.dispatch(session, text) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(
                    target: SESSION_TARGET,
                    verb = error.verb().as_str(),
                    error = %error,
                    "command failed"
                );
                error.response_line()
            }
        }
    }
}
