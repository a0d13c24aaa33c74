//! Response line formatting.
//!
//! Script operations format their own success lines. This module owns the
//! lines the service produces itself: the canned replies for stub and unknown
//! verbs, and the `NO` lines the connection driver emits for failures.

use std::io::{self, Write};

use crate::operations::ResponseCode;

use super::verb::Verb;

/// Line terminator mandated by the protocol.
pub(crate) const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Reply for a recognised verb whose handling is not wired up yet.
#[must_use]
pub fn not_yet_implemented(verb: Verb) -> String {
    format!("NO {verb} command not yet implemented")
}

/// Reply for a recognised verb whose handling is deferred.
///
/// Only `UNAUTHENTICATE` uses this wording; existing clients match on it.
#[must_use]
pub fn not_yet_handled(verb: Verb) -> String {
    format!("NO {verb} command not yet handled")
}

/// Reply for a verb outside the known set, echoed exactly as received.
#[must_use]
pub fn unknown_command(verb: &str) -> String {
    format!("NO unknown {verb} command")
}

/// Builds a `NO` line with an optional response code and a quoted message.
#[must_use]
pub fn no(code: Option<ResponseCode>, message: &str) -> String {
    let quoted = quote(message);
    match code {
        Some(response_code) => format!("NO ({response_code}) {quoted}"),
        None => format!("NO {quoted}"),
    }
}

/// Renders text as a protocol quoted string.
///
/// Quoted strings cannot carry line breaks, so each run of CR and LF
/// characters is folded into a single space.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    let mut in_line_break = false;
    for character in text.chars() {
        if matches!(character, '\r' | '\n') {
            if !in_line_break {
                quoted.push(' ');
            }
            in_line_break = true;
            continue;
        }
        in_line_break = false;
        if matches!(character, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(character);
    }
    quoted.push('"');
    quoted
}

/// Writes response lines with protocol framing.
///
/// Every line is followed by CRLF and flushed immediately, so the client sees
/// exactly one response per request before it sends the next one.
pub struct ResponseWriter<W> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a new response writer wrapping the given output stream.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one response line and flushes the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(LINE_TERMINATOR)?;
        self.writer.flush()
    }
}
