//! Bounded request line reads.

use std::io::{self, BufRead};

use super::errors::SessionError;

/// Reads one request line without its terminator.
///
/// Returns `Ok(None)` at end of stream when nothing is buffered. A final line
/// without `\n` is still returned. A trailing `\r` is stripped.
pub(super) fn read_request_line<R: BufRead + ?Sized>(
    reader: &mut R,
    max_line_bytes: usize,
) -> Result<Option<Vec<u8>>, SessionError> {
    let mut line = Vec::new();
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error.into()),
        };

        if available.is_empty() {
            return Ok(if line.is_empty() {
                None
            } else {
                Some(strip_carriage_return(line))
            });
        }

        let (consumed, complete) = match available.iter().position(|byte| *byte == b'\n') {
            Some(position) => {
                let (head, _) = available.split_at(position);
                line.extend_from_slice(head);
                (position.saturating_add(1), true)
            }
            None => {
                line.extend_from_slice(available);
                (available.len(), false)
            }
        };
        reader.consume(consumed);
        enforce_line_limit(line.len(), max_line_bytes)?;

        if complete {
            return Ok(Some(strip_carriage_return(line)));
        }
    }
}

fn enforce_line_limit(size: usize, max_line_bytes: usize) -> Result<(), SessionError> {
    if size > max_line_bytes {
        return Err(SessionError::request_too_large(size, max_line_bytes));
    }
    Ok(())
}

fn strip_carriage_return(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}
