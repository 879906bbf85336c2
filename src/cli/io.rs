//! Line-oriented request I/O
//!
//! - Input: one JSON request per line
//! - Output: one JSON response per line
//! - Blank lines are skipped
//! - A line that is not UTF-8 gets an error response; serving continues

use std::io::{BufRead, Write};

use crate::observability::{log_event_with_fields, Event};
use crate::protocol::{ProtocolError, Response, StoreResponder};

use super::errors::CliResult;

/// Answers every request line from `input` on `output`.
///
/// Returns the number of requests handled.
pub fn serve_lines<R, W, S>(responder: &S, mut input: R, mut output: W) -> CliResult<u64>
where
    R: BufRead,
    W: Write,
    S: StoreResponder + ?Sized,
{
    let mut handled = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => responder.respond(line.trim_end()),
            Err(e) => undecodable_line(&e),
        };
        writeln!(output, "{}", response.to_json())?;
        output.flush()?;
        handled += 1;
    }
    Ok(handled)
}

fn undecodable_line(err: &std::str::Utf8Error) -> Response {
    let err = ProtocolError::invalid_request(format!("Request is not valid UTF-8: {}", err));
    log_event_with_fields(
        Event::RequestFailed,
        &[("code", err.code()), ("message", err.message())],
    );
    Response::error(&err)
}
