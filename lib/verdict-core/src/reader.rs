//! Fault-tolerant extraction of status, body and content type from an
//! [`Exchange`].
//!
//! Nothing here fails: unreadable statuses become `0` and unreadable bodies
//! become `None`, so classification always gets to run.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::{Exchange, MediaType};

/// Read the status code, or `0` if it cannot be obtained.
pub fn read_status_code<X: Exchange + ?Sized>(exchange: &X) -> u16 {
    exchange.status_code().unwrap_or_else(|err| {
        debug!(error = %err, "status code unavailable");
        0
    })
}

/// Read the whole body as a string.
///
/// Falls back to the error stream when the body stream cannot be opened.
/// Lines are concatenated with their terminators (`\n`, `\r` or `\r\n`)
/// removed, so line boundaries of the original body are lost. Invalid UTF-8 is
/// replaced with `U+FFFD`. Returns `None` if no stream is available or an I/O
/// error interrupts reading.
pub fn read_body<X: Exchange + ?Sized>(exchange: &X) -> Option<String> {
    let stream = match exchange.body_stream() {
        Ok(stream) => stream,
        Err(err) => {
            debug!(error = %err, "body stream unavailable, reading error stream");
            let Some(stream) = exchange.error_stream() else {
                warn!("no body or error stream available");
                return None;
            };
            stream
        }
    };

    drain_lines(stream)
        .inspect_err(|err| warn!(error = %err, "failed to read response body"))
        .ok()
}

// The stream is consumed here and dropped once, whichever way the loop exits.
// Each line is decoded on its own, so a broken sequence never borrows bytes
// from the next line.
fn drain_lines(mut stream: Box<dyn BufRead + '_>) -> io::Result<String> {
    let mut body = String::new();
    let mut line = Vec::new();
    while stream.read_until(b'\n', &mut line)? > 0 {
        for segment in line.split(|&byte| byte == b'\n' || byte == b'\r') {
            body.push_str(&String::from_utf8_lossy(segment));
        }
        line.clear();
    }
    Ok(body)
}

/// Returns `true` if `Content-Type` is exactly one of [`MediaType::ALL`].
pub fn has_json_content_type<X: Exchange + ?Sized>(exchange: &X) -> bool {
    exchange
        .header("Content-Type")
        .and_then(MediaType::from_header)
        .is_some()
}
