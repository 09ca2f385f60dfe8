//! Completed HTTP exchanges.
//!
//! [`Exchange`] is what the interpretation pipeline reads from: a status code,
//! headers, and a body that may have to be fetched from a separate error
//! channel. [`RawResponse`] is the buffered implementation produced by
//! transports.

use std::collections::HashMap;
use std::io::{self, BufRead};

use bytes::Bytes;

/// A completed request/response pair, as exposed by a transport.
///
/// Every accessor may fail or come back empty: the pipeline degrades to
/// sentinel values instead of propagating these failures.
pub trait Exchange {
    /// HTTP status code of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the status line could not be obtained.
    fn status_code(&self) -> io::Result<u16>;

    /// Single header value by name. Lookup is case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;

    /// The response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body channel is unavailable; the body may then
    /// still be reachable through [`Exchange::error_stream`].
    fn body_stream(&self) -> io::Result<Box<dyn BufRead + '_>>;

    /// Diagnostic body carried on unsuccessful responses.
    fn error_stream(&self) -> Option<Box<dyn BufRead + '_>>;
}

impl<T: Exchange + ?Sized> Exchange for &T {
    fn status_code(&self) -> io::Result<u16> {
        (**self).status_code()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn body_stream(&self) -> io::Result<Box<dyn BufRead + '_>> {
        (**self).body_stream()
    }

    fn error_stream(&self) -> Option<Box<dyn BufRead + '_>> {
        (**self).error_stream()
    }
}

// ============================================================================
// Buffered Exchange
// ============================================================================

/// Buffered HTTP response with status, headers, and body.
///
/// Follows the usual connection semantics: for statuses `>= 400` the body is
/// only available through the error stream.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl RawResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx or 5xx.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }
}

impl Exchange for RawResponse {
    fn status_code(&self) -> io::Result<u16> {
        Ok(self.status)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn body_stream(&self) -> io::Result<Box<dyn BufRead + '_>> {
        if self.is_error() {
            return Err(io::Error::other(format!(
                "server returned HTTP {}",
                self.status
            )));
        }
        Ok(Box::new(&self.body[..]))
    }

    fn error_stream(&self) -> Option<Box<dyn BufRead + '_>> {
        Some(Box::new(&self.body[..]))
    }
}
