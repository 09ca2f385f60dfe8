//! Transport trait.
//!
//! The interpretation pipeline does not care how bytes travel; it only needs
//! something that turns a [`Request`] into a buffered [`RawResponse`].

use std::future::Future;

use crate::{RawResponse, Request, Result};

/// Core HTTP client trait.
///
/// Implementations return every response they receive, whatever its status:
/// deciding what counts as a failure is the classifier's job.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid request
    fn execute(&self, request: Request) -> impl Future<Output = Result<RawResponse>> + Send;
}
