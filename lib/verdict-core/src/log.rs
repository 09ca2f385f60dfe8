//! Logging collaborator for classified failures.

use crate::Error;

/// Receives every classified failure before it is returned to the caller.
///
/// Logging is infallible: a logger has no way to replace or hide the failure
/// it is given.
///
/// Any `Fn(&Error) + Send + Sync` closure is a logger.
pub trait FailureLogger: Send + Sync {
    /// Record a failure.
    fn log(&self, error: &Error);
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl FailureLogger for NoopLogger {
    fn log(&self, _error: &Error) {}
}

impl<F> FailureLogger for F
where
    F: Fn(&Error) + Send + Sync,
{
    fn log(&self, error: &Error) {
        self(error);
    }
}
