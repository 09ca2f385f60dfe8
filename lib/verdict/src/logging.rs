//! Failure logging through `tracing`.

use std::str::FromStr;

use derive_more::Display;
use tracing::{debug, warn};

use crate::{Error, FailureLogger};

/// How much a [`TracingLogger`] reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum LogLevel {
    /// Log nothing.
    #[default]
    #[display("silent")]
    Silent,
    /// Log each failure as a warning.
    #[display("warn")]
    Warn,
    /// Log each failure as a warning, plus its raw body at debug level.
    #[display("debug")]
    Debug,
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "warn" => Ok(Self::Warn),
            "debug" => Ok(Self::Debug),
            other => Err(Error::invalid_config(format!(
                "unknown log level '{other}', expected silent, warn or debug"
            ))),
        }
    }
}

/// [`FailureLogger`] that emits `tracing` events.
///
/// # Example
///
/// ```ignore
/// use verdict::{ApiClient, HyperClient, LogLevel, TracingLogger};
///
/// let client = ApiClient::new(HyperClient::new(), "https://test.api.amadeus.com")?
///     .with_logger(TracingLogger::new(LogLevel::Warn));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    /// Create a logger reporting at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl FailureLogger for TracingLogger {
    fn log(&self, error: &Error) {
        if self.level == LogLevel::Silent {
            return;
        }

        warn!(
            code = error.code(),
            status = ?error.status(),
            description = %error.description().unwrap_or_default(),
            "API request failed"
        );

        if self.level == LogLevel::Debug {
            debug!(code = error.code(), body = ?error.body(), "failed response body");
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use verdict_core::ResponseFailure;

    use super::*;

    #[test]
    fn log_level_parse() {
        check!("silent".parse::<LogLevel>().expect("silent") == LogLevel::Silent);
        check!("WARN".parse::<LogLevel>().expect("warn") == LogLevel::Warn);
        check!(" debug ".parse::<LogLevel>().expect("debug") == LogLevel::Debug);
    }

    #[test]
    fn log_level_parse_unknown() {
        let err = "verbose".parse::<LogLevel>().expect_err("unknown level");
        check!(err.code() == "ConfigurationError");
        check!(err.to_string().contains("verbose"));
    }

    #[test]
    fn log_level_display() {
        check!(LogLevel::Warn.to_string() == "warn");
        check!(LogLevel::default() == LogLevel::Silent);
    }

    #[test]
    fn tracing_logger_accepts_every_level() {
        let error = Error::Server(ResponseFailure::new(500, Some("boom".to_string()), None));

        for level in [LogLevel::Silent, LogLevel::Warn, LogLevel::Debug] {
            let logger = TracingLogger::new(level);
            check!(logger.level() == level);
            logger.log(&error);
        }
    }
}
