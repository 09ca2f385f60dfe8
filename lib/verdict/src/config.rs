//! Settings for [`HyperClient`](crate::HyperClient) and
//! [`ApiClient::from_config`](crate::ApiClient::from_config).

use std::time::Duration;

use crate::LogLevel;

/// `User-Agent` sent when a request does not carry its own.
pub const DEFAULT_USER_AGENT: &str = concat!("verdict/", env!("CARGO_PKG_VERSION"));

/// Transport and failure-logging settings.
///
/// The timeout bounds the whole exchange, body included: a response is only
/// interpreted once it is fully buffered, so a slow body is a timeout, never a
/// partially read response.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for one exchange, from sending the request to the last body byte.
    pub timeout: Duration,
    /// Deadline for establishing the TCP connection.
    pub connect_timeout: Duration,
    /// Idle connections kept per API host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Which classified failures the [`TracingLogger`](crate::TracingLogger) reports.
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Silent,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder(Self::default())
    }
}

/// Builder for [`ClientConfig`]; unset values keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder(ClientConfig);

impl ClientConfigBuilder {
    /// Exchange deadline.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.0.timeout = timeout;
        self
    }

    /// TCP connect deadline.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.0.connect_timeout = timeout;
        self
    }

    /// Idle connections kept per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.0.pool_idle_per_host = count;
        self
    }

    /// Idle connection lifetime.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.0.pool_idle_timeout = timeout;
        self
    }

    /// `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.0.user_agent = user_agent.into();
        self
    }

    /// Failure log level.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.0.log_level = level;
        self
    }

    /// Finish the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.0
    }
}
