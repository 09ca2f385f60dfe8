//! Error types for verdict.
//!
//! Classified response failures ([`Error::Server`], [`Error::NotFound`],
//! [`Error::Authentication`], [`Error::Client`], [`Error::Parse`]) carry the
//! [`ResponseFailure`] that produced them. The remaining variants come from the
//! transport or from a body that claims to be JSON but is not.

use std::fmt;

use derive_more::{Display, Error, From};
use serde_json::{Map, Value};

// ============================================================================
// Response Failure
// ============================================================================

/// What a failed response looked like: status, raw body and parsed result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFailure {
    status: u16,
    body: Option<String>,
    result: Option<Map<String, Value>>,
}

impl ResponseFailure {
    /// Creates a new failure record.
    #[must_use]
    pub fn new(status: u16, body: Option<String>, result: Option<Map<String, Value>>) -> Self {
        Self {
            status,
            body,
            result,
        }
    }

    /// HTTP status code, `0` when it could not be read.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Raw body, if it could be read.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Parsed JSON object, if the body was structured.
    #[must_use]
    pub const fn result(&self) -> Option<&Map<String, Value>> {
        self.result.as_ref()
    }

    /// Human-readable description extracted from the parsed result.
    ///
    /// Combines the `error_description` field and every entry of the `errors`
    /// array, one per line. Entries render as `[parameter] detail`, using
    /// `title` when there is no `detail`.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        let result = self.result.as_ref()?;

        let mut lines = Vec::new();
        if let Some(text) = result.get("error_description").and_then(Value::as_str) {
            lines.push(text.to_string());
        }
        if let Some(errors) = result.get("errors").and_then(Value::as_array) {
            lines.extend(errors.iter().filter_map(describe_entry));
        }

        (!lines.is_empty()).then(|| lines.join("\n"))
    }
}

fn describe_entry(entry: &Value) -> Option<String> {
    let text = entry
        .get("detail")
        .or_else(|| entry.get("title"))
        .and_then(Value::as_str)?;

    match entry.pointer("/source/parameter").and_then(Value::as_str) {
        Some(parameter) => Some(format!("[{parameter}] {text}")),
        None => Some(text.to_string()),
    }
}

impl fmt::Display for ResponseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.status)?;
        if let Some(description) = self.description() {
            write!(f, " {description}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for verdict operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The server answered with a 5xx status.
    #[display("server error {_0}")]
    #[from(skip)]
    Server(#[error(not(source))] ResponseFailure),

    /// The server answered with 404.
    #[display("resource not found {_0}")]
    #[from(skip)]
    NotFound(#[error(not(source))] ResponseFailure),

    /// The server answered with 401.
    #[display("authentication failed {_0}")]
    #[from(skip)]
    Authentication(#[error(not(source))] ResponseFailure),

    /// The server answered with any other 4xx status.
    #[display("client error {_0}")]
    #[from(skip)]
    Client(#[error(not(source))] ResponseFailure),

    /// The status looked fine but the body was absent or not structured.
    #[display("unparsable response {_0}")]
    #[from(skip)]
    Parse(#[error(not(source))] ResponseFailure),

    /// The body was announced as JSON but could not be decoded.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "data[0].id").
        path: String,
        /// Error message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Invalid client configuration.
    #[display("invalid configuration: {_0}")]
    #[from(skip)]
    InvalidConfig(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Stable name of the failure kind, suitable for log fields.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Server(_) => "ServerError",
            Self::NotFound(_) => "NotFoundError",
            Self::Authentication(_) => "AuthenticationError",
            Self::Client(_) => "ClientError",
            Self::Parse(_) => "ParserError",
            Self::JsonDeserialization { .. } => "DeserializationError",
            Self::Connection(_) | Self::Tls(_) | Self::Timeout => "NetworkError",
            Self::InvalidRequest(_) | Self::InvalidUrl(_) => "InvalidRequestError",
            Self::InvalidConfig(_) => "ConfigurationError",
        }
    }

    /// The response behind a classified failure.
    #[must_use]
    pub const fn failure(&self) -> Option<&ResponseFailure> {
        match self {
            Self::Server(failure)
            | Self::NotFound(failure)
            | Self::Authentication(failure)
            | Self::Client(failure)
            | Self::Parse(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a classified failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.failure() {
            Some(failure) => Some(failure.status),
            None => None,
        }
    }

    /// Returns the raw response body of a classified failure.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.failure().and_then(ResponseFailure::body)
    }

    /// Returns the parsed JSON object of a classified failure.
    #[must_use]
    pub fn result(&self) -> Option<&Map<String, Value>> {
        self.failure().and_then(ResponseFailure::result)
    }

    /// Description extracted from the failed response, if any.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.failure().and_then(ResponseFailure::description)
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is a 5xx failure.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Returns `true` if this is a 4xx failure, including 401 and 404.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Authentication(_) | Self::Client(_)
        )
    }

    /// Returns `true` if this is a 404 failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Try to decode the failed response body as JSON.
    ///
    /// Returns `None` if there is no body or this is not a classified failure.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ApiErrors {
    ///     errors: Vec<ApiError>,
    /// }
    ///
    /// if let Err(err) = client.get("/v1/shopping/flight-offers", &[]).await {
    ///     if let Some(Ok(api)) = err.decode_body::<ApiErrors>() {
    ///         println!("{} errors", api.errors.len());
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body.as_bytes()))
    }
}
