//! API client: transport, interpretation and classification in one call.
//!
//! [`ApiClient`] sends a request through any [`HttpClient`], interprets the
//! response, and either returns it or returns the classified failure after
//! handing it to the configured [`FailureLogger`].

use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use crate::{
    ClientConfig, Error, FailureLogger, HttpClient, HyperClient, InterpretedResponse, MediaType,
    Method, RawResponse, Request, Result, TracingLogger, detect_error, interpret,
};

/// Response returned by [`ApiClient`] calls.
pub type ApiResponse = InterpretedResponse<RawResponse>;

/// API client bound to a base URL.
///
/// # Example
///
/// ```ignore
/// use verdict::{ApiClient, ClientConfig, LogLevel};
///
/// let config = ClientConfig::builder().log_level(LogLevel::Warn).build();
/// let client = ApiClient::from_config("https://test.api.amadeus.com", config)?;
///
/// let response = client
///     .get("/v1/reference-data/locations", &[("keyword", "MAD"), ("subType", "AIRPORT")])
///     .await?;
/// for location in response.data().unwrap_or_default() {
///     println!("{location}");
/// }
/// ```
pub struct ApiClient<C = HyperClient> {
    client: C,
    base_url: Url,
    logger: Arc<dyn FailureLogger>,
}

impl<C: Clone> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for ApiClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client", &self.client)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient<HyperClient> {
    /// Create a hyper-backed client from a configuration.
    ///
    /// Failures are logged through a [`TracingLogger`] at the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn from_config(base_url: impl AsRef<str>, config: ClientConfig) -> Result<Self> {
        let logger = TracingLogger::new(config.log_level);
        Ok(Self::new(HyperClient::with_config(config), base_url)?.with_logger(logger))
    }
}

impl<C> ApiClient<C> {
    /// Create a new API client with the given base URL.
    ///
    /// Failures are logged with a silent [`TracingLogger`] until
    /// [`ApiClient::with_logger`] replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?,
            logger: Arc::new(TracingLogger::default()),
        })
    }

    /// Replace the failure logger.
    #[must_use]
    pub fn with_logger(mut self, logger: impl FailureLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Base URL that request paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.client
    }

    /// Resolve `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    fn request(&self, method: Method, path: &str) -> Result<crate::RequestBuilder> {
        let accept = format!("{}, {}", MediaType::Json, MediaType::VendorJson);
        Ok(Request::builder(method, self.url(path)?).header("Accept", accept))
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Execute a request and classify its response.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, if a body announced as JSON is
    /// malformed, or if the response classifies as a failure. Classified
    /// failures are logged before being returned.
    pub async fn fetch(&self, request: Request) -> Result<ApiResponse> {
        let raw = self.client.execute(request).await?;
        let response = interpret(raw)?;
        detect_error(response, self.logger.as_ref())
    }

    /// GET `path` with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let request = query
            .iter()
            .fold(self.request(Method::Get, path)?, |builder, (name, value)| {
                builder.query(name, value)
            })
            .build();
        self.fetch(request).await
    }

    /// POST an already encoded JSON body to `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn post(&self, path: &str, body: impl Into<Bytes>) -> Result<ApiResponse> {
        let request = self
            .request(Method::Post, path)?
            .header("Content-Type", MediaType::Json.as_str())
            .body(body)
            .build();
        self.fetch(request).await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let request = self.request(Method::Delete, path)?.build();
        self.fetch(request).await
    }
}
