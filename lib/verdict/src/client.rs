//! HTTP transport using hyper-util and rustls.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::debug;

use crate::{ClientConfig, Error, HttpClient, RawResponse, Request, Result};

/// HTTP client using hyper-util with connection pooling and TLS.
///
/// Returns every response it receives as a [`RawResponse`], whatever the
/// status; only transport failures become errors.
///
/// # Example
///
/// ```ignore
/// use verdict::{ClientConfig, HyperClient};
/// use std::time::Duration;
///
/// let client = HyperClient::with_config(
///     ClientConfig::builder().timeout(Duration::from_secs(10)).build(),
/// );
/// ```
#[derive(Clone)]
pub struct HyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector(&config));

        Self { inner, config }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    // The configured user agent is added unless the request sets its own.
    fn build_hyper_request(
        request: Request,
        user_agent: &str,
    ) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = headers.iter().fold(
            http::Request::builder()
                .method(http::Method::from(method))
                .uri(url.as_str()),
            |builder, (name, value)| builder.header(name.as_str(), value.as_str()),
        );
        if !headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("user-agent"))
        {
            builder = builder.header(http::header::USER_AGENT, user_agent);
        }

        builder
            .body(body.map_or_else(Full::default, Full::new))
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    // Header values that are not visible ASCII are dropped.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        debug!(method = %request.method(), url = %request.url(), "sending request");
        let hyper_request = Self::build_hyper_request(request, &self.config.user_agent)?;

        let exchange = async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let headers = Self::extract_headers(response.headers());
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>(RawResponse::new(status, headers, body))
        };

        let response = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)??;

        debug!(status = response.status(), "response received");
        Ok(response)
    }
}

/// HTTPS connector over rustls with the Mozilla root certificates.
///
/// Plain `http` URLs are accepted too.
fn https_connector(config: &ClientConfig) -> HttpsConnector<HttpConnector> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(config.connect_timeout));

    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();
    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(http)
}
