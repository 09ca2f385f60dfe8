//! HTTP JSON API client that classifies every response.
//!
//! Each call ends in exactly one of: a parsed response, or a typed failure
//! ([`Error::Server`], [`Error::NotFound`], [`Error::Authentication`],
//! [`Error::Client`], [`Error::Parse`]) that has already been logged.
//!
//! # Example
//!
//! ```ignore
//! use verdict::prelude::*;
//!
//! let config = ClientConfig::builder().log_level(LogLevel::Warn).build();
//! let client = ApiClient::from_config("https://test.api.amadeus.com", config)?;
//!
//! match client.get("/v1/reference-data/airlines", &[("airlineCodes", "IB")]).await {
//!     Ok(response) => println!("{:?}", response.data()),
//!     Err(Error::NotFound(failure)) => println!("nothing at {}", failure.status()),
//!     Err(err) => return Err(err),
//! }
//! ```
//!
//! The interpretation pipeline itself lives in [`verdict_core`] and works on
//! any [`Exchange`].

mod api_client;
mod client;
mod config;
mod logging;
pub mod prelude;

pub use api_client::{ApiClient, ApiResponse};
pub use client::HyperClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT};
pub use logging::{LogLevel, TracingLogger};

// Re-export core types
pub use verdict_core::{
    DATA_FIELD, Error, Exchange, FailureLogger, HttpClient, InterpretedResponse, MediaType, Method,
    NoopLogger, Outcome, OutcomeKind, RawResponse, Request, RequestBuilder, ResponseFailure,
    Result, classify, detect_error, from_json, interpret, reader,
};

// Re-export http types for status codes and headers
pub use verdict_core::{StatusCode, header};

pub use url;
