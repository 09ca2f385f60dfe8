//! Response interpretation and outcome classification for HTTP JSON APIs.
//!
//! This crate turns a completed HTTP exchange into either a parsed response or
//! a typed failure:
//! - [`Exchange`] - What a completed exchange exposes (status, headers, streams)
//! - [`RawResponse`] - Buffered exchange produced by transports
//! - [`reader`] - Fault-tolerant status/body/content-type extraction
//! - [`interpret`] and [`InterpretedResponse`] - Body parsing and `data` extraction
//! - [`classify`], [`Outcome`] and [`OutcomeKind`] - Status/parse classification
//! - [`detect_error`] and [`FailureLogger`] - Logged, typed failures
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`], [`Request`] and [`Method`] - Transport seam
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use verdict_core::{Error, NoopLogger, RawResponse, detect_error, interpret};
//!
//! let raw = RawResponse::new(503, HashMap::new(), "upstream timeout");
//! let response = interpret(&raw).expect("not announced as JSON");
//!
//! let err = detect_error(response, &NoopLogger).unwrap_err();
//! assert!(matches!(err, Error::Server(_)));
//! assert_eq!(err.body(), Some("upstream timeout"));
//! ```

mod body;
mod client;
mod error;
mod exchange;
mod log;
mod method;
mod outcome;
pub mod prelude;
pub mod reader;
mod request;
mod response;

pub use body::{MediaType, from_json};
pub use client::HttpClient;
pub use error::{Error, ResponseFailure, Result};
pub use exchange::{Exchange, RawResponse};
pub use log::{FailureLogger, NoopLogger};
pub use method::Method;
pub use outcome::{Outcome, OutcomeKind, classify, detect_error};
pub use request::{Request, RequestBuilder};
pub use response::{DATA_FIELD, InterpretedResponse, interpret};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
