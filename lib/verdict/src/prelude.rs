//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict::prelude::*;
//! ```

pub use crate::{
    ApiClient, ApiResponse, ClientConfig, Error, FailureLogger, HttpClient, HyperClient,
    InterpretedResponse, LogLevel, Method, Outcome, OutcomeKind, Request, Result, TracingLogger,
};
