//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict_core::prelude::*;
//! ```

pub use crate::{
    Error, Exchange, FailureLogger, HttpClient, InterpretedResponse, Method, Outcome, OutcomeKind,
    RawResponse, Request, Result, classify, detect_error, interpret,
};
