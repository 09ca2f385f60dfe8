//! Interpretation of a completed exchange.
//!
//! [`interpret`] turns an [`Exchange`] into an [`InterpretedResponse`]: the
//! status code, the raw body, and, when the body is announced as JSON, the
//! parsed object and its conventional `data` payload.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use verdict_core::{RawResponse, interpret};
//!
//! let mut headers = HashMap::new();
//! headers.insert("content-type".to_string(), "application/json".to_string());
//! let raw = RawResponse::new(200, headers, r#"{"data":[{"id":1}]}"#);
//!
//! let response = interpret(&raw).expect("valid JSON");
//! assert!(response.is_parsed());
//! assert_eq!(response.data().map(<[_]>::len), Some(1));
//! ```

use serde_json::{Map, Value};

use crate::{Exchange, Result, reader};

/// Name of the top-level field carrying the payload of a successful response.
pub const DATA_FIELD: &str = "data";

/// The interpreted view of one exchange.
///
/// Built once by [`interpret`] and never modified afterwards. `X` is either the
/// exchange itself or a reference to it.
#[derive(Debug, Clone)]
pub struct InterpretedResponse<X> {
    status_code: u16,
    parsed: bool,
    result: Option<Map<String, Value>>,
    data: Option<Vec<Value>>,
    body: Option<String>,
    exchange: X,
}

impl<X> InterpretedResponse<X> {
    /// HTTP status code, `0` if it could not be determined.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The status line was never obtained.
    #[must_use]
    pub const fn is_status_unknown(&self) -> bool {
        self.status_code == 0
    }

    /// The body was decoded as a JSON object.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Parsed JSON object.
    #[must_use]
    pub const fn result(&self) -> Option<&Map<String, Value>> {
        self.result.as_ref()
    }

    /// Elements of the top-level `data` array.
    #[must_use]
    pub fn data(&self) -> Option<&[Value]> {
        self.data.as_deref()
    }

    /// Raw body as read, whether or not it parsed.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The originating exchange.
    #[must_use]
    pub const fn exchange(&self) -> &X {
        &self.exchange
    }

    /// Consume into the originating exchange.
    #[must_use]
    pub fn into_exchange(self) -> X {
        self.exchange
    }

    /// Deserialize the `data` array into typed values.
    ///
    /// Returns `None` when there is no `data` array.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Location { iata_code: String }
    ///
    /// let locations: Vec<Location> = response.data_as().transpose()?.unwrap_or_default();
    /// ```
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Option<Result<Vec<T>>> {
        self.data.as_ref().map(|data| {
            data.iter()
                .map(|item| {
                    T::deserialize(item)
                        .map_err(|e| crate::Error::json_deserialization(DATA_FIELD, e.to_string()))
                })
                .collect()
        })
    }

    /// Split off the pieces a failure report needs.
    pub(crate) fn into_failure(self) -> crate::ResponseFailure {
        crate::ResponseFailure::new(self.status_code, self.body, self.result)
    }
}

/// Interpret a completed exchange.
///
/// Reads the status code and body, parses the body when the content type is
/// exactly a JSON media type, and extracts the `data` array. Unreadable
/// statuses and bodies never fail here: they show up as status `0` and
/// `body() == None`.
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if the body is announced as
/// JSON but is not a valid JSON object.
pub fn interpret<X: Exchange>(exchange: X) -> Result<InterpretedResponse<X>> {
    let status_code = reader::read_status_code(&exchange);
    let body = reader::read_body(&exchange);

    let result = match &body {
        Some(body) if reader::has_json_content_type(&exchange) => {
            Some(crate::from_json::<Map<String, Value>>(body.as_bytes())?)
        }
        _ => None,
    };
    let data = result.as_ref().and_then(extract_data);

    Ok(InterpretedResponse {
        status_code,
        parsed: result.is_some(),
        result,
        data,
        body,
        exchange,
    })
}

// A missing or non-array `data` field means "no data".
fn extract_data(result: &Map<String, Value>) -> Option<Vec<Value>> {
    match result.get(DATA_FIELD) {
        Some(Value::Array(items)) => Some(items.clone()),
        _ => None,
    }
}
