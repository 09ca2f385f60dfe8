//! Media types and JSON decoding.

use crate::Result;

/// Media types recognized as structured JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Standard JSON media type (`application/json`).
    Json,
    /// Vendor JSON media type (`application/vnd.amadeus+json`).
    VendorJson,
}

impl MediaType {
    /// Every structured media type, in lookup order.
    pub const ALL: [Self; 2] = [Self::Json, Self::VendorJson];

    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::VendorJson => "application/vnd.amadeus+json",
        }
    }

    /// Match a `Content-Type` header value against the allow-list.
    ///
    /// The comparison is exact: parameters such as `; charset=utf-8` make the
    /// value unrecognized.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|media| media.as_str() == value)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact path of the field
/// that failed to deserialize.
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if the bytes are not valid
/// JSON or do not match `T`.
///
/// # Example
///
/// ```
/// use verdict_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Location { iata: String }
///
/// let bytes = br#"{"iata":"MAD"}"#;
/// let location: Location = from_json(bytes).expect("deserialize");
/// assert_eq!(location, Location { iata: "MAD".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
