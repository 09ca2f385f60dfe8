//! HTTP methods used against the API.

use derive_more::Display;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method.
    #[display("GET")]
    Get,
    /// POST method.
    #[display("POST")]
    Post,
    /// DELETE method.
    #[display("DELETE")]
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}
