//! HTTP-specific error types for the Shopee API SDK.
//!
//! The SDK classifies every failed call into one of a small set of kinds:
//!
//! - [`ResponseError`]: A non-2xx API response; permanent unless the status is 503
//! - [`RateLimitError`]: The platform throttled the call and advertised a wait
//! - [`ResponseDecodingError`]: A response body did not have the expected shape
//! - [`InvalidHttpRequestError`]: The request could not be built; nothing was sent
//! - [`HttpError`]: Unified error type encompassing all of the above plus
//!   transport failures and cancellation
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::clients::HttpError;
//!
//! match client.post::<serde_json::Value>("shop/get", body).await {
//!     Ok(response) => println!("Shop: {}", response.body),
//!     Err(HttpError::RateLimited(e)) => println!("Throttled, wait {:?}", e.retry_after),
//!     Err(HttpError::Transient(e)) => println!("Service unavailable: {e}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {e}", e.code),
//!     Err(HttpError::Decode(e)) => println!("Unexpected body: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Cancelled) => println!("Cancelled"),
//! }
//! ```

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Message used when an error response carries neither a message nor sub-errors.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Error returned when an API call receives a non-successful response.
///
/// The rendered message (its `Display` output) prefers the single `message`
/// field, then the sub-errors sorted lexicographically and joined with `", "`,
/// then [`UNKNOWN_ERROR_MESSAGE`].
///
/// # Example
///
/// ```rust
/// use shopee_api::clients::ResponseError;
///
/// let error = ResponseError {
///     code: 400,
///     message: String::new(),
///     errors: vec!["b".to_string(), "a".to_string()],
///     request_id: None,
///     warning: None,
/// };
///
/// assert_eq!(error.to_string(), "a, b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The primary error message (the envelope's `error` field).
    pub message: String,
    /// Additional error strings reported by the platform.
    pub errors: Vec<String>,
    /// The platform's request ID, useful when reporting problems.
    pub request_id: Option<String>,
    /// A non-fatal warning returned alongside the error.
    pub warning: Option<String>,
}

impl ResponseError {
    /// Returns the message shown to users.
    #[must_use]
    pub fn rendered_message(&self) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }

        let mut errors = self.errors.clone();
        errors.sort();
        let joined = errors.join(", ");
        if joined.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            joined
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_message())
    }
}

impl std::error::Error for ResponseError {}

/// Error returned when the platform throttles a call.
///
/// `retry_after` is the wait the platform advertised before the call may be
/// attempted again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} (rate limited, retry after {}s)", .retry_after.as_secs_f64())]
pub struct RateLimitError {
    /// The underlying response error.
    pub error: ResponseError,
    /// How long to wait before retrying.
    pub retry_after: Duration,
}

/// Error returned when a response body could not be parsed.
///
/// This takes precedence over the HTTP status: an error response whose
/// non-empty body is not a valid error envelope is reported as a decoding
/// error, not as the HTTP error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to decode response with status {code}: {message}")]
pub struct ResponseDecodingError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: Vec<u8>,
    /// The decoder's error message.
    pub message: String,
}

impl ResponseDecodingError {
    /// Returns the raw body as (lossy) UTF-8 text.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Error returned when a request cannot be built.
///
/// Nothing is sent and the request is never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The relative path could not be resolved against the base URL.
    #[error("Invalid request path '{path}': {reason}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
        /// Why resolution failed.
        reason: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {reason}")]
    Serialization {
        /// The serializer's error message.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response that is never retried.
    #[error(transparent)]
    Response(ResponseError),

    /// A 503 response; retried immediately while the budget allows.
    #[error("Service unavailable: {0}")]
    Transient(ResponseError),

    /// A throttled response; retried after the advertised wait while the
    /// budget allows.
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] ResponseDecodingError),

    /// The request could not be built.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call was cancelled by the caller.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) | Self::Transient(e) => Some(e.code),
            Self::RateLimited(e) => Some(e.error.code),
            Self::Decode(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Cancelled => None,
        }
    }
}
