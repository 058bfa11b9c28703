//! HTTP response types and response classification.
//!
//! Every completed response is passed through [`classify`], which decides
//! whether the call succeeded, should be retried, or failed for good.
//!
//! # Classification Rules
//!
//! | Status      | Body                        | Outcome                          |
//! |-------------|-----------------------------|----------------------------------|
//! | 2xx         | decodes as `T`              | [`ResponseOutcome::Success`]     |
//! | 2xx         | does not decode             | [`ResponseOutcome::Decode`]      |
//! | non-2xx     | non-empty, not an envelope  | [`ResponseOutcome::Decode`]      |
//! | 429         | empty or envelope           | [`ResponseOutcome::RateLimited`] |
//! | 503         | empty or envelope           | [`ResponseOutcome::Transient`]   |
//! | 406         | empty or envelope           | [`ResponseOutcome::Permanent`], message `Not Acceptable` |
//! | other       | empty or envelope           | [`ResponseOutcome::Permanent`]   |

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::errors::{RateLimitError, ResponseDecodingError, ResponseError};

/// Wait used for a throttled response that does not advertise one.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Longest wait honored for a throttled response.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(3600);

/// A successful, decoded response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse<T = serde_json::Value> {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body.
    pub body: T,
}

impl<T> HttpResponse<T> {
    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }
}

/// The error envelope returned by the partner API on failure.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorEnvelope {
    /// The platform's request ID.
    pub request_id: String,
    /// A human-readable detail message.
    pub msg: String,
    /// A non-fatal warning.
    pub warning: String,
    /// The error code string (e.g. `error_param`).
    pub error: String,
    /// Additional error strings.
    pub errors: Vec<String>,
}

/// The classification of one completed response.
#[derive(Debug)]
pub enum ResponseOutcome<T> {
    /// 2xx with a body that decoded as `T`.
    Success(HttpResponse<T>),
    /// A body that did not have the expected shape; terminal.
    Decode(ResponseDecodingError),
    /// Throttled; may be retried after the advertised wait.
    RateLimited(RateLimitError),
    /// 503; may be retried immediately.
    Transient(ResponseError),
    /// Any other failure; terminal.
    Permanent(ResponseError),
}

/// Classifies a completed response.
///
/// An empty 2xx body decodes as JSON `null`, so `T` may be `()`, an
/// `Option`, or [`serde_json::Value`] for calls that return nothing.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shopee_api::clients::{classify, ResponseOutcome};
///
/// let outcome = classify::<serde_json::Value>(406, HashMap::new(), br#"{"error":"x"}"#.to_vec());
/// match outcome {
///     ResponseOutcome::Permanent(e) => assert_eq!(e.to_string(), "Not Acceptable"),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn classify<T: DeserializeOwned>(
    code: u16,
    headers: HashMap<String, Vec<String>>,
    body: Vec<u8>,
) -> ResponseOutcome<T> {
    if (200..300).contains(&code) {
        let decoded = if body.is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&body)
        };
        return match decoded {
            Ok(value) => ResponseOutcome::Success(HttpResponse {
                code,
                headers,
                body: value,
            }),
            Err(e) => ResponseOutcome::Decode(ResponseDecodingError {
                code,
                body,
                message: e.to_string(),
            }),
        };
    }

    let envelope = if body.is_empty() {
        ErrorEnvelope::default()
    } else {
        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                return ResponseOutcome::Decode(ResponseDecodingError {
                    code,
                    body,
                    message: e.to_string(),
                })
            }
        }
    };

    let mut error = ResponseError {
        code,
        message: envelope.error,
        errors: envelope.errors,
        request_id: non_empty(envelope.request_id),
        warning: non_empty(envelope.warning),
    };

    match StatusCode::from_u16(code) {
        Ok(StatusCode::TOO_MANY_REQUESTS) => ResponseOutcome::RateLimited(RateLimitError {
            retry_after: retry_after(&headers),
            error,
        }),
        Ok(StatusCode::SERVICE_UNAVAILABLE) => ResponseOutcome::Transient(error),
        Ok(StatusCode::NOT_ACCEPTABLE) => {
            error.message = StatusCode::NOT_ACCEPTABLE
                .canonical_reason()
                .unwrap_or("Not Acceptable")
                .to_string();
            ResponseOutcome::Permanent(error)
        }
        _ => ResponseOutcome::Permanent(error),
    }
}

/// Parses the advertised wait from the `Retry-After` header.
///
/// Accepts delta-seconds (whole or fractional) and HTTP-dates. A date in the
/// past yields a zero wait. Waits longer than [`MAX_RETRY_AFTER`] are clamped
/// to it. A missing, negative or unparseable value yields
/// [`DEFAULT_RETRY_AFTER`].
#[must_use]
pub fn retry_after(headers: &HashMap<String, Vec<String>>) -> Duration {
    first_header(headers, "retry-after")
        .map(str::trim)
        .and_then(|value| delta_seconds(value).or_else(|| seconds_until(value)))
        .map_or(DEFAULT_RETRY_AFTER, |secs| {
            Duration::try_from_secs_f64(secs.min(MAX_RETRY_AFTER.as_secs_f64()))
                .unwrap_or(DEFAULT_RETRY_AFTER)
        })
}

fn delta_seconds(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

#[allow(clippy::cast_precision_loss)]
fn seconds_until(value: &str) -> Option<f64> {
    let date = DateTime::parse_from_rfc2822(value).ok()?;
    let millis = date
        .with_timezone(&Utc)
        .signed_duration_since(Utc::now())
        .num_milliseconds();
    Some(millis.max(0) as f64 / 1000.0)
}

/// Converts transport headers into a lower-case multi-map.
#[must_use]
pub fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(&name.to_lowercase())
        .and_then(|values| values.first())
        .map(String::as_str)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
