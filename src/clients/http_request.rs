//! HTTP request types for the Shopee API SDK.
//!
//! This module provides two layers of request:
//!
//! - [`HttpRequest`]: the logical call (method, relative path, body fields,
//!   query options) built by resource code with [`HttpRequest::builder`]
//! - [`OutboundRequest`]: one signed, ready-to-send attempt with its resolved
//!   URL, serialized body and headers
//!
//! A logical request is turned into a fresh outbound request for every
//! attempt, so each attempt carries its own timestamp and signature.

use std::collections::HashMap;
use std::fmt;

use reqwest::Url;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::signature::compute_signature;
use crate::clients::errors::InvalidHttpRequestError;

/// Body field holding the partner ID.
pub const PARTNER_ID_FIELD: &str = "partner_id";

/// Body field holding the request's Unix timestamp in seconds.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// HTTP methods supported by the Shopee API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub(crate) const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical call to the Shopee API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use shopee_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "items/get")
///     .json_body(&json!({"shopid": 220_006_999, "pagination_offset": 0}))
///     .query_param("lang", "en")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "items/get");
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the configured path prefix.
    pub path: String,
    /// Body fields; `partner_id` and `timestamp` are added when sent.
    pub body: Option<Map<String, Value>>,
    /// Query options merged into the URL query string.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Result<Option<Map<String, Value>>, InvalidHttpRequestError>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: Ok(None),
            query: Vec::new(),
        }
    }

    /// Sets the body fields.
    #[must_use]
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Ok(Some(body));
        self
    }

    /// Sets the body from any value that serializes to a JSON object.
    ///
    /// Serialization failures, and values that are not objects, are reported
    /// by [`build`](Self::build).
    #[must_use]
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = to_body_map(body).map(Some);
        self
    }

    /// Adds a single query option.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds several query options.
    #[must_use]
    pub fn query<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::Serialization`] if the body given to
    /// [`json_body`](Self::json_body) could not be turned into a JSON object.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        Ok(HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body?,
            query: self.query,
        })
    }
}

/// Serializes `value` into a JSON object map.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::Serialization`] if serialization fails
/// or the value is not a JSON object.
pub fn to_body_map<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Map<String, Value>, InvalidHttpRequestError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(InvalidHttpRequestError::Serialization {
            reason: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(InvalidHttpRequestError::Serialization {
            reason: e.to_string(),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolves a relative request path into the final request URL.
///
/// A leading `/` on `path` is stripped, the path is joined under `prefix`
/// and resolved against `base` with standard URL reference resolution.
/// When `query` is non-empty it is merged with any query already present on
/// `path`: both sets are kept, duplicates included, and the result is encoded
/// sorted by key.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidPath`] if the joined path cannot
/// be resolved.
///
/// # Example
///
/// ```rust
/// use reqwest::Url;
/// use shopee_api::clients::resolve_url;
///
/// let base = Url::parse("https://partner.shopeemobile.com").unwrap();
/// let a = resolve_url(&base, "api/v1", "/items/get", &[]).unwrap();
/// let b = resolve_url(&base, "api/v1", "items/get", &[]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "https://partner.shopeemobile.com/api/v1/items/get");
/// ```
pub fn resolve_url(
    base: &Url,
    prefix: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<Url, InvalidHttpRequestError> {
    let relative = path.trim_start_matches('/');
    let prefix = prefix.trim_matches('/');
    let joined = match (prefix.is_empty(), relative.is_empty()) {
        (true, _) => relative.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}/{relative}"),
    };

    let mut url = base
        .join(&joined)
        .map_err(|e| InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    if !query.is_empty() {
        let mut pairs = query.to_vec();
        pairs.extend(url.query_pairs().into_owned());
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}

/// Returns a copy of `body` with `partner_id` and `timestamp` set.
///
/// An absent body starts out as an empty object. Existing values for the two
/// fields are overwritten.
#[must_use]
pub fn inject_auth_fields(
    body: Option<&Map<String, Value>>,
    partner_id: u64,
    timestamp: i64,
) -> Map<String, Value> {
    let mut fields = body.cloned().unwrap_or_default();
    fields.insert(PARTNER_ID_FIELD.to_string(), Value::from(partner_id));
    fields.insert(TIMESTAMP_FIELD.to_string(), Value::from(timestamp));
    fields
}

/// One signed attempt, ready to hand to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The fully resolved URL, query included.
    pub url: Url,
    /// The serialized body; empty when there is no body.
    pub body: Vec<u8>,
    /// Request headers, `Authorization` included.
    pub headers: HashMap<String, String>,
}

impl OutboundRequest {
    /// Serializes `body`, signs it together with `url` and attaches the
    /// standard headers.
    ///
    /// `None` serializes to an empty byte sequence (not `null`). JSON object
    /// keys are emitted in sorted order, so equal bodies always serialize to
    /// equal bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::Serialization`] if the body cannot
    /// be serialized.
    pub fn new(
        method: HttpMethod,
        url: Url,
        body: Option<&Value>,
        secret: &str,
        user_agent: &str,
    ) -> Result<Self, InvalidHttpRequestError> {
        let body = match body {
            Some(value) => {
                serde_json::to_vec(value).map_err(|e| InvalidHttpRequestError::Serialization {
                    reason: e.to_string(),
                })?
            }
            None => Vec::new(),
        };

        let signature = compute_signature(url.as_str(), &body, secret);

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), user_agent.to_string());
        headers.insert("Authorization".to_string(), signature);

        Ok(Self {
            method,
            url,
            body,
            headers,
        })
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.headers.get("Authorization").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signature::verify_signature;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://partner.shopeemobile.com").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "shop/get")
            .build()
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_json_body_must_be_object() {
        let result = HttpRequest::builder(HttpMethod::Post, "items/get")
            .json_body(&json!([1, 2, 3]))
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::Serialization { reason }) if reason.contains("an array")
        ));
    }

    #[test]
    fn test_leading_slash_is_normalized() {
        let a = resolve_url(&base(), "api/v1", "/items/get", &[]).unwrap();
        let b = resolve_url(&base(), "api/v1", "items/get", &[]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "https://partner.shopeemobile.com/api/v1/items/get");
    }

    #[test]
    fn test_base_path_is_kept_when_it_ends_with_slash() {
        let base = Url::parse("https://proxy.example.com/shopee/").unwrap();
        let url = resolve_url(&base, "api/v1", "shop/get", &[]).unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com/shopee/api/v1/shop/get");
    }

    #[test]
    fn test_existing_query_kept_without_options() {
        let url = resolve_url(&base(), "api/v1", "items/get?b=2&a=1", &[]).unwrap();
        assert_eq!(url.query(), Some("b=2&a=1"));
    }

    #[test]
    fn test_query_options_merge_with_existing_query() {
        let options = vec![
            ("lang".to_string(), "en".to_string()),
            ("a".to_string(), "9".to_string()),
        ];
        let url = resolve_url(&base(), "api/v1", "items/get?a=1&z=0", &options).unwrap();
        assert_eq!(url.query(), Some("a=9&a=1&lang=en&z=0"));
    }

    #[test]
    fn test_inject_auth_fields() {
        let mut body = Map::new();
        body.insert("shopid".to_string(), json!(7));
        body.insert("timestamp".to_string(), json!(1));

        let fields = inject_auth_fields(Some(&body), 845_053, 1_600_000_000);
        assert_eq!(fields["partner_id"], json!(845_053));
        assert_eq!(fields["timestamp"], json!(1_600_000_000));
        assert_eq!(fields["shopid"], json!(7));

        let empty = inject_auth_fields(None, 1, 2);
        assert_eq!(empty.len(), 2);
    }

    #[test]
    fn test_outbound_request_signs_url_and_body() {
        let url = resolve_url(&base(), "api/v1", "shop/get", &[]).unwrap();
        let body = json!({"partner_id": 1, "shopid": 2, "timestamp": 3});
        let request =
            OutboundRequest::new(HttpMethod::Post, url.clone(), Some(&body), "secret", "ua/1")
                .unwrap();

        assert_eq!(request.body, br#"{"partner_id":1,"shopid":2,"timestamp":3}"#.to_vec());
        assert!(verify_signature(
            url.as_str(),
            &request.body,
            "secret",
            request.signature().unwrap()
        ));
        assert_eq!(request.headers["Content-Type"], "application/json");
        assert_eq!(request.headers["Accept"], "application/json");
        assert_eq!(request.headers["User-Agent"], "ua/1");
    }

    #[test]
    fn test_outbound_request_without_body_is_empty() {
        let url = resolve_url(&base(), "api/v1", "shop/get", &[]).unwrap();
        let request =
            OutboundRequest::new(HttpMethod::Get, url.clone(), None, "secret", "ua/1").unwrap();
        assert!(request.body.is_empty());
        assert!(verify_signature(
            url.as_str(),
            b"",
            "secret",
            request.signature().unwrap()
        ));
    }
}
