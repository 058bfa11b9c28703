//! HTTP client for Shopee partner API communication.
//!
//! This module provides the [`HttpClient`] type, which signs every request,
//! drives it through the retry loop and classifies the response.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use reqwest::Url;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{
    inject_auth_fields, resolve_url, HttpMethod, HttpRequest, OutboundRequest,
};
use crate::clients::http_response::{classify, collect_headers, HttpResponse, ResponseOutcome};
use crate::clients::retry::{execute, TokioSleeper};
use crate::clients::timestamp::TimestampClock;
use crate::config::{PartnerId, PartnerKey, ShopeeConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making signed requests to the Shopee partner API.
///
/// The client handles:
/// - URL construction from the configured base URL and path prefix
/// - Injection of `partner_id` and a fresh `timestamp` into every body
/// - HMAC-SHA256 signing into the `Authorization` header
/// - Automatic retries for 429 (after `Retry-After`) and 503 (immediately)
/// - Response classification into typed errors
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// Concurrent calls share only the configuration, the connection pool and
/// the timestamp counter.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::{HttpClient, ShopeeConfig, PartnerId, PartnerKey};
/// use serde_json::{json, Value};
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(845_053).unwrap())
///     .partner_key(PartnerKey::new("partner-key").unwrap())
///     .retries(3)
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let response = client
///     .post::<Value, _>("shop/get", &json!({ "shopid": 220_006_999 }))
///     .await?;
/// println!("Shop: {}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    partner_id: PartnerId,
    partner_key: PartnerKey,
    base_url: Url,
    path_prefix: String,
    retries: u32,
    user_agent: String,
    clock: TimestampClock,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopee_api::{ShopeeConfig, PartnerId, PartnerKey};
    /// use shopee_api::clients::HttpClient;
    ///
    /// let config = ShopeeConfig::builder()
    ///     .partner_id(PartnerId::new(845_053).unwrap())
    ///     .partner_key(PartnerKey::new("partner-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert!(client.user_agent().starts_with("shopee-api-rust/"));
    /// ```
    pub fn new(config: &ShopeeConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}shopee-api-rust/{SDK_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            partner_id: config.partner_id(),
            partner_key: config.partner_key().clone(),
            base_url: config.api_url().url().clone(),
            path_prefix: config.path_prefix().to_string(),
            retries: config.retries(),
            user_agent,
            clock: TimestampClock::new(),
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the path prefix joined in front of every request path.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the retry budget (maximum attempts per call).
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds the signed request for one attempt.
    ///
    /// Each call draws a new timestamp, so two prepared copies of the same
    /// request never carry the same signature.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path cannot be resolved or
    /// the body cannot be serialized.
    pub fn prepare(&self, request: &HttpRequest) -> Result<OutboundRequest, InvalidHttpRequestError> {
        let url = resolve_url(
            &self.base_url,
            &self.path_prefix,
            &request.path,
            &request.query,
        )?;
        let body = inject_auth_fields(
            request.body.as_ref(),
            self.partner_id.get(),
            self.clock.next(),
        );

        OutboundRequest::new(
            request.http_method,
            url,
            Some(&Value::Object(body)),
            self.partner_key.as_ref(),
            &self.user_agent,
        )
    }

    /// Sends an HTTP request to the partner API.
    ///
    /// This method handles:
    /// - Signing (fresh timestamp and signature per attempt)
    /// - Response classification
    /// - Retry logic for 429 and 503 responses, bounded by the retry budget
    /// - Request and response logging at `debug` level
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request cannot be built (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`, or `RateLimited` /
    ///   `Transient` once retries are exhausted)
    /// - The body does not decode as `T` (`Decode`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Post, "items/get")
    ///     .json_body(&json!({ "pagination_offset": 0 }))
    ///     .build()?;
    ///
    /// let response = client.request::<Value>(&request).await?;
    /// ```
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<HttpResponse<T>, HttpError> {
        self.request_with_cancel(request, None).await
    }

    /// Sends an HTTP request that can be aborted through `cancel`.
    ///
    /// Cancellation is observed while waiting for the transport and while
    /// backing off after a rate-limited response.
    ///
    /// # Errors
    ///
    /// As [`request`](Self::request), plus [`HttpError::Cancelled`].
    pub async fn request_with_cancel<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<HttpResponse<T>, HttpError> {
        execute(self.retries, &TokioSleeper, cancel, |attempt| {
            self.attempt(request, attempt)
        })
        .await
    }

    /// Sends a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse<T>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query.iter().copied())
            .build()?;
        self.request(&request).await
    }

    /// Sends a POST request with a JSON object body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request). A body that does not serialize to a
    /// JSON object yields [`HttpError::InvalidRequest`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse<T>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json_body(body)
            .build()?;
        self.request(&request).await
    }

    /// Sends a PUT request with a JSON object body.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse<T>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(body)
            .build()?;
        self.request(&request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<HttpResponse<T>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(&request).await
    }

    /// Prepares, sends and classifies one attempt.
    async fn attempt<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        attempt: u32,
    ) -> Result<ResponseOutcome<T>, HttpError> {
        let outbound = self.prepare(request)?;

        tracing::debug!(attempt, "{} {}", outbound.method, outbound.url);
        if !outbound.body.is_empty() {
            tracing::debug!("SENT: {}", String::from_utf8_lossy(&outbound.body));
        }

        let mut req_builder = self
            .client
            .request(outbound.method.to_reqwest(), outbound.url.clone());
        for (key, value) in &outbound.headers {
            req_builder = req_builder.header(key, value);
        }
        if !outbound.body.is_empty() {
            req_builder = req_builder.body(outbound.body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = collect_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(attempt, "RECV {code}");
        if !body.is_empty() {
            tracing::debug!("RESP: {}", String::from_utf8_lossy(&body));
        }

        let outcome = classify(code, headers, body);
        if let Some(warning) = outcome_warning(&outcome) {
            tracing::warn!(
                "Request to {} returned {code} with warning: {warning}",
                request.path
            );
        }
        Ok(outcome)
    }
}

fn outcome_warning<T>(outcome: &ResponseOutcome<T>) -> Option<&str> {
    let error = match outcome {
        ResponseOutcome::Permanent(e) | ResponseOutcome::Transient(e) => e,
        ResponseOutcome::RateLimited(e) => &e.error,
        ResponseOutcome::Success(_) | ResponseOutcome::Decode(_) => return None,
    };
    error.warning.as_deref()
}
