//! HTTP client types for Shopee partner API communication.
//!
//! This module provides the request execution core: signing, URL
//! resolution, the retry loop and response classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`OutboundRequest`]: One signed attempt, as handed to the transport
//! - [`HttpResponse`]: A decoded successful response
//! - [`ResponseOutcome`]: The classification of a completed response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::{HttpClient, HttpRequest, HttpMethod, ShopeeConfig, PartnerId, PartnerKey};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(845_053).unwrap())
//!     .partner_key(PartnerKey::new("partner-key").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "shop/get")
//!     .json_body(&serde_json::json!({ "shopid": 220_006_999 }))
//!     .build()?;
//!
//! let response = client.request::<serde_json::Value>(&request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The retry budget ([`ShopeeConfig::retries`](crate::ShopeeConfig::retries))
//! is the maximum number of attempts per call:
//!
//! - **429 (Rate Limited)**: Retries after the `Retry-After` header value, or
//!   1 second if not present
//! - **503 (Service Unavailable)**: Retries immediately
//! - **Other errors, decode failures and network errors**: Returned without retry
//!
//! Every attempt is signed again with a fresh timestamp.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod retry;
mod timestamp;

pub use errors::{
    HttpError, InvalidHttpRequestError, RateLimitError, ResponseDecodingError, ResponseError,
    UNKNOWN_ERROR_MESSAGE,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    inject_auth_fields, resolve_url, to_body_map, HttpMethod, HttpRequest, HttpRequestBuilder,
    OutboundRequest, PARTNER_ID_FIELD, TIMESTAMP_FIELD,
};
pub use http_response::{
    classify, collect_headers, retry_after, ErrorEnvelope, HttpResponse, ResponseOutcome,
    DEFAULT_RETRY_AFTER, MAX_RETRY_AFTER,
};
pub use timestamp::{TimestampClock, MAX_CLOCK_LEAD_SECS};
