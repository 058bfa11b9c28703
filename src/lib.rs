//! # Shopee API Rust SDK
//!
//! A Rust SDK for the Shopee Open Platform partner API (v1), providing
//! type-safe configuration, request signing, and an HTTP client with retry
//! and error classification.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShopeeConfig`] and [`ShopeeConfigBuilder`]
//! - Validated newtypes for partner credentials and URLs
//! - HMAC-SHA256 request signing via [`auth::signature`]
//! - Shop authorization links via [`auth::auth_url`]
//! - Async HTTP client with rate limit and service-unavailable retries
//! - Typed errors for every failure kind
//! - Resource services for shops, items, variations, orders, discounts and
//!   logistics via [`rest`]
//! - Push notification verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopee_api::{ShopeeConfig, PartnerId, PartnerKey};
//! use shopee_api::clients::HttpClient;
//!
//! // Create configuration using the builder pattern
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(845_053).unwrap())
//!     .partner_key(PartnerKey::new("your-partner-key").unwrap())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! Every request body gets `partner_id` and a fresh `timestamp` injected and
//! is signed into the `Authorization` header:
//!
//! ```rust,ignore
//! use serde_json::{json, Value};
//!
//! let response = client
//!     .post::<Value, _>("/shop/get", &json!({ "shopid": 220_006_999 }))
//!     .await?;
//! println!("Shop: {}", response.body["shop_name"]);
//! ```
//!
//! ## Resource Services
//!
//! ```rust,ignore
//! use shopee_api::rest::{OrderService, Orders};
//!
//! let orders = Orders::new(&client);
//! let (page, pagination) = orders.list_with_pagination(220_006_999, 0, 50).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use shopee_api::HttpError;
//!
//! match client.post::<Value, _>("/items/get", &body).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::RateLimited(e)) => println!("Throttled, retry after {:?}", e.retry_after),
//!     Err(HttpError::Transient(e)) => println!("Unavailable: {e}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {e}", e.code),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`](https://docs.rs/tracing) events: the request
//! line, sent body, response status and response body of every attempt at
//! `debug` level, and retries or API warnings at `warn` level. No subscriber
//! is installed by the SDK.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, PartnerId, PartnerKey, ShopeeConfig, ShopeeConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimitError, ResponseDecodingError, ResponseError,
};

// Re-export resource and push notification errors
pub use rest::ResourceError;
pub use webhooks::WebhookError;
