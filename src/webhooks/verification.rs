//! Push notification signature verification.
//!
//! Shopee signs each push notification sent to the partner's callback URL
//! the same way partners sign requests: the `Authorization` header holds the
//! lowercase hex HMAC-SHA256 of `callback_url + "|" + body`, keyed with the
//! partner key.
//!
//! - [`verify_push`]: High-level check using a [`ShopeeConfig`]
//! - [`verify_push_signature`]: Low-level check for custom integrations
//!
//! # Example
//!
//! ```rust
//! use shopee_api::auth::compute_signature;
//! use shopee_api::webhooks::{verify_push, PushRequest};
//! use shopee_api::{ShopeeConfig, PartnerId, PartnerKey};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(845_053).unwrap())
//!     .partner_key(PartnerKey::new("partner-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = "https://myapp.example.com/push";
//! let body = br#"{"code":3,"shop_id":220006999}"#;
//! let authorization = compute_signature(url, body, "partner-key");
//!
//! let request = PushRequest::new(url, body.to_vec(), authorization);
//! assert!(verify_push(&config, &request).is_ok());
//! ```

use crate::auth::signature::verify_signature;
use crate::config::ShopeeConfig;
use crate::webhooks::WebhookError;

/// HTTP header carrying the push notification signature.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// An incoming push notification.
///
/// The body is kept as raw bytes so the signature is checked against the
/// exact payload that was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    url: String,
    body: Vec<u8>,
    authorization: String,
}

impl PushRequest {
    /// Creates a push request.
    ///
    /// `url` must be the full callback URL registered with the platform, as
    /// the platform signs that URL rather than whatever the receiving server
    /// sees behind a proxy.
    #[must_use]
    pub fn new(url: impl Into<String>, body: Vec<u8>, authorization: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body,
            authorization: authorization.into(),
        }
    }

    /// Returns the callback URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

/// Verifies a push notification against the configured partner key.
///
/// # Errors
///
/// Returns [`WebhookError::MissingSignature`] if the `Authorization` value is
/// empty, or [`WebhookError::InvalidSignature`] if it does not match.
pub fn verify_push(config: &ShopeeConfig, request: &PushRequest) -> Result<(), WebhookError> {
    if request.authorization.trim().is_empty() {
        tracing::warn!("Push notification to {} has no signature", request.url);
        return Err(WebhookError::MissingSignature);
    }

    if verify_push_signature(
        &request.url,
        &request.body,
        config.partner_key().as_ref(),
        request.authorization.trim(),
    ) {
        Ok(())
    } else {
        tracing::warn!("Push notification to {} failed verification", request.url);
        Err(WebhookError::InvalidSignature)
    }
}

/// Low-level push signature check.
///
/// Returns `true` if `authorization` is the signature of `url` and `body`
/// under `partner_key`. The comparison runs in constant time.
///
/// # Example
///
/// ```rust
/// use shopee_api::auth::compute_signature;
/// use shopee_api::webhooks::verify_push_signature;
///
/// let signature = compute_signature("https://a.example/push", b"{}", "key");
/// assert!(verify_push_signature("https://a.example/push", b"{}", "key", &signature));
/// assert!(!verify_push_signature("https://a.example/push", b"{ }", "key", &signature));
/// ```
#[must_use]
pub fn verify_push_signature(
    url: &str,
    body: &[u8],
    partner_key: &str,
    authorization: &str,
) -> bool {
    verify_signature(url, body, partner_key, authorization)
}
