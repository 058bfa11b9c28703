//! Push notification error types for the Shopee API SDK.

use thiserror::Error;

/// Error type for push notification verification.
///
/// # Example
///
/// ```rust
/// use shopee_api::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidSignature;
/// assert_eq!(error.to_string(), "Push notification signature verification failed");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The `Authorization` value does not match the signature computed from
    /// the callback URL and body.
    ///
    /// The error message is intentionally generic to avoid leaking security
    /// details.
    #[error("Push notification signature verification failed")]
    InvalidSignature,

    /// The push notification carried no `Authorization` value.
    #[error("Push notification is missing the Authorization header")]
    MissingSignature,
}
