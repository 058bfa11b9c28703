//! Error types for the Shopee API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A client is never built from a configuration that
//! could not produce a valid request URL.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Partner ID cannot be zero.
    #[error("Partner ID cannot be zero. Please provide the partner ID issued by the Shopee Open Platform.")]
    InvalidPartnerId,

    /// Partner key cannot be empty.
    #[error("Partner key cannot be empty. Please provide a valid Shopee partner key.")]
    EmptyPartnerKey,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}': {reason}. Please provide an absolute URL with scheme (e.g., 'https://partner.shopeemobile.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP transport could not be constructed.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the transport.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partner_key_error_message() {
        let message = ConfigError::EmptyPartnerKey.to_string();
        assert!(message.contains("Partner key cannot be empty"));
    }

    #[test]
    fn test_invalid_api_url_error_message() {
        let error = ConfigError::InvalidApiUrl {
            url: "::bad".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("::bad"));
        assert!(message.contains("relative URL without a base"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "partner_id",
        };
        let message = error.to_string();
        assert!(message.contains("partner_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPartnerKey;
        let _: &dyn std::error::Error = &error;
    }
}
