//! Resource-specific error types for partner API operations.
//!
//! This module contains [`ResourceError`], which extends [`HttpError`] with
//! resource-level semantics such as `NotFound`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::{OrderService, Orders, ResourceError};
//!
//! match Orders::new(&client).get(220_006_999, "2009XXXX").await {
//!     Ok(order) => println!("Status: {}", order.order_status),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} {id} not found");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use shopee_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Order",
///     id: "2009XXXX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Order with id 2009XXXX not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The platform answered successfully but returned no matching record.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Order").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request body could not be built from the given values.
    #[error("Failed to serialize request fields: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Returns the platform's request ID if the error carries one.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e) | HttpError::Transient(e)) => e.request_id.as_deref(),
            Self::Http(HttpError::RateLimited(e)) => e.error.request_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ResponseError;

    #[test]
    fn test_not_found_error_message() {
        let error = ResourceError::NotFound {
            resource: "Order",
            id: "2009XXXX".to_string(),
        };
        assert_eq!(error.to_string(), "Order with id 2009XXXX not found");
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_http_error_is_transparent_and_keeps_request_id() {
        let error: ResourceError = HttpError::Response(ResponseError {
            code: 403,
            message: "error_auth".to_string(),
            errors: Vec::new(),
            request_id: Some("541bb4a2".to_string()),
            warning: None,
        })
        .into();

        assert_eq!(error.to_string(), "error_auth");
        assert_eq!(error.request_id(), Some("541bb4a2"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ResourceError = json_error.into();
        assert!(matches!(error, ResourceError::Serialization(_)));
        assert!(error.to_string().starts_with("Failed to serialize request fields"));
    }
}
