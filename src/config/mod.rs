//! Configuration types for the Shopee API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with the Shopee Open Platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShopeeConfig`]: The main configuration struct holding all SDK settings
//! - [`ShopeeConfigBuilder`]: A builder for constructing [`ShopeeConfig`] instances
//! - [`PartnerId`]: A validated partner ID newtype
//! - [`PartnerKey`]: A validated partner key newtype with masked debug output
//! - [`ApiUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{ShopeeConfig, PartnerId, PartnerKey};
//! use std::time::Duration;
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(845_053).unwrap())
//!     .partner_key(PartnerKey::new("my-partner-key").unwrap())
//!     .retries(3)
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retries(), 3);
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, PartnerId, PartnerKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the partner API.
pub const DEFAULT_API_URL: &str = "https://partner.shopeemobile.com";

/// Default path prefix joined in front of every relative request path.
pub const DEFAULT_PATH_PREFIX: &str = "api/v1";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Shopee API SDK.
///
/// Holds the partner credentials, the API location and the transport
/// settings. A configuration is immutable once built.
///
/// # Thread Safety
///
/// `ShopeeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Retry Budget
///
/// [`retries`](Self::retries) is the maximum number of attempts for one
/// logical call, not the number of extra retries. Both `0` and `1` mean a
/// single attempt.
#[derive(Clone, Debug)]
pub struct ShopeeConfig {
    partner_id: PartnerId,
    partner_key: PartnerKey,
    api_url: ApiUrl,
    path_prefix: String,
    retries: u32,
    timeout: Duration,
    auth_url: Option<ApiUrl>,
    redirect_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopeeConfig {
    /// Creates a new builder for constructing a `ShopeeConfig`.
    #[must_use]
    pub fn builder() -> ShopeeConfigBuilder {
        ShopeeConfigBuilder::new()
    }

    /// Returns the partner ID.
    #[must_use]
    pub const fn partner_id(&self) -> PartnerId {
        self.partner_id
    }

    /// Returns the partner key.
    #[must_use]
    pub const fn partner_key(&self) -> &PartnerKey {
        &self.partner_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the path prefix (e.g., `api/v1`).
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the retry budget (maximum attempts per call).
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the HTTP timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the partner authorization page URL, if configured.
    #[must_use]
    pub const fn auth_url(&self) -> Option<&ApiUrl> {
        self.auth_url.as_ref()
    }

    /// Returns the redirect URL used after shop authorization, if configured.
    #[must_use]
    pub const fn redirect_url(&self) -> Option<&ApiUrl> {
        self.redirect_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopeeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopeeConfig>();
};

/// Builder for constructing [`ShopeeConfig`] instances.
///
/// Required fields are `partner_id` and `partner_key`.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `path_prefix`: [`DEFAULT_PATH_PREFIX`]
/// - `retries`: `0` (a single attempt)
/// - `timeout`: [`DEFAULT_TIMEOUT_SECS`] seconds
/// - `auth_url`, `redirect_url`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopeeConfigBuilder {
    partner_id: Option<PartnerId>,
    partner_key: Option<PartnerKey>,
    api_url: Option<ApiUrl>,
    path_prefix: Option<String>,
    retries: Option<u32>,
    timeout: Option<Duration>,
    auth_url: Option<ApiUrl>,
    redirect_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopeeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partner ID (required).
    #[must_use]
    pub const fn partner_id(mut self, id: PartnerId) -> Self {
        self.partner_id = Some(id);
        self
    }

    /// Sets the partner key (required).
    #[must_use]
    pub fn partner_key(mut self, key: PartnerKey) -> Self {
        self.partner_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the path prefix joined in front of relative request paths.
    ///
    /// Surrounding slashes are trimmed.
    #[must_use]
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    /// Sets the retry budget (maximum attempts per call).
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the partner authorization page URL.
    #[must_use]
    pub fn auth_url(mut self, url: ApiUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Sets the redirect URL used after shop authorization.
    #[must_use]
    pub fn redirect_url(mut self, url: ApiUrl) -> Self {
        self.redirect_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopeeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `partner_id` or
    /// `partner_key` are not set.
    pub fn build(self) -> Result<ShopeeConfig, ConfigError> {
        let partner_id = self.partner_id.ok_or(ConfigError::MissingRequiredField {
            field: "partner_id",
        })?;
        let partner_key = self
            .partner_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_key",
            })?;

        let api_url = match self.api_url {
            Some(url) => url,
            None => ApiUrl::new(DEFAULT_API_URL)?,
        };

        let path_prefix = self
            .path_prefix
            .map_or_else(|| DEFAULT_PATH_PREFIX.to_string(), |p| {
                p.trim_matches('/').to_string()
            });

        Ok(ShopeeConfig {
            partner_id,
            partner_key,
            api_url,
            path_prefix,
            retries: self.retries.unwrap_or(0),
            timeout: self
                .timeout
                .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            auth_url: self.auth_url,
            redirect_url: self.redirect_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
