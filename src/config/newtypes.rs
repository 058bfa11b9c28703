//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw credential and URL
//! values that validate their contents on construction. Invalid values are
//! rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopee partner ID.
///
/// The partner ID is injected into every signed request body as `partner_id`.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerId;
///
/// let id = PartnerId::new(845_053).unwrap();
/// assert_eq!(id.get(), 845_053);
/// assert!(PartnerId::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartnerId(u64);

impl PartnerId {
    /// Creates a new validated partner ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPartnerId`] if the ID is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidPartnerId);
        }
        Ok(Self(id))
    }

    /// Returns the raw numeric ID.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Shopee partner key.
///
/// The partner key is the shared secret used to sign outbound requests and
/// verify inbound push notifications. Its value is masked in debug output so
/// it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerKey;
///
/// let key = PartnerKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", key), "PartnerKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PartnerKey(String);

impl PartnerKey {
    /// Creates a new validated partner key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPartnerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPartnerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PartnerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PartnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartnerKey(*****)")
    }
}

/// A validated absolute URL (API base, authorization page or redirect target).
///
/// Only `http` and `https` URLs that can act as a base for relative
/// resolution are accepted.
///
/// # Example
///
/// ```rust
/// use shopee_api::ApiUrl;
///
/// let url = ApiUrl::new("https://partner.shopeemobile.com").unwrap();
/// assert_eq!(url.as_ref(), "https://partner.shopeemobile.com/");
/// assert!(ApiUrl::new("partner.shopeemobile.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the value does not parse as
    /// an absolute `http`/`https` URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let raw = raw.trim().to_string();

        let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: raw,
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
