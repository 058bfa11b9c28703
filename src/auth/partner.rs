//! Shop authorization links for partner apps.
//!
//! A shop grants a partner app access by visiting the partner authorization
//! page. The link carries the partner ID, a token derived from the partner key
//! and the redirect URL, and the redirect URL itself.

use sha2::{Digest, Sha256};

use crate::config::ShopeeConfig;
use crate::error::ConfigError;

/// Computes the authorization token for `config`.
///
/// The token is the lowercase hex SHA-256 of the partner key immediately
/// followed by the redirect URL.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] if no redirect URL is
/// configured.
pub fn auth_token(config: &ShopeeConfig) -> Result<String, ConfigError> {
    let redirect = config
        .redirect_url()
        .ok_or(ConfigError::MissingRequiredField {
            field: "redirect_url",
        })?;
    Ok(token_for(config.partner_key().as_ref(), redirect.as_ref()))
}

/// Builds the URL a shop owner visits to authorize the partner app.
///
/// The redirect URL is percent-encoded in the query string; the token is
/// computed over its unencoded form.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] if `auth_url` or
/// `redirect_url` is not configured.
///
/// # Example
///
/// ```rust
/// use shopee_api::{ShopeeConfig, PartnerId, PartnerKey, ApiUrl};
/// use shopee_api::auth::auth_url;
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(845_053).unwrap())
///     .partner_key(PartnerKey::new("partner-key").unwrap())
///     .auth_url(ApiUrl::new("https://partner.shopeemobile.com/api/v1/shop/auth_partner").unwrap())
///     .redirect_url(ApiUrl::new("https://myapp.example.com/callback").unwrap())
///     .build()
///     .unwrap();
///
/// let url = auth_url(&config).unwrap();
/// assert!(url.starts_with("https://partner.shopeemobile.com/api/v1/shop/auth_partner?id=845053&token="));
/// ```
pub fn auth_url(config: &ShopeeConfig) -> Result<String, ConfigError> {
    let base = config
        .auth_url()
        .ok_or(ConfigError::MissingRequiredField { field: "auth_url" })?;
    let token = auth_token(config)?;
    let redirect = config
        .redirect_url()
        .ok_or(ConfigError::MissingRequiredField {
            field: "redirect_url",
        })?;

    Ok(format!(
        "{}?id={}&token={}&redirect={}",
        base.as_ref(),
        config.partner_id(),
        token,
        urlencoding::encode(redirect.as_ref())
    ))
}

fn token_for(partner_key: &str, redirect_url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(partner_key.as_bytes());
    hasher.update(redirect_url.as_bytes());
    hex::encode(hasher.finalize())
}
