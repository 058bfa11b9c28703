//! Shop resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::{ShopService, Shops};
//!
//! let shop = Shops::new(&client).get(220_006_999).await?;
//! println!("{} ({})", shop.shop_name, shop.country);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

/// Shop information as returned by `shop/get`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shop {
    /// The shop ID.
    pub shop_id: u64,
    /// The shop name.
    pub shop_name: String,
    /// Two-letter country code.
    pub country: String,
    /// Shop description.
    pub shop_description: String,
    /// Video URLs.
    pub videos: Vec<String>,
    /// Image URLs.
    pub images: Vec<String>,
    /// Maximum number of listed items.
    pub item_limit: u32,
    /// Shop status (e.g., `NORMAL`, `BANNED`).
    pub status: String,
    /// Affiliate shops of a cross-border shop.
    pub sip_a_shops: Vec<AffiliateShop>,
    /// Whether the shop is cross-border.
    pub is_cb: bool,
    /// When the partner was authorized (Unix seconds).
    pub auth_time: i64,
    /// When the authorization expires (Unix seconds).
    pub expire_time: i64,
    /// The platform's request ID.
    pub request_id: String,
}

/// An affiliate shop linked to a cross-border shop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliateShop {
    /// The affiliate shop ID.
    pub a_shop_id: String,
    /// The affiliate shop's country.
    pub country: String,
}

/// Shop operations.
#[allow(async_fn_in_trait)]
pub trait ShopService {
    /// Fetches shop information.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn get(&self, shop_id: u64) -> Result<Shop, ResourceError>;
}

/// [`ShopService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct Shops<'a> {
    client: &'a HttpClient,
}

impl<'a> Shops<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl ShopService for Shops<'_> {
    async fn get(&self, shop_id: u64) -> Result<Shop, ResourceError> {
        post(self.client, "/shop/get", Fields::for_shop(shop_id)).await
    }
}
