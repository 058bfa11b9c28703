//! Logistics channel resource.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

/// A logistics channel available to the shop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logistic {
    /// The channel ID.
    pub logistic_id: u64,
    /// The channel name.
    pub logistic_name: String,
    /// Whether the shop has enabled the channel.
    pub enabled: bool,
    /// Flat shipping fee, when the fee type is fixed.
    pub shipping_fee: f64,
    /// Size ID, when the fee depends on parcel size.
    pub size_id: u64,
    /// Whether shipping is free for the buyer.
    pub is_free: bool,
    /// Estimated shipping fee.
    pub estimated_shipping_fee: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogisticsResponse {
    logistics: Vec<Logistic>,
}

/// Logistics operations.
#[allow(async_fn_in_trait)]
pub trait LogisticsService {
    /// Lists the shop's logistics channels.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn list(&self, shop_id: u64) -> Result<Vec<Logistic>, ResourceError>;
}

/// [`LogisticsService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct LogisticsChannels<'a> {
    client: &'a HttpClient,
}

impl<'a> LogisticsChannels<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl LogisticsService for LogisticsChannels<'_> {
    async fn list(&self, shop_id: u64) -> Result<Vec<Logistic>, ResourceError> {
        let response: LogisticsResponse =
            post(self.client, "/logistics/channel/get", Fields::for_shop(shop_id)).await?;
        Ok(response.logistics)
    }
}
