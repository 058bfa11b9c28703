//! Item resource, including 2-tier variation management.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::{ItemService, Items};
//!
//! let items = Items::new(&client);
//! let (page, pagination) = items.list_with_pagination(220_006_999, 0, 100).await?;
//! for item in &page {
//!     println!("{} {}", item.item_id, item.status);
//! }
//! if let Some(next) = pagination.next_offset() {
//!     let (more, _) = items.list_with_pagination(220_006_999, next, 100).await?;
//! }
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

use super::common::{Pagination, TierVariation, Variation};

/// An item listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// The item ID.
    pub item_id: u64,
    /// The owning shop.
    pub shop_id: u64,
    /// Last update time (Unix seconds).
    pub update_time: u32,
    /// Item status (e.g., `NORMAL`, `DELETED`, `BANNED`).
    pub status: String,
    /// Leaf category ID.
    pub category_id: u64,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Price of an item without variations.
    pub price: f64,
    /// Stock of an item without variations.
    pub stock: u32,
    /// Seller SKU.
    pub item_sku: String,
    /// Package weight in kilograms.
    pub weight: f64,
    /// The item's variations.
    pub variations: Vec<Variation>,
    /// Whether the item uses 2-tier variations.
    pub is_2tier_item: bool,
}

/// Response of `items/get`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct ItemsResponse {
    items: Vec<Item>,
    more: bool,
    total: u32,
}

/// Response of the tier variation endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct TierVariationResponse {
    tier_variation: Vec<TierVariation>,
    variation_id_list: Vec<Variation>,
}

/// Item operations.
#[allow(async_fn_in_trait)]
pub trait ItemService {
    /// Lists one page of the shop's items.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn list_with_pagination(
        &self,
        shop_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Item>, Pagination), ResourceError>;

    /// Turns an item into a 2-tier variation item.
    ///
    /// Returns the created variations with their IDs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn init_tier_variation(
        &self,
        shop_id: u64,
        item_id: u64,
        tier_variations: &[TierVariation],
        variations: &[Variation],
    ) -> Result<Vec<Variation>, ResourceError>;

    /// Adds variations to a 2-tier variation item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn add_tier_variation(
        &self,
        shop_id: u64,
        item_id: u64,
        variations: &[Variation],
    ) -> Result<Vec<Variation>, ResourceError>;

    /// Fetches the tiers and variations of a 2-tier variation item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn get_variations(
        &self,
        shop_id: u64,
        item_id: u64,
    ) -> Result<(Vec<TierVariation>, Vec<Variation>), ResourceError>;

    /// Replaces the tier definitions of an item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn update_tier_variation_list(
        &self,
        shop_id: u64,
        item_id: u64,
        tier_variations: &[TierVariation],
    ) -> Result<(), ResourceError>;

    /// Updates the tier indexes of existing variations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn update_tier_variation_index(
        &self,
        shop_id: u64,
        item_id: u64,
        variations: &[Variation],
    ) -> Result<(), ResourceError>;
}

/// [`ItemService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct Items<'a> {
    client: &'a HttpClient,
}

impl<'a> Items<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl ItemService for Items<'_> {
    async fn list_with_pagination(
        &self,
        shop_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Item>, Pagination), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("pagination_offset", offset)
            .with("pagination_entries_per_page", limit);
        let response: ItemsResponse = post(self.client, "/items/get", fields).await?;

        let pagination = Pagination {
            offset,
            page_size: limit,
            total: response.total,
            more: response.more,
        };
        Ok((response.items, pagination))
    }

    async fn init_tier_variation(
        &self,
        shop_id: u64,
        item_id: u64,
        tier_variations: &[TierVariation],
        variations: &[Variation],
    ) -> Result<Vec<Variation>, ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with_serialized("tier_variation", tier_variations)?
            .with_serialized("variation", variations)?;
        let response: TierVariationResponse =
            post(self.client, "/item/tier_var/init", fields).await?;
        Ok(response.variation_id_list)
    }

    async fn add_tier_variation(
        &self,
        shop_id: u64,
        item_id: u64,
        variations: &[Variation],
    ) -> Result<Vec<Variation>, ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with_serialized("variation", variations)?;
        let response: TierVariationResponse =
            post(self.client, "/item/tier_var/add", fields).await?;
        Ok(response.variation_id_list)
    }

    async fn get_variations(
        &self,
        shop_id: u64,
        item_id: u64,
    ) -> Result<(Vec<TierVariation>, Vec<Variation>), ResourceError> {
        let fields = Fields::for_shop(shop_id).with("item_id", item_id);
        let response: TierVariationResponse =
            post(self.client, "/item/tier_var/get", fields).await?;
        Ok((response.tier_variation, response.variation_id_list))
    }

    async fn update_tier_variation_list(
        &self,
        shop_id: u64,
        item_id: u64,
        tier_variations: &[TierVariation],
    ) -> Result<(), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with_serialized("tier_variation", tier_variations)?;
        post::<IgnoredAny>(self.client, "/item/tier_var/update_list", fields).await?;
        Ok(())
    }

    async fn update_tier_variation_index(
        &self,
        shop_id: u64,
        item_id: u64,
        variations: &[Variation],
    ) -> Result<(), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with_serialized("variation", variations)?;
        post::<IgnoredAny>(self.client, "/item/tier_var/update", fields).await?;
        Ok(())
    }
}
