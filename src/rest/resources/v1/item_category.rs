//! Item category resource.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

/// A node of the category tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCategory {
    /// The category ID.
    pub category_id: u64,
    /// The parent category ID (`0` for a root).
    pub parent_id: u64,
    /// The category name.
    pub category_name: String,
    /// Whether the category has children. Items can only be listed in leaves.
    pub has_children: bool,
    /// Allowed days-to-ship range, if the category restricts it.
    pub days_to_ship_limits: Option<DaysToShipLimits>,
}

/// Allowed pre-order shipping range for a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaysToShipLimits {
    /// Lower bound in days.
    pub min_limit: i32,
    /// Upper bound in days.
    pub max_limit: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemCategoriesResponse {
    categories: Vec<ItemCategory>,
}

/// Category operations.
#[allow(async_fn_in_trait)]
pub trait ItemCategoryService {
    /// Lists the categories available to the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn list(&self, shop_id: u64) -> Result<Vec<ItemCategory>, ResourceError>;
}

/// [`ItemCategoryService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct ItemCategories<'a> {
    client: &'a HttpClient,
}

impl<'a> ItemCategories<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl ItemCategoryService for ItemCategories<'_> {
    async fn list(&self, shop_id: u64) -> Result<Vec<ItemCategory>, ResourceError> {
        let response: ItemCategoriesResponse =
            post(self.client, "/item/categories/get", Fields::for_shop(shop_id)).await?;
        Ok(response.categories)
    }
}
