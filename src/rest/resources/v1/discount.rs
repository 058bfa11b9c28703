//! Discount resource.
//!
//! Discount promotions and the items taking part in them. Request details
//! beyond the IDs (names, time ranges, item lists) are passed as a JSON
//! object and merged into the request body.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use shopee_api::rest::{DiscountService, Discounts};
//!
//! let discounts = Discounts::new(&client);
//! let created = discounts
//!     .add_discount(220_006_999, json!({
//!         "discount_name": "Mid-year sale",
//!         "start_time": 1_600_000_000,
//!         "end_time": 1_600_600_000,
//!     }).as_object().unwrap())
//!     .await?;
//! discounts.delete_discount(220_006_999, created.discount_id).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

/// Result of calls that add or replace discount items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountResponse {
    /// The discount ID.
    pub discount_id: u64,
    /// Number of items affected.
    pub count: u32,
    /// A non-fatal warning.
    pub warning: String,
    /// The platform's request ID.
    pub request_id: String,
    /// Items that could not be processed.
    pub errors: Vec<DiscountItemError>,
}

/// An item that could not be added to or updated in a discount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountItemError {
    /// The item ID.
    pub item_id: u64,
    /// The variation ID (`0` for the whole item).
    pub variation_id: u64,
    /// Why the item was rejected.
    pub error_msg: String,
}

/// Result of calls that change a discount or remove an item from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountActionResponse {
    /// The discount ID.
    pub discount_id: u64,
    /// The platform's request ID.
    pub request_id: String,
    /// The item ID, for item removals.
    pub item_id: u64,
    /// The variation ID, for variation removals.
    pub variation_id: u64,
    /// When the change took effect (Unix seconds).
    pub modify_time: i64,
}

/// Discount operations.
#[allow(async_fn_in_trait)]
pub trait DiscountService {
    /// Creates a discount from `request` (name, time range, items).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn add_discount(
        &self,
        shop_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError>;

    /// Deletes a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn delete_discount(
        &self,
        shop_id: u64,
        discount_id: u64,
    ) -> Result<DiscountActionResponse, ResourceError>;

    /// Adds the items in `request` to a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn add_discount_items(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError>;

    /// Removes an item, or one of its variations, from a discount.
    ///
    /// A `variation_id` of `0` removes the whole item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn delete_discount_item(
        &self,
        shop_id: u64,
        discount_id: u64,
        item_id: u64,
        variation_id: u64,
    ) -> Result<DiscountActionResponse, ResourceError>;

    /// Changes the discount's name or time range.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn update_discount(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountActionResponse, ResourceError>;

    /// Changes prices or purchase limits of items in a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn update_discount_items(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError>;
}

/// [`DiscountService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct Discounts<'a> {
    client: &'a HttpClient,
}

impl<'a> Discounts<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

fn discount_fields(shop_id: u64, discount_id: u64) -> Fields {
    Fields::for_shop(shop_id).with("discount_id", discount_id)
}

impl DiscountService for Discounts<'_> {
    async fn add_discount(
        &self,
        shop_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError> {
        let fields = Fields::for_shop(shop_id).merge(request);
        post(self.client, "/discount/add", fields).await
    }

    async fn delete_discount(
        &self,
        shop_id: u64,
        discount_id: u64,
    ) -> Result<DiscountActionResponse, ResourceError> {
        post(
            self.client,
            "/discount/delete",
            discount_fields(shop_id, discount_id),
        )
        .await
    }

    async fn add_discount_items(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError> {
        let fields = discount_fields(shop_id, discount_id).merge(request);
        post(self.client, "/discount/items/add", fields).await
    }

    async fn delete_discount_item(
        &self,
        shop_id: u64,
        discount_id: u64,
        item_id: u64,
        variation_id: u64,
    ) -> Result<DiscountActionResponse, ResourceError> {
        let mut fields = discount_fields(shop_id, discount_id).with("item_id", item_id);
        if variation_id > 0 {
            fields = fields.with("variation_id", variation_id);
        }
        post(self.client, "/discount/item/delete", fields).await
    }

    async fn update_discount(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountActionResponse, ResourceError> {
        let fields = discount_fields(shop_id, discount_id).merge(request);
        post(self.client, "/discount/update", fields).await
    }

    async fn update_discount_items(
        &self,
        shop_id: u64,
        discount_id: u64,
        request: &Map<String, Value>,
    ) -> Result<DiscountResponse, ResourceError> {
        let fields = discount_fields(shop_id, discount_id).merge(request);
        post(self.client, "/discount/items/update", fields).await
    }
}
