//! Variation resource.
//!
//! Covers single-tier variations: creation, deletion and price or stock
//! updates, including batch price updates.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::{VariationPriceRequest, VariationService, Variations};
//!
//! let variations = Variations::new(&client);
//! let updated = variations.update_stock(220_006_999, 100_926_704, 5_249_278, 12).await?;
//!
//! let result = variations
//!     .update_price_batch(220_006_999, &[VariationPriceRequest {
//!         item_id: 100_926_704,
//!         variation_id: 5_249_278,
//!         price: 19.9,
//!     }])
//!     .await?;
//! for failure in &result.batch_result.failures {
//!     println!("{}: {}", failure.variation_id, failure.error_description);
//! }
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

use super::common::Variation;

/// One entry of a batch price update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariationPriceRequest {
    /// The owning item.
    pub item_id: u64,
    /// The variation to update.
    pub variation_id: u64,
    /// The new price.
    pub price: f64,
}

/// Result of a batch price update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationPriceResponse {
    /// The platform's request ID.
    pub request_id: String,
    /// Per-variation results.
    pub batch_result: VariationPriceBatchResult,
}

/// Per-variation results of a batch price update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationPriceBatchResult {
    /// Variations whose price was changed.
    pub modifications: Vec<VariationPriceModification>,
    /// Variations that could not be changed.
    pub failures: Vec<VariationPriceFailure>,
}

/// A successful entry of a batch price update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationPriceModification {
    /// The owning item.
    pub item_id: u64,
    /// The variation.
    pub variation_id: u64,
    /// The resulting price.
    pub item_price: f64,
}

/// A failed entry of a batch price update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationPriceFailure {
    /// The owning item.
    pub item_id: u64,
    /// The variation.
    pub variation_id: u64,
    /// Why the update failed.
    pub error_description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddVariationsResponse {
    variations: Vec<Variation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateVariationResponse {
    item: Variation,
}

/// Variation operations.
#[allow(async_fn_in_trait)]
pub trait VariationService {
    /// Adds `variation` to an item.
    ///
    /// Returns the created variation, or `None` if the platform returned no
    /// variation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn create(
        &self,
        shop_id: u64,
        item_id: u64,
        variation: &Variation,
    ) -> Result<Option<Variation>, ResourceError>;

    /// Deletes a variation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn delete(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
    ) -> Result<(), ResourceError>;

    /// Sets the price of a variation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn update_price(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
        price: f64,
    ) -> Result<Variation, ResourceError>;

    /// Sets the stock of a variation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn update_stock(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
        stock: u32,
    ) -> Result<Variation, ResourceError>;

    /// Sets the prices of several variations at once.
    ///
    /// Partial failures are reported in the result, not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the body cannot be built or the call fails.
    async fn update_price_batch(
        &self,
        shop_id: u64,
        prices: &[VariationPriceRequest],
    ) -> Result<VariationPriceResponse, ResourceError>;
}

/// [`VariationService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct Variations<'a> {
    client: &'a HttpClient,
}

impl<'a> Variations<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl VariationService for Variations<'_> {
    async fn create(
        &self,
        shop_id: u64,
        item_id: u64,
        variation: &Variation,
    ) -> Result<Option<Variation>, ResourceError> {
        // This endpoint spells the shop key `shop_id`.
        let fields = Fields::default()
            .with("shop_id", shop_id)
            .with("item_id", item_id)
            .with_serialized("variations", std::slice::from_ref(variation))?;
        let response: AddVariationsResponse =
            post(self.client, "/item/add_variations", fields).await?;
        Ok(response.variations.into_iter().next())
    }

    async fn delete(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
    ) -> Result<(), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with("variation_id", variation_id);
        post::<IgnoredAny>(self.client, "/item/delete_variation", fields).await?;
        Ok(())
    }

    async fn update_price(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
        price: f64,
    ) -> Result<Variation, ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with("variation_id", variation_id)
            .with("price", price);
        let response: UpdateVariationResponse =
            post(self.client, "/items/update_variation_price", fields).await?;
        Ok(response.item)
    }

    async fn update_stock(
        &self,
        shop_id: u64,
        item_id: u64,
        variation_id: u64,
        stock: u32,
    ) -> Result<Variation, ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("item_id", item_id)
            .with("variation_id", variation_id)
            .with("stock", stock);
        let response: UpdateVariationResponse =
            post(self.client, "/items/update_variation_stock", fields).await?;
        Ok(response.item)
    }

    async fn update_price_batch(
        &self,
        shop_id: u64,
        prices: &[VariationPriceRequest],
    ) -> Result<VariationPriceResponse, ResourceError> {
        let fields = Fields::for_shop(shop_id).with_serialized("variations", prices)?;
        post(self.client, "/items/update/vars_price", fields).await
    }
}
