//! Resources of partner API v1.
//!
//! # Available Resources
//!
//! - [`Shop`] via [`ShopService`] / [`Shops`]
//! - [`Item`] and 2-tier variations via [`ItemService`] / [`Items`]
//! - [`ItemCategory`] via [`ItemCategoryService`] / [`ItemCategories`]
//! - [`ItemAttribute`] via [`ItemAttributeService`] / [`ItemAttributes`]
//! - [`Variation`] via [`VariationService`] / [`Variations`]
//! - [`Order`] via [`OrderService`] / [`Orders`]
//! - Discounts via [`DiscountService`] / [`Discounts`]
//! - [`Logistic`] channels via [`LogisticsService`] / [`LogisticsChannels`]
//!
//! Each service is a thin wrapper borrowing one [`HttpClient`](crate::HttpClient);
//! services are independent of each other and can be created as needed.

mod common;
mod discount;
mod item;
mod item_attribute;
mod item_category;
mod logistics;
mod order;
mod shop;
mod variation;

pub use common::{Pagination, TierVariation, Variation};
pub use discount::{
    DiscountActionResponse, DiscountItemError, DiscountResponse, DiscountService, Discounts,
};
pub use item::{Item, ItemService, Items};
pub use item_attribute::{ItemAttribute, ItemAttributeService, ItemAttributeValue, ItemAttributes};
pub use item_category::{DaysToShipLimits, ItemCategories, ItemCategory, ItemCategoryService};
pub use logistics::{Logistic, LogisticsChannels, LogisticsService};
pub use order::{Order, OrderItem, OrderService, Orders, RecipientAddress};
pub use shop::{AffiliateShop, Shop, ShopService, Shops};
pub use variation::{
    VariationPriceBatchResult, VariationPriceFailure, VariationPriceModification,
    VariationPriceRequest, VariationPriceResponse, VariationService, Variations,
};
