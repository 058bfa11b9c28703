//! Types shared by several resource families.

use serde::{Deserialize, Serialize};

/// Pagination details for a listing call.
///
/// `offset` and `page_size` echo the request; `total` and `more` come from
/// the response. `total` is `0` for endpoints that do not report it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Offset of the first entry of this page.
    pub offset: u32,
    /// Requested number of entries per page.
    pub page_size: u32,
    /// Total number of entries, when reported.
    pub total: u32,
    /// Whether more entries follow this page.
    pub more: bool,
}

impl Pagination {
    /// Returns the offset of the next page, if there is one.
    #[must_use]
    pub const fn next_offset(&self) -> Option<u32> {
        if self.more {
            Some(self.offset.saturating_add(self.page_size))
        } else {
            None
        }
    }
}

/// An item variation.
///
/// Used both in responses and as input when creating or re-indexing
/// variations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variation {
    /// The variation ID.
    pub variation_id: u64,
    /// The variation name.
    pub name: String,
    /// Available stock.
    pub stock: u32,
    /// Stock reserved by pending orders.
    pub reserved_stock: u32,
    /// Current price.
    pub price: f64,
    /// Seller SKU.
    pub variation_sku: String,
    /// Variation status (e.g., `MODEL_NORMAL`).
    pub status: String,
    /// Creation time (Unix seconds).
    pub create_time: u32,
    /// Last update time (Unix seconds).
    pub update_time: u32,
    /// Price before any discount.
    pub original_price: f64,
    /// Discount the variation takes part in, if any.
    pub discount_id: u32,
    /// Last modification time (Unix seconds).
    pub modified_time: u32,
    /// The owning item.
    pub item_id: u64,
    /// Position of the variation in each tier of a 2-tier item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tier_index: Vec<u32>,
}

/// One tier of a 2-tier variation item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierVariation {
    /// Tier name (e.g., "Color").
    pub name: String,
    /// Option values (e.g., "Red", "Blue").
    pub options: Vec<String>,
    /// One image URL per option.
    pub images_url: Vec<String>,
}
