//! Order resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::{OrderService, Orders};
//!
//! let orders = Orders::new(&client);
//! let (page, pagination) = orders.list_with_pagination(220_006_999, 0, 50).await?;
//! for summary in &page {
//!     let order = orders.get(220_006_999, &summary.ordersn).await?;
//!     println!("{} {} {}", order.ordersn, order.order_status, order.total_amount);
//! }
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

use super::common::Pagination;

/// An order.
///
/// `orders/basics` fills only `ordersn`, `order_status` and `update_time`;
/// `orders/detail` fills the rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// The order serial number.
    pub ordersn: String,
    /// The buyer's user name.
    pub buyer_username: String,
    /// Where the order ships to.
    pub recipient_address: Option<RecipientAddress>,
    /// Order status (e.g., `UNPAID`, `READY_TO_SHIP`, `COMPLETED`).
    pub order_status: String,
    /// Currency of the amounts.
    pub currency: String,
    /// Tracking number, once shipped.
    pub tracking_no: String,
    /// Amount released to the seller.
    pub escrow_amount: f64,
    /// Amount paid by the buyer.
    pub total_amount: f64,
    /// Two-letter country code.
    pub country: String,
    /// Payment method.
    pub payment_method: String,
    /// Logistics carrier.
    pub shipping_carrier: String,
    /// Whether the order is cash on delivery.
    pub cod: bool,
    /// Preparation time set by the seller, in days.
    pub days_to_ship: u32,
    /// Buyer's message to the seller.
    pub message_to_seller: String,
    /// Seller's note.
    pub note: String,
    /// Creation time (Unix seconds).
    pub create_time: i64,
    /// Last update time (Unix seconds).
    pub update_time: i64,
    /// Payment time (Unix seconds); `None` while unpaid.
    pub pay_time: Option<i64>,
    /// Ordered items.
    pub items: Vec<OrderItem>,
    /// Latest ship-by date (Unix seconds).
    pub ship_by_date: i64,
    /// Who cancelled the order.
    pub cancel_by: String,
    /// Why the order was cancelled.
    pub cancel_reason: String,
}

/// An ordered item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    /// The item ID.
    pub item_id: u64,
    /// The item name.
    pub item_name: String,
    /// The item SKU.
    pub item_sku: String,
    /// The variation ID (`0` without variations).
    pub variation_id: u64,
    /// The variation name.
    pub variation_name: String,
    /// The variation SKU.
    pub variation_sku: String,
    /// Purchased quantity.
    pub variation_quantity_purchased: u32,
    /// Price after discounts, as a decimal string.
    pub variation_discounted_price: String,
    /// Price before discounts, as a decimal string.
    pub variation_original_price: String,
}

/// A shipping address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientAddress {
    /// Recipient name.
    pub name: String,
    /// Recipient phone.
    pub phone: String,
    /// Town.
    pub town: String,
    /// District.
    pub district: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub zipcode: String,
    /// The full address on one line.
    pub full_address: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrdersResponse {
    orders: Vec<Order>,
    more: bool,
}

/// Order operations.
#[allow(async_fn_in_trait)]
pub trait OrderService {
    /// Lists one page of the shop's orders.
    ///
    /// The returned [`Pagination`] has `total` set to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn list_with_pagination(
        &self,
        shop_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Order>, Pagination), ResourceError>;

    /// Fetches the details of one order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the platform returns no order,
    /// or [`ResourceError::Http`] if the call fails.
    async fn get(&self, shop_id: u64, ordersn: &str) -> Result<Order, ResourceError>;

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn cancel(
        &self,
        shop_id: u64,
        ordersn: &str,
        reason: &str,
        item_id: u64,
    ) -> Result<(), ResourceError>;
}

/// [`OrderService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct Orders<'a> {
    client: &'a HttpClient,
}

impl<'a> Orders<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl OrderService for Orders<'_> {
    async fn list_with_pagination(
        &self,
        shop_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Order>, Pagination), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("pagination_offset", offset)
            .with("pagination_entries_per_page", limit);
        let response: OrdersResponse = post(self.client, "/orders/basics", fields).await?;

        let pagination = Pagination {
            offset,
            page_size: limit,
            total: 0,
            more: response.more,
        };
        Ok((response.orders, pagination))
    }

    async fn get(&self, shop_id: u64, ordersn: &str) -> Result<Order, ResourceError> {
        let fields = Fields::for_shop(shop_id).with("ordersn_list", vec![ordersn]);
        let response: OrdersResponse = post(self.client, "/orders/detail", fields).await?;

        response
            .orders
            .into_iter()
            .next()
            .ok_or_else(|| ResourceError::NotFound {
                resource: "Order",
                id: ordersn.to_string(),
            })
    }

    async fn cancel(
        &self,
        shop_id: u64,
        ordersn: &str,
        reason: &str,
        item_id: u64,
    ) -> Result<(), ResourceError> {
        let fields = Fields::for_shop(shop_id)
            .with("ordersn", ordersn)
            .with("cancel_reason", reason)
            .with("item_id", item_id);
        post::<IgnoredAny>(self.client, "/orders/cancel", fields).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_detail_deserialization() {
        let response: OrdersResponse = serde_json::from_value(json!({
            "orders": [{
                "ordersn": "2009XXXX",
                "order_status": "READY_TO_SHIP",
                "currency": "SGD",
                "total_amount": 25.5,
                "cod": false,
                "create_time": 1_600_000_000,
                "pay_time": null,
                "recipient_address": { "name": "A", "city": "Singapore", "zipcode": "018956" },
                "items": [{ "item_id": 1, "variation_id": 2, "variation_quantity_purchased": 3,
                            "variation_original_price": "9.90" }]
            }],
            "request_id": "abc"
        }))
        .unwrap();

        let order = &response.orders[0];
        assert_eq!(order.order_status, "READY_TO_SHIP");
        assert_eq!(order.pay_time, None);
        assert_eq!(order.recipient_address.as_ref().unwrap().zipcode, "018956");
        assert_eq!(order.items[0].variation_quantity_purchased, 3);
        assert!(!response.more);
    }
}
