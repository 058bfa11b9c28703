//! Resource services for the Shopee partner API.
//!
//! This module is a thin layer over [`HttpClient`](crate::HttpClient): each
//! resource family (shops, items, orders, and so on) has a service trait and
//! one implementation borrowing the client. Services only supply the path and
//! the body fields; signing, retries and error classification happen in the
//! client.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::{HttpClient, ShopeeConfig, PartnerId, PartnerKey};
//! use shopee_api::rest::{ItemService, Items, OrderService, Orders};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(845_053).unwrap())
//!     .partner_key(PartnerKey::new("partner-key").unwrap())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let (items, page) = Items::new(&client).list_with_pagination(220_006_999, 0, 100).await?;
//! let order = Orders::new(&client).get(220_006_999, "2009XXXX").await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`Fields`]: Builder for request bodies
//! - [`resources`]: Version-specific services and resource structs

mod errors;
mod service;

pub mod resources;

pub use errors::ResourceError;
pub use resources::*;
pub use service::{post, Fields, SHOP_ID_FIELD};
