//! Push notification verification for the Shopee API SDK.
//!
//! Shopee delivers push notifications (order status changes, shop
//! deauthorization, and so on) to the callback URL registered for the partner
//! app. Each delivery is signed with the partner key; this module checks that
//! signature before the payload is trusted.
//!
//! - [`PushRequest`]: An incoming push notification
//! - [`verify_push`]: Verification against a [`ShopeeConfig`](crate::ShopeeConfig)
//! - [`verify_push_signature`]: Low-level verification
//! - [`WebhookError`]: Verification failures

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{verify_push, verify_push_signature, PushRequest, HEADER_AUTHORIZATION};
