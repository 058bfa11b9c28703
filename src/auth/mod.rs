//! Authentication for the Shopee partner API.
//!
//! - [`signature`]: HMAC-SHA256 request signatures and their verification
//! - [`auth_url`] / [`auth_token`]: shop authorization links for partner apps

mod partner;
pub mod signature;

pub use partner::{auth_token, auth_url};
pub use signature::{compute_signature, verify_signature};
