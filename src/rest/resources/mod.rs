//! Version-specific resource implementations.
//!
//! Resources are organized by partner API version:
//!
//! ```text
//! resources/
//!   mod.rs   <- This file (re-exports latest version)
//!   v1/
//!     mod.rs <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use shopee_api::rest::resources::Orders;      // Uses latest version
//! use shopee_api::rest::resources::v1::Orders;  // Explicit version
//! ```

pub mod v1;

pub use v1::*;
