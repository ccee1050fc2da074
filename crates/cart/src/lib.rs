//! Kalspire Cart - client-owned storefront state.
//!
//! Implements the locally persisted state of the Kalspire storefront: the
//! shopping cart (line-item identity, merge-on-add, derived totals), the
//! wishlist, and the checkout hand-off payload.
//!
//! # Design
//!
//! - State transitions are pure, total functions in [`reducer`]; they never
//!   fail and never touch storage.
//! - [`CartStore`] owns the line-item collection, applies transitions,
//!   persists through an injected [`CartRepository`], and notifies read-only
//!   subscribers after each mutation. There is no global singleton.
//! - Persistence goes through the [`DurableSlot`] abstraction: a string
//!   key-value slot that survives application restarts on one device.
//!
//! Product and stock data are snapshotted at add-to-cart time and never
//! re-validated here; stock is enforced server-side at order creation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod line_item;
pub mod reducer;
pub mod repository;
pub mod storage;
pub mod store;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_util;

pub use checkout::OrderItemInput;
pub use config::{ConfigError, StorageConfig};
pub use error::StorageError;
pub use line_item::{CartLineItem, ColorSelection, LineItemKey};
pub use repository::{CART_SLOT_KEY, CartRepository, WISHLIST_SLOT_KEY, WishlistRepository};
pub use storage::{DurableSlot, FileSlot, MemorySlot};
pub use store::CartStore;
pub use wishlist::WishlistStore;
