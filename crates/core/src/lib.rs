//! Kalspire Core - Shared types library.
//!
//! This crate provides the common types used across the Kalspire client-state
//! components:
//! - `cart` - Shopping cart, wishlist, and checkout hand-off state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the read-only catalog
//!   types (`Product`, `ColorVariant`, `Category`) the cart consumes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
