//! Integration tests for Kalspire client state.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Reload round-trips through the filesystem slot
//! - `checkout_flow` - Cart to order-creation hand-off
//!
//! This library only hosts the shared catalog fixtures; the tests themselves
//! live under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{TimeZone, Utc};
use kalspire_core::{CategoryId, ColorVariant, ColorVariantId, Product, ProductId};
use rust_decimal::Decimal;

/// A catalog product priced in whole cents, with no color variants.
#[must_use]
pub fn product(id: &str, price_cents: i64) -> Product {
    let timestamp = Utc
        .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default();
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: "Integration test product".to_owned(),
        price: Decimal::new(price_cents, 2),
        original_price: None,
        images: vec![format!("https://cdn.example.com/{id}.jpg")],
        category_id: CategoryId::new("cat-test"),
        category: None,
        stock: 10,
        is_available: true,
        tags: None,
        color_variants: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// A product with the given color variants attached.
#[must_use]
pub fn product_with_colors(id: &str, price_cents: i64, colors: Vec<ColorVariant>) -> Product {
    let mut product = product(id, price_cents);
    product.color_variants = Some(colors);
    product
}

/// A color variant belonging to some product under test.
#[must_use]
pub fn color(id: &str, name: &str, hex_code: &str) -> ColorVariant {
    ColorVariant {
        id: ColorVariantId::new(id),
        name: name.to_owned(),
        hex_code: hex_code.to_owned(),
        stock: 5,
    }
}
