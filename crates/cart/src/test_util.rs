//! Shared fixtures for unit tests.

use chrono::{TimeZone, Utc};
use kalspire_core::{CategoryId, ColorVariant, ColorVariantId, Product, ProductId};
use rust_decimal::Decimal;

/// A catalog product priced in whole cents, with no color variants.
pub fn product(id: &str, price_cents: i64) -> Product {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).single().unwrap_or_default();
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: "Test product".to_owned(),
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

/// A color variant belonging to some product under test.
pub fn color(id: &str, name: &str) -> ColorVariant {
    ColorVariant {
        id: ColorVariantId::new(id),
        name: name.to_owned(),
        hex_code: "#336699".to_owned(),
        stock: 5,
    }
}
