//! Pure cart state transitions and derived aggregates.
//!
//! Every operation is a total function from the current ordered line-item
//! collection to a new collection. Invalid input never errors: a requested
//! quantity at or below zero means removal, and remove/set calls that match
//! nothing are no-ops. Stock is deliberately not checked here - callers that
//! want a guard validate before calling, and the server enforces stock at
//! order creation.

use kalspire_core::{ColorVariant, ColorVariantId, Product, ProductId};
use rust_decimal::Decimal;

use crate::line_item::{CartLineItem, LineItemKey};

/// Add `quantity` units of a product (with an optional explicit color choice).
///
/// Merges into an existing line item with the same identity key by summing
/// quantities; otherwise appends a fresh snapshot line item. Adding zero
/// units leaves the collection unchanged.
#[must_use]
pub fn add(
    mut items: Vec<CartLineItem>,
    product: &Product,
    quantity: u32,
    color: Option<&ColorVariant>,
) -> Vec<CartLineItem> {
    if quantity == 0 {
        return items;
    }

    let key = LineItemKey::new(&product.id, color.map(|c| &c.id));
    if let Some(existing) = items.iter_mut().find(|item| item.key() == key) {
        existing.quantity = existing.quantity.saturating_add(quantity);
        return items;
    }

    items.push(CartLineItem::snapshot(product, quantity, color));
    items
}

/// Delete every line item matching the identity key.
///
/// Omitting `color_id` removes only the color-free entry for that product;
/// color-specific entries stay untouched.
#[must_use]
pub fn remove(
    items: Vec<CartLineItem>,
    product_id: &ProductId,
    color_id: Option<&ColorVariantId>,
) -> Vec<CartLineItem> {
    let key = LineItemKey::new(product_id, color_id);
    items.into_iter().filter(|item| item.key() != key).collect()
}

/// Set the matching line item's quantity to an absolute value.
///
/// A quantity at or below zero is equivalent to [`remove`]. When no line item
/// matches the key, the collection is returned unchanged.
#[must_use]
pub fn set_quantity(
    mut items: Vec<CartLineItem>,
    product_id: &ProductId,
    quantity: i64,
    color_id: Option<&ColorVariantId>,
) -> Vec<CartLineItem> {
    if quantity <= 0 {
        return remove(items, product_id, color_id);
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let key = LineItemKey::new(product_id, color_id);
    if let Some(item) = items.iter_mut().find(|item| item.key() == key) {
        item.quantity = quantity;
    }
    items
}

/// Empty the collection unconditionally.
#[must_use]
pub fn clear(mut items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    items.clear();
    items
}

// =============================================================================
// Derived Aggregates
// =============================================================================

/// Sum of quantities across all line items.
///
/// Recomputed on every call; carts are small enough that caching would buy
/// nothing.
#[must_use]
pub fn total_item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of `quantity x unit price` using the price snapshotted at add time.
///
/// A server-side price change after add-to-cart is not reflected until the
/// surrounding application refreshes the snapshot.
#[must_use]
pub fn total_price(items: &[CartLineItem]) -> Decimal {
    items.iter().map(CartLineItem::line_total).sum()
}
