//! Checkout hand-off payload.
//!
//! The cart hands a snapshot of its line items to the external order-creation
//! call and does not await or interpret the result. Stock and price are
//! validated server-side there; the surrounding application clears the cart
//! once the order is accepted.

use kalspire_core::ProductId;
use serde::Serialize;

use crate::line_item::{CartLineItem, ColorSelection};

/// One line of the order-creation request body.
///
/// Serialized camelCase to match the orders API:
/// `{ "productId": ..., "quantity": ..., "selectedColor"?: ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<ColorSelection>,
}

impl From<&CartLineItem> for OrderItemInput {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            selected_color: item.selected_color.clone(),
        }
    }
}

/// Convert the current line items into order-creation inputs, in cart order.
#[must_use]
pub fn order_items(items: &[CartLineItem]) -> Vec<OrderItemInput> {
    items.iter().map(OrderItemInput::from).collect()
}
