//! Cart line items and their identity.
//!
//! A line item pairs a product snapshot with a quantity and an optional
//! explicit color choice. Two cart operations refer to the same purchasable
//! unit iff their [`LineItemKey`]s are equal.

use kalspire_core::{ColorVariant, ColorVariantId, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a selected color variant.
///
/// Captures the identifier and display fields at add-to-cart time. The
/// variant's live stock count is deliberately not carried here; stock is only
/// checked server-side at order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSelection {
    pub id: ColorVariantId,
    pub name: String,
    pub hex_code: String,
}

impl From<&ColorVariant> for ColorSelection {
    fn from(variant: &ColorVariant) -> Self {
        Self {
            id: variant.id.clone(),
            name: variant.name.clone(),
            hex_code: variant.hex_code.clone(),
        }
    }
}

/// One entry in the cart.
///
/// `product` is a denormalized snapshot captured when the item was added, so
/// the cart page can render without a re-fetch. Price and stock in the
/// snapshot go stale if the catalog changes afterwards; that staleness is
/// accepted and surfaced only by the order-creation call at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub product: Product,
    /// Always >= 1; transitions requesting less remove the item instead.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<ColorSelection>,
}

impl CartLineItem {
    /// Snapshot a product (and optional color choice) into a new line item.
    pub(crate) fn snapshot(product: &Product, quantity: u32, color: Option<&ColorVariant>) -> Self {
        Self {
            product_id: product.id.clone(),
            product: product.clone(),
            quantity,
            selected_color: color.map(ColorSelection::from),
        }
    }

    /// The identity key of this line item.
    #[must_use]
    pub fn key(&self) -> LineItemKey<'_> {
        LineItemKey::new(&self.product_id, self.selected_color.as_ref().map(|c| &c.id))
    }

    /// Line total at the snapshotted unit price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Identity key of a cart entry: `(productId, colorVariantId | none)`.
///
/// Two keys are equal iff the product matches and either both sides carry no
/// color choice or both select the same color ID. A color-free entry is never
/// identical to a colored entry for the same product, even when that color is
/// the only one offered: entries are partitioned strictly by explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineItemKey<'a> {
    product_id: &'a ProductId,
    color_id: Option<&'a ColorVariantId>,
}

impl<'a> LineItemKey<'a> {
    /// Create a key from a product reference and an optional color choice.
    #[must_use]
    pub const fn new(product_id: &'a ProductId, color_id: Option<&'a ColorVariantId>) -> Self {
        Self {
            product_id,
            color_id,
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        self.product_id
    }

    #[must_use]
    pub const fn color_id(&self) -> Option<&ColorVariantId> {
        self.color_id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn cid(s: &str) -> ColorVariantId {
        ColorVariantId::new(s)
    }

    #[test]
    fn test_same_product_same_color_is_identical() {
        let (p, c) = (pid("p1"), cid("c1"));
        assert_eq!(
            LineItemKey::new(&p, Some(&c)),
            LineItemKey::new(&p, Some(&c))
        );
    }

    #[test]
    fn test_colorless_never_matches_colored() {
        let (p, c) = (pid("p1"), cid("c1"));
        assert_ne!(LineItemKey::new(&p, None), LineItemKey::new(&p, Some(&c)));
    }

    #[test]
    fn test_different_products_never_match() {
        let (p1, p2) = (pid("p1"), pid("p2"));
        assert_ne!(LineItemKey::new(&p1, None), LineItemKey::new(&p2, None));
    }

    #[test]
    fn test_different_colors_never_match() {
        let p = pid("p1");
        let (c1, c2) = (cid("c1"), cid("c2"));
        assert_ne!(
            LineItemKey::new(&p, Some(&c1)),
            LineItemKey::new(&p, Some(&c2))
        );
    }

    #[test]
    fn test_color_selection_snapshots_display_fields() {
        let variant = ColorVariant {
            id: cid("c1"),
            name: "Forest".to_owned(),
            hex_code: "#228b22".to_owned(),
            stock: 4,
        };
        let selection = ColorSelection::from(&variant);
        assert_eq!(selection.id, variant.id);
        assert_eq!(selection.name, "Forest");
        assert_eq!(selection.hex_code, "#228b22");
    }
}
