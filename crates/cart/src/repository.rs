//! Durable-slot repositories for cart and wishlist state.
//!
//! Repositories own the (de)serialization of store state under a fixed slot
//! key, keeping the reducers free of any storage concern. Load happens once
//! when a store is opened; save runs synchronously after every mutation, with
//! no debouncing or batching.

use kalspire_core::ProductId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StorageError;
use crate::line_item::CartLineItem;
use crate::storage::DurableSlot;

/// Slot key the cart collection is persisted under.
pub const CART_SLOT_KEY: &str = "cart-storage";

/// Slot key the wishlist is persisted under.
pub const WISHLIST_SLOT_KEY: &str = "wishlist-storage";

/// Persisted document shape: `{ "items": [...] }`.
#[derive(Debug, Deserialize)]
struct ItemsDocument<T> {
    items: Vec<T>,
}

#[derive(Serialize)]
struct ItemsDocumentRef<'a, T> {
    items: &'a [T],
}

/// The stored shape is unversioned. Contents that no longer decode (e.g.,
/// written by an incompatible earlier build) are treated as absent rather
/// than surfaced as an error.
fn load_items<T, S>(slot: &S, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
    S: DurableSlot,
{
    let Some(raw) = slot.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<ItemsDocument<T>>(&raw) {
        Ok(document) => Ok(document.items),
        Err(e) => {
            warn!(key, error = %e, "discarding undecodable slot contents");
            Ok(Vec::new())
        }
    }
}

fn save_items<T, S>(slot: &S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: DurableSlot,
{
    let raw = serde_json::to_string(&ItemsDocumentRef { items }).map_err(StorageError::Encode)?;
    slot.write(key, &raw)
}

/// Repository persisting the cart line-item collection.
#[derive(Debug)]
pub struct CartRepository<S> {
    slot: S,
    key: String,
}

impl<S: DurableSlot> CartRepository<S> {
    /// Create a repository over `slot` using the default cart key.
    #[must_use]
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, CART_SLOT_KEY)
    }

    /// Create a repository over `slot` with a custom slot key.
    #[must_use]
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Load the persisted collection; an absent or undecodable slot yields an
    /// empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot cannot be read.
    pub fn load(&self) -> Result<Vec<CartLineItem>, StorageError> {
        load_items(&self.slot, &self.key)
    }

    /// Persist the collection, replacing the previous slot contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the slot write fails.
    pub fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        save_items(&self.slot, &self.key, items)
    }
}

/// Repository persisting the wishlist product-ID collection.
#[derive(Debug)]
pub struct WishlistRepository<S> {
    slot: S,
    key: String,
}

impl<S: DurableSlot> WishlistRepository<S> {
    /// Create a repository over `slot` using the default wishlist key.
    #[must_use]
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, WISHLIST_SLOT_KEY)
    }

    /// Create a repository over `slot` with a custom slot key.
    #[must_use]
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Load the persisted wishlist; an absent or undecodable slot yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot cannot be read.
    pub fn load(&self) -> Result<Vec<ProductId>, StorageError> {
        load_items(&self.slot, &self.key)
    }

    /// Persist the wishlist, replacing the previous slot contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the slot write fails.
    pub fn save(&self, items: &[ProductId]) -> Result<(), StorageError> {
        save_items(&self.slot, &self.key, items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::line_item::CartLineItem;
    use crate::storage::MemorySlot;
    use crate::test_util::{color, product};

    #[test]
    fn test_load_absent_slot_yields_empty_cart() {
        let repo = CartRepository::new(MemorySlot::new());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_cart_roundtrip_is_structurally_exact() {
        let slot = MemorySlot::new();
        let repo = CartRepository::new(slot);

        let c = color("c1", "Slate");
        let items = vec![
            CartLineItem::snapshot(&product("p1", 1099), 2, None),
            CartLineItem::snapshot(&product("p2", 5000), 1, Some(&c)),
            CartLineItem::snapshot(&product("p3", 250), 7, None),
        ];

        repo.save(&items).unwrap();
        let restored = repo.load().unwrap();

        assert_eq!(restored, items);
    }

    #[test]
    fn test_undecodable_slot_is_treated_as_absent() {
        let slot = MemorySlot::new();
        slot.write(CART_SLOT_KEY, "not json at all").unwrap();

        let repo = CartRepository::new(slot);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_persisted_layout_uses_items_envelope_and_camel_case() {
        let slot = MemorySlot::new();
        let repo = CartRepository::new(slot.clone());

        let items = vec![CartLineItem::snapshot(&product("p1", 1099), 2, None)];
        repo.save(&items).unwrap();

        let raw = slot.read(CART_SLOT_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value["items"][0];
        assert_eq!(entry["productId"], "p1");
        assert_eq!(entry["quantity"], 2);
        // Color-free entries omit the selectedColor field entirely.
        assert!(entry.get("selectedColor").is_none());
    }

    #[test]
    fn test_wishlist_roundtrip() {
        let repo = WishlistRepository::new(MemorySlot::new());
        let ids = vec![ProductId::new("p1"), ProductId::new("p2")];

        repo.save(&ids).unwrap();
        assert_eq!(repo.load().unwrap(), ids);
    }

    #[test]
    fn test_cart_and_wishlist_keys_do_not_collide() {
        let slot = MemorySlot::new();
        let cart = CartRepository::new(slot.clone());
        let wishlist = WishlistRepository::new(slot);

        cart.save(&[CartLineItem::snapshot(&product("p1", 100), 1, None)])
            .unwrap();
        wishlist.save(&[ProductId::new("p2")]).unwrap();

        assert_eq!(cart.load().unwrap().len(), 1);
        assert_eq!(wishlist.load().unwrap(), vec![ProductId::new("p2")]);
    }
}
