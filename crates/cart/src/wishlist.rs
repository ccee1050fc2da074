//! The wishlist store: an ordered, de-duplicated set of product IDs.
//!
//! Unlike the cart, the wishlist holds references only - no snapshots, no
//! quantities. The storefront re-fetches product data when rendering it, so
//! there is nothing to go stale here.

use kalspire_core::ProductId;
use tracing::debug;

use crate::error::StorageError;
use crate::repository::WishlistRepository;
use crate::storage::DurableSlot;

/// Owned, locally persisted wishlist.
#[derive(Debug)]
pub struct WishlistStore<S: DurableSlot> {
    items: Vec<ProductId>,
    repository: WishlistRepository<S>,
}

impl<S: DurableSlot> WishlistStore<S> {
    /// Open the store, restoring the persisted list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot cannot be read.
    pub fn open(repository: WishlistRepository<S>) -> Result<Self, StorageError> {
        let items = repository.load()?;
        debug!(entries = items.len(), "wishlist store opened");
        Ok(Self { items, repository })
    }

    /// Add a product; already-present products are left in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn add(&mut self, product_id: ProductId) -> Result<(), StorageError> {
        if self.contains(&product_id) {
            return Ok(());
        }
        debug!(%product_id, "wishlist add");
        self.items.push(product_id);
        self.repository.save(&self.items)
    }

    /// Remove a product; removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StorageError> {
        let before = self.items.len();
        self.items.retain(|id| id != product_id);
        if self.items.len() == before {
            return Ok(());
        }
        debug!(%product_id, "wishlist remove");
        self.repository.save(&self.items)
    }

    /// Add the product if absent, remove it if present. Returns whether the
    /// product is in the wishlist afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn toggle(&mut self, product_id: ProductId) -> Result<bool, StorageError> {
        if self.contains(&product_id) {
            self.remove(&product_id)?;
            Ok(false)
        } else {
            self.add(product_id)?;
            Ok(true)
        }
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.repository.save(&self.items)
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    /// Saved product IDs, oldest first.
    #[must_use]
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Number of saved products (the header badge count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
