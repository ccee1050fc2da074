//! The cart store: owned state, injected persistence, observable reads.
//!
//! `CartStore` is the single writer for the line-item collection. Every
//! mutation runs a pure transition from [`crate::reducer`], persists the new
//! collection synchronously, and then notifies subscribers. Reads never
//! mutate. The store is an explicitly owned value handed to whoever needs it;
//! there is no ambient singleton.

use core::fmt;

use kalspire_core::{ColorVariant, ColorVariantId, Product, ProductId};
use rust_decimal::Decimal;
use tracing::debug;

use crate::checkout::{self, OrderItemInput};
use crate::error::StorageError;
use crate::line_item::CartLineItem;
use crate::reducer;
use crate::repository::CartRepository;
use crate::storage::DurableSlot;

type Listener = Box<dyn Fn(&[CartLineItem])>;

/// Owned, locally persisted shopping cart.
pub struct CartStore<S: DurableSlot> {
    items: Vec<CartLineItem>,
    repository: CartRepository<S>,
    listeners: Vec<Listener>,
}

impl<S: DurableSlot> CartStore<S> {
    /// Open the store, restoring the persisted collection.
    ///
    /// The slot is read exactly once here; all later reads are in-memory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot cannot be read.
    pub fn open(repository: CartRepository<S>) -> Result<Self, StorageError> {
        let items = repository.load()?;
        debug!(line_items = items.len(), "cart store opened");
        Ok(Self {
            items,
            repository,
            listeners: Vec::new(),
        })
    }

    /// Add `quantity` units of `product`, merging into an existing line item
    /// with the same identity key.
    ///
    /// Stock is not checked here; the server enforces it at order creation.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the new collection fails.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&ColorVariant>,
    ) -> Result<(), StorageError> {
        debug!(product_id = %product.id, quantity, "cart add");
        self.apply(|items| reducer::add(items, product, quantity, color))
    }

    /// Remove the line item matching `(product_id, color_id | none)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the new collection fails.
    pub fn remove(
        &mut self,
        product_id: &ProductId,
        color_id: Option<&ColorVariantId>,
    ) -> Result<(), StorageError> {
        debug!(%product_id, "cart remove");
        self.apply(|items| reducer::remove(items, product_id, color_id))
    }

    /// Set the matching line item's quantity; `quantity <= 0` removes it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the new collection fails.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
        color_id: Option<&ColorVariantId>,
    ) -> Result<(), StorageError> {
        debug!(%product_id, quantity, "cart set quantity");
        self.apply(|items| reducer::set_quantity(items, product_id, quantity, color_id))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting the empty collection fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        debug!("cart clear");
        self.apply(reducer::clear)
    }

    /// Register a read-only observer called after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[CartLineItem]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        reducer::total_item_count(&self.items)
    }

    /// Sum of line totals at snapshotted prices.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        reducer::total_price(&self.items)
    }

    /// Snapshot the current line items as order-creation inputs.
    ///
    /// The caller owns the order call; on success it clears this store.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItemInput> {
        checkout::order_items(&self.items)
    }

    /// Replace the collection via a pure transition, persist it, and notify
    /// subscribers. Old collection -> new collection wholesale; no partial
    /// state is ever observable.
    fn apply(
        &mut self,
        transition: impl FnOnce(Vec<CartLineItem>) -> Vec<CartLineItem>,
    ) -> Result<(), StorageError> {
        let current = std::mem::take(&mut self.items);
        self.items = transition(current);
        self.repository.save(&self.items)?;
        for listener in &self.listeners {
            listener(&self.items);
        }
        Ok(())
    }
}

impl<S: DurableSlot> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
