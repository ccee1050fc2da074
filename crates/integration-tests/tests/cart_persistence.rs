//! Reload round-trips through the filesystem-backed durable slot.
//!
//! These tests exercise the full open -> mutate -> drop -> reopen cycle the
//! storefront goes through on every page reload.

#![allow(clippy::unwrap_used)]

use std::fs;

use kalspire_cart::{
    CART_SLOT_KEY, CartRepository, CartStore, FileSlot, WishlistRepository, WishlistStore,
};
use kalspire_core::ProductId;
use kalspire_integration_tests::{color, product, product_with_colors};

fn open_cart(slot: FileSlot) -> CartStore<FileSlot> {
    CartStore::open(CartRepository::new(slot)).unwrap()
}

#[test]
fn three_item_cart_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let slate = color("c-slate", "Slate", "#708090");

    let mut store = open_cart(FileSlot::new(dir.path()));
    store.add(&product("p1", 1099), 2, None).unwrap();
    store
        .add(
            &product_with_colors("p2", 5000, vec![slate.clone()]),
            1,
            Some(&slate),
        )
        .unwrap();
    store.add(&product("p3", 250), 7, None).unwrap();
    let saved_items = store.items().to_vec();
    drop(store);

    let restored = open_cart(FileSlot::new(dir.path()));

    // Structural equality: same products, quantities, and color selections,
    // in the same order.
    assert_eq!(restored.items(), saved_items.as_slice());
    assert_eq!(restored.total_item_count(), 10);
}

#[test]
fn reopened_cart_keeps_merging_by_identity_key() {
    let dir = tempfile::tempdir().unwrap();
    let p = product("p1", 1000);

    let mut store = open_cart(FileSlot::new(dir.path()));
    store.add(&p, 2, None).unwrap();
    drop(store);

    let mut store = open_cart(FileSlot::new(dir.path()));
    store.add(&p, 3, None).unwrap();

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.total_item_count(), 5);
}

#[test]
fn corrupt_slot_file_opens_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(format!("{CART_SLOT_KEY}.json")),
        "{\"items\": [{\"broken\"",
    )
    .unwrap();

    let store = open_cart(FileSlot::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn mutation_after_corrupt_open_rewrites_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{CART_SLOT_KEY}.json"));
    fs::write(&path, "garbage").unwrap();

    let mut store = open_cart(FileSlot::new(dir.path()));
    store.add(&product("p1", 1000), 1, None).unwrap();
    drop(store);

    let restored = open_cart(FileSlot::new(dir.path()));
    assert_eq!(restored.items().len(), 1);
}

#[test]
fn wishlist_round_trips_alongside_cart() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(FileSlot::new(dir.path()));
    cart.add(&product("p1", 1000), 1, None).unwrap();

    let mut wishlist =
        WishlistStore::open(WishlistRepository::new(FileSlot::new(dir.path()))).unwrap();
    wishlist.add(ProductId::new("p2")).unwrap();
    wishlist.add(ProductId::new("p3")).unwrap();
    drop((cart, wishlist));

    let cart = open_cart(FileSlot::new(dir.path()));
    let wishlist =
        WishlistStore::open(WishlistRepository::new(FileSlot::new(dir.path()))).unwrap();

    assert_eq!(cart.items().len(), 1);
    assert_eq!(wishlist.len(), 2);
    assert!(wishlist.contains(&ProductId::new("p3")));
}
