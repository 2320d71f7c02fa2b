//! End-to-end cart session flows.
//!
//! These tests drive the cart exactly the way a presentation layer would:
//! start a session, mutate through it, read the in-memory view, and check
//! that the durable mirror tracks every settled mutation.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use basket_cart::{CART_KEY, CartError, CartSession, CartStore, FileStore, MemoryStore, snapshot};
use basket_core::{CartItem, ProductId};

fn item(id: &str, title: &str, price_cents: i64) -> CartItem {
    let image_url = format!("https://cdn.example/{id}.jpg");
    CartItem::new(id, title, image_url, Decimal::new(price_cents, 2)).unwrap()
}

fn pid(id: &str) -> ProductId {
    id.parse().unwrap()
}

// =============================================================================
// Session flow over the in-memory store
// =============================================================================

#[tokio::test]
async fn test_full_shopping_flow() {
    let store = MemoryStore::new();
    let mut session = CartSession::start(store.clone()).await;

    let cart = session.cart_mut().unwrap();
    cart.add_to_cart(item("shirt", "Shirt", 1999)).await.unwrap();
    cart.add_to_cart(item("mug", "Mug", 899)).await.unwrap();
    cart.add_to_cart(item("shirt", "Shirt", 1999)).await.unwrap();
    cart.increment(&pid("mug")).await.unwrap();
    cart.decrement(&pid("shirt")).await.unwrap();

    let products = session.cart().unwrap().products();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id.as_str(), "shirt");
    assert_eq!(products[0].quantity, 1);
    assert_eq!(products[1].id.as_str(), "mug");
    assert_eq!(products[1].quantity, 2);

    // The mirror holds the same state the reader sees
    let raw = store.get(CART_KEY).await.unwrap().unwrap();
    assert_eq!(snapshot::decode(&raw).unwrap(), *session.cart().unwrap().state());
}

#[tokio::test]
async fn test_no_op_mutation_still_persists() {
    let store = MemoryStore::new();
    let mut session = CartSession::start(store.clone()).await;

    session
        .cart_mut()
        .unwrap()
        .add_to_cart(item("shirt", "Shirt", 1999))
        .await
        .unwrap();
    store.remove(CART_KEY).await.unwrap();

    session
        .cart_mut()
        .unwrap()
        .increment(&pid("not-in-cart"))
        .await
        .unwrap();

    // The unchanged snapshot was written back
    let raw = store.get(CART_KEY).await.unwrap().unwrap();
    let mirrored = snapshot::decode(&raw).unwrap();
    assert_eq!(mirrored.len(), 1);
    assert_eq!(mirrored.get(&pid("shirt")).unwrap().quantity, 1);
}

#[tokio::test]
async fn test_ended_session_refuses_access() {
    let mut session = CartSession::start(MemoryStore::new()).await;
    session
        .cart_mut()
        .unwrap()
        .add_to_cart(item("shirt", "Shirt", 1999))
        .await
        .unwrap();

    session.end();

    assert!(matches!(session.cart(), Err(CartError::ContextUnavailable)));
    assert!(matches!(
        session.cart_mut(),
        Err(CartError::ContextUnavailable)
    ));
}

// =============================================================================
// Restarts over the file-backed store
// =============================================================================

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First session: fill the cart, then drop everything in memory
    {
        let store = FileStore::open(dir.path()).await.unwrap();
        let mut session = CartSession::start(store).await;
        let cart = session.cart_mut().unwrap();
        cart.add_to_cart(item("shirt", "Shirt", 1999)).await.unwrap();
        cart.add_to_cart(item("shirt", "Shirt", 1999)).await.unwrap();
        cart.add_to_cart(item("mug", "Mug", 899)).await.unwrap();
        session.end();
    }

    // Second session: hydration restores the previous state
    let store = FileStore::open(dir.path()).await.unwrap();
    let session = CartSession::start(store).await;
    let products = session.cart().unwrap().products();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id.as_str(), "shirt");
    assert_eq!(products[0].quantity, 2);
    assert_eq!(products[1].id.as_str(), "mug");
    assert_eq!(products[1].quantity, 1);
}

#[tokio::test]
async fn test_cleared_cart_stays_empty_after_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).await.unwrap();
        let mut session = CartSession::start(store).await;
        let cart = session.cart_mut().unwrap();
        cart.add_to_cart(item("shirt", "Shirt", 1999)).await.unwrap();
        cart.clear().await.unwrap();
    }

    let store = FileStore::open(dir.path()).await.unwrap();
    let session = CartSession::start(store).await;
    assert!(session.cart().unwrap().products().is_empty());
}

#[tokio::test]
async fn test_corrupt_mirror_hydrates_empty() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).await.unwrap();
        store.set(CART_KEY, "][ not json".to_owned()).await.unwrap();
    }

    let store = FileStore::open(dir.path()).await.unwrap();
    let session = CartSession::start(store).await;
    assert!(session.cart().unwrap().products().is_empty());
}
