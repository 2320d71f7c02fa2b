//! Basket Cart - the cart state machine and its durable mirror.
//!
//! The canonical cart lives in memory, owned by a [`CartManager`] inside an
//! explicitly constructed [`CartSession`]. Every mutation computes the next
//! [`basket_core::CartState`] value, installs it as the visible state, and
//! mirrors the same value into a key-value store under one well-known key,
//! so the cart survives application restarts. Consumers read only the
//! in-memory state; the store is read once, at session start.
//!
//! # Example
//!
//! ```
//! use basket_cart::{CartSession, MemoryStore};
//! use basket_core::CartItem;
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), basket_cart::CartError> {
//! let mut session = CartSession::start(MemoryStore::new()).await;
//!
//! let shirt = CartItem::new("p1", "Shirt", "https://cdn/p1.jpg", Decimal::new(1000, 2))?;
//! session.cart_mut()?.add_to_cart(shirt).await?;
//!
//! assert_eq!(session.cart()?.products().len(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod manager;
pub mod session;
pub mod snapshot;
pub mod store;

pub use error::CartError;
pub use manager::CartManager;
pub use session::CartSession;
pub use store::{CART_KEY, CartStore, FileStore, MemoryStore, StoreError};
