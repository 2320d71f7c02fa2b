//! Core types for Basket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod item;
pub mod price;

pub use cart::{CartEntry, CartState, CartStateError};
pub use id::{ProductId, ProductIdError};
pub use item::{CartItem, CartItemError};
pub use price::{Price, PriceError};
