//! Unified error type for the cart surface.
//!
//! Everything a consumer can hit through [`crate::CartSession`] funnels into
//! [`CartError`]. Store and encoding failures are logged at the point they
//! occur and propagated here so callers can decide whether to surface them.

use thiserror::Error;

use basket_core::CartItemError;

use crate::store::StoreError;

/// Errors surfaced by the cart session and manager.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart was accessed through a session that has ended.
    ///
    /// This is the one deliberate, user-visible failure of the design:
    /// consumers must hold an active session to touch the cart.
    #[error("cart context unavailable: session is not active")]
    ContextUnavailable,

    /// A mutation input failed validation at the boundary.
    #[error("invalid cart item: {0}")]
    InvalidItem(#[from] CartItemError),

    /// The durable store failed.
    #[error("cart store error: {0}")]
    Store(#[from] StoreError),

    /// The snapshot could not be encoded for persistence.
    #[error("cart snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
