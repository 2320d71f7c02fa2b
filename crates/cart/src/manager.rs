//! Cart state manager.
//!
//! [`CartManager`] owns the canonical in-memory [`CartState`] and keeps the
//! durable store eventually consistent with it. Mutation follows one
//! pattern throughout: compute the next state value, encode the snapshot
//! from that same value, install it as the visible state, then await the
//! store write. The snapshot therefore always encodes the state that was
//! just computed - never a stale capture from before the mutation.

use basket_core::{CartEntry, CartItem, CartState, ProductId};

use crate::error::CartError;
use crate::snapshot;
use crate::store::{CART_KEY, CartStore};

/// Owns the in-memory cart and mirrors every mutation into the store.
///
/// The manager is single-owner: all access goes through `&self`/`&mut self`,
/// so mutations are applied in call order and no two store writes to the
/// well-known key can overlap.
#[derive(Debug)]
pub struct CartManager<S> {
    store: S,
    state: CartState,
}

impl<S: CartStore> CartManager<S> {
    /// Load the persisted snapshot and build a ready manager.
    ///
    /// A missing snapshot hydrates to an empty cart silently; an unreadable
    /// store or a malformed snapshot also hydrate to an empty cart, with a
    /// warning logged. Malformed data is never fatal.
    pub async fn hydrate(store: S) -> Self {
        let state = match store.get(CART_KEY).await {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("discarding unusable cart snapshot: {e}");
                    CartState::new()
                }
            },
            Ok(None) => CartState::new(),
            Err(e) => {
                tracing::warn!("cart store unreadable, starting empty: {e}");
                CartState::new()
            }
        };

        tracing::debug!(entries = state.len(), "cart hydrated");
        Self { store, state }
    }

    /// Current cart entries, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[CartEntry] {
        self.state.entries()
    }

    /// The full cart state value.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Add `item` to the cart.
    ///
    /// An existing entry with the same id gains one unit (its other fields
    /// are left as first inserted); otherwise a fresh quantity-1 entry is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the mirror write fails. The
    /// in-memory state is already updated by then; the failure is logged
    /// and the caller may ignore it.
    pub async fn add_to_cart(&mut self, item: CartItem) -> Result<(), CartError> {
        let next = self.state.with_added(&item);
        self.commit(next).await
    }

    /// Increment the quantity of the entry with `id`.
    ///
    /// A missing id leaves the cart unchanged, but the (unchanged)
    /// snapshot is still written to the store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the mirror write fails.
    pub async fn increment(&mut self, id: &ProductId) -> Result<(), CartError> {
        let next = self.state.with_incremented(id);
        self.commit(next).await
    }

    /// Decrement the quantity of the entry with `id`.
    ///
    /// An entry at quantity 1 is removed. A missing id leaves the cart
    /// unchanged, but the snapshot is still written.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the mirror write fails.
    pub async fn decrement(&mut self, id: &ProductId) -> Result<(), CartError> {
        let next = self.state.with_decremented(id);
        self.commit(next).await
    }

    /// Empty the cart and delete the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the delete fails; the in-memory
    /// cart is already empty by then.
    pub async fn clear(&mut self) -> Result<(), CartError> {
        self.state = CartState::new();

        if let Err(e) = self.store.remove(CART_KEY).await {
            tracing::error!("failed to delete cart snapshot: {e}");
            return Err(e.into());
        }

        tracing::debug!("cart cleared");
        Ok(())
    }

    /// Install `next` as the visible state and mirror it to the store.
    ///
    /// Encoding happens before installation, from the same value that
    /// becomes visible. In-memory visibility does not wait on the write:
    /// readers see `next` even if the store call then fails.
    async fn commit(&mut self, next: CartState) -> Result<(), CartError> {
        let payload = snapshot::encode(&next)?;
        self.state = next;

        if let Err(e) = self.store.set(CART_KEY, payload).await {
            tracing::error!("failed to persist cart snapshot: {e}");
            return Err(e.into());
        }

        Ok(())
    }
}
