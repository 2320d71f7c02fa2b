//! Session lifecycle for the cart.
//!
//! The cart is not ambient state. A [`CartSession`] is explicitly
//! constructed at session start - which hydrates the persisted snapshot -
//! handed by reference to consumers, and torn down with [`CartSession::end`]
//! when the owning session closes. Because no session value exists until
//! hydration completes, a mutation can never race the initial read.

use crate::error::CartError;
use crate::manager::CartManager;
use crate::store::CartStore;

/// An active (or ended) cart session.
///
/// Consumers reach the cart only through [`cart`](Self::cart) and
/// [`cart_mut`](Self::cart_mut); after [`end`](Self::end) both fail with
/// [`CartError::ContextUnavailable`].
#[derive(Debug)]
pub struct CartSession<S> {
    manager: Option<CartManager<S>>,
}

impl<S: CartStore> CartSession<S> {
    /// Start a session: hydrate the persisted snapshot into memory.
    pub async fn start(store: S) -> Self {
        Self {
            manager: Some(CartManager::hydrate(store).await),
        }
    }

    /// Read access to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ContextUnavailable`] once the session ended.
    pub fn cart(&self) -> Result<&CartManager<S>, CartError> {
        self.manager.as_ref().ok_or(CartError::ContextUnavailable)
    }

    /// Mutating access to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ContextUnavailable`] once the session ended.
    pub fn cart_mut(&mut self) -> Result<&mut CartManager<S>, CartError> {
        self.manager.as_mut().ok_or(CartError::ContextUnavailable)
    }

    /// Whether the session is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.manager.is_some()
    }

    /// End the session, discarding the in-memory cart.
    ///
    /// The durable mirror keeps whatever the last mutation wrote; there is
    /// no teardown write. Ending an already-ended session is a no-op.
    pub fn end(&mut self) {
        if self.manager.take().is_some() {
            tracing::debug!("cart session ended");
        }
    }
}
