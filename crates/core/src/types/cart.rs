//! Cart entry and cart state value types.
//!
//! [`CartState`] is the canonical in-memory state of the cart: an ordered,
//! id-unique sequence of [`CartEntry`] values. All mutation goes through the
//! pure `with_*` transition functions, which return the next state value.
//! The manager hands that same value to both the visible state and the
//! persistence write, so the persisted snapshot always encodes the state
//! that was just computed.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::item::CartItem;
use super::price::Price;

/// One line item in the cart.
///
/// Field names match the persisted JSON shape exactly:
/// `{"id", "title", "image_url", "price", "quantity"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// Product id, unique within a cart.
    pub id: ProductId,
    /// Display name, copied from the item at insertion and never updated.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units, always at least 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// Line total for this entry.
    #[must_use]
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.price.amount() * rust_decimal::Decimal::from(self.quantity)
    }
}

impl From<&CartItem> for CartEntry {
    /// A fresh entry starts at quantity 1.
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// Errors that can occur when building a [`CartState`] from raw entries.
#[derive(thiserror::Error, Debug, Clone)]
pub enum CartStateError {
    /// Two entries share the same product id.
    #[error("duplicate product id in cart: {0}")]
    DuplicateId(ProductId),
    /// An entry has quantity zero.
    #[error("entry {0} has zero quantity")]
    ZeroQuantity(ProductId),
}

/// The full cart: an ordered, id-unique collection of entries.
///
/// Entries keep insertion order. No id appears twice, and every live entry
/// has quantity >= 1 - decrementing an entry at quantity 1 removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a cart from decoded entries, checking the structural invariants.
    ///
    /// Used when hydrating a persisted snapshot: a snapshot that violates
    /// id uniqueness or contains a dead entry is malformed and callers
    /// should treat it as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CartStateError::DuplicateId`] if two entries share an id,
    /// or [`CartStateError::ZeroQuantity`] if an entry has quantity 0.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CartStateError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.quantity == 0 {
                return Err(CartStateError::ZeroQuantity(entry.id.clone()));
            }
            if entries
                .iter()
                .take(i)
                .any(|earlier| earlier.id == entry.id)
            {
                return Err(CartStateError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up an entry by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Subtotal across all entries.
    #[must_use]
    pub fn subtotal(&self) -> rust_decimal::Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Next state after adding `item` to the cart.
    ///
    /// If an entry with the same id already exists its quantity goes up by
    /// one and no other field is touched; otherwise a fresh entry is
    /// appended with quantity 1. Adding the same item twice is therefore
    /// identical to adding it once and incrementing it.
    #[must_use]
    pub fn with_added(&self, item: &CartItem) -> Self {
        let mut entries = self.entries.clone();

        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
        } else {
            entries.push(CartEntry::from(item));
        }

        Self { entries }
    }

    /// Next state after incrementing the entry with `id`.
    ///
    /// A missing id leaves the state unchanged; the caller still persists
    /// the (unchanged) snapshot.
    #[must_use]
    pub fn with_incremented(&self, id: &ProductId) -> Self {
        let mut entries = self.entries.clone();

        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == *id) {
            entry.quantity = entry.quantity.saturating_add(1);
        }

        Self { entries }
    }

    /// Next state after decrementing the entry with `id`.
    ///
    /// An entry at quantity 1 is removed, keeping `quantity >= 1` true for
    /// every live entry. A missing id leaves the state unchanged.
    #[must_use]
    pub fn with_decremented(&self, id: &ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                if entry.id == *id {
                    if entry.quantity > 1 {
                        let mut next = entry.clone();
                        next.quantity -= 1;
                        Some(next)
                    } else {
                        None
                    }
                } else {
                    Some(entry.clone())
                }
            })
            .collect();

        Self { entries }
    }
}
