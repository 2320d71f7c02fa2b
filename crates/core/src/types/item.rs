//! Catalog item handed to the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, ProductIdError};
use super::price::{Price, PriceError};

/// Errors that can occur when constructing a [`CartItem`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CartItemError {
    /// The product id is invalid.
    #[error("invalid product id: {0}")]
    Id(#[from] ProductIdError),
    /// The price is invalid.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
}

/// A catalog item as handed to `add_to_cart`.
///
/// This is the cart's input boundary: the id and price fields are validated
/// newtypes, so a malformed item cannot be constructed and therefore cannot
/// enter the cart state. Title and image URL are display data the core
/// stores without interpreting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Catalog-assigned product id, the merge key for cart entries.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl CartItem {
    /// Build a `CartItem` from unvalidated parts.
    ///
    /// # Errors
    ///
    /// Returns [`CartItemError::Id`] for an empty or oversized id, and
    /// [`CartItemError::Price`] for a negative price.
    pub fn new(
        id: &str,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, CartItemError> {
        Ok(Self {
            id: ProductId::parse(id)?,
            title: title.into(),
            image_url: image_url.into(),
            price: Price::new(price)?,
        })
    }
}
