//! Unit price type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative unit price.
///
/// The cart stores prices without interpreting them - no currency handling,
/// no arithmetic beyond display totals. The persisted encoding is a bare
/// JSON number, so any prior snapshot round-trips unchanged.
///
/// ## Examples
///
/// ```
/// use basket_core::Price;
/// use rust_decimal::Decimal;
///
/// assert!(Price::new(Decimal::new(1050, 2)).is_ok()); // 10.50
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }

        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_non_negative() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(999, 2)).is_ok());
    }

    #[test]
    fn test_new_negative() {
        let result = Price::new(Decimal::new(-100, 2));
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        // -0.00 normalizes to a valid zero price
        let neg_zero = Decimal::new(0, 2) * Decimal::NEGATIVE_ONE;
        assert!(Price::new(neg_zero).is_ok());
    }

    #[test]
    fn test_display_two_places() {
        let price = Price::new(Decimal::new(105, 1)).unwrap(); // 10.5
        assert_eq!(format!("{price}"), "10.50");
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price::new(Decimal::new(1050, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        // Bare number, not a quoted string
        assert!(!json.contains('"'), "expected a JSON number, got {json}");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-1.5").is_err());
    }

    #[test]
    fn test_deserialize_integer_literal() {
        let price: Price = serde_json::from_str("10").unwrap();
        assert_eq!(price.amount(), Decimal::new(10, 0));
    }
}
