//! Snapshot wire format.
//!
//! The persisted value is the JSON array encoding of the cart entries:
//! `[{"id": ..., "title": ..., "image_url": ..., "price": ..., "quantity": ...}, ...]`.
//! Field names are part of the storage contract - any prior snapshot must
//! round-trip unchanged.

use thiserror::Error;

use basket_core::{CartEntry, CartState, CartStateError};

/// Errors that can occur when decoding a persisted snapshot.
///
/// Hydration treats all of these as "no snapshot": a mirror that cannot be
/// decoded, or that violates the cart's structural invariants, must not be
/// allowed to seed the in-memory state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The stored string is not valid JSON for the expected shape.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded entries violate a cart invariant.
    #[error("inconsistent snapshot: {0}")]
    State(#[from] CartStateError),
}

/// Encode a cart state into its persisted string form.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails; with this data
/// model that indicates a bug rather than bad input.
pub fn encode(state: &CartState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state.entries())
}

/// Decode a persisted string back into a cart state.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] for malformed JSON or field-level
/// validation failures, and [`SnapshotError::State`] when the decoded
/// entries break id uniqueness or contain a zero quantity.
pub fn decode(raw: &str) -> Result<CartState, SnapshotError> {
    let entries: Vec<CartEntry> = serde_json::from_str(raw)?;
    Ok(CartState::from_entries(entries)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use basket_core::CartItem;

    use super::*;

    fn state_with(ids: &[&str]) -> CartState {
        let mut state = CartState::new();
        for id in ids {
            let item =
                CartItem::new(id, format!("Item {id}"), "u", Decimal::new(1000, 2)).unwrap();
            state = state.with_added(&item);
        }
        state
    }

    #[test]
    fn test_empty_cart_encodes_to_empty_array() {
        assert_eq!(encode(&CartState::new()).unwrap(), "[]");
    }

    #[test]
    fn test_roundtrip() {
        let state = state_with(&["p1", "p2"]).with_incremented(&"p1".parse().unwrap());
        let decoded = decode(&encode(&state).unwrap()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_decode_fixed_wire_shape() {
        // A snapshot written by any prior version must keep decoding
        let raw = r#"[{"id":"p1","title":"Shirt","image_url":"u","price":10.5,"quantity":2}]"#;
        let state = decode(raw).unwrap();

        let entry = state.get(&"p1".parse().unwrap()).unwrap();
        assert_eq!(entry.title, "Shirt");
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.price.amount(), Decimal::new(105, 1));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(matches!(
            decode(r#"{"id":"p1"}"#),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty_id() {
        let raw = r#"[{"id":"","title":"t","image_url":"u","price":1,"quantity":1}]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let raw = r#"[
            {"id":"p1","title":"t","image_url":"u","price":1,"quantity":1},
            {"id":"p1","title":"t","image_url":"u","price":1,"quantity":1}
        ]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::State(_))));
    }

    #[test]
    fn test_decode_rejects_zero_quantity() {
        let raw = r#"[{"id":"p1","title":"t","image_url":"u","price":1,"quantity":0}]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::State(_))));
    }
}
