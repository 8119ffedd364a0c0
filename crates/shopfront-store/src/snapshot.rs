//! # Cart Snapshot
//!
//! The serializable representation of the cart at a point in time.
//!
//! ## Persisted Layout
//! One named blob containing:
//! ```text
//! {
//!   "cartItems": [
//!     {
//!       "product": {
//!         "id": "P-001",
//!         "name": "Arcade Tee",
//!         "description": "Soft cotton tee",
//!         "price": 2499,
//!         "imageUrl": "/images/arcade-tee.png"
//!       },
//!       "quantity": 2
//!     }
//!   ]
//! }
//! ```
//!
//! Rehydration tolerates a missing blob, a syntactically invalid blob, and
//! unknown extra fields (serde ignores them). Entries that violate the cart
//! invariants are dropped by [`Cart::from_entries`] rather than trusted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use shopfront_core::{Cart, CartEntry};

/// The persisted form of a [`Cart`].
///
/// The field name `cartItems` is the wire contract with previously written
/// blobs; changing it orphans every existing snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Entries in insertion order.
    pub cart_items: Vec<CartEntry>,
}

impl CartSnapshot {
    /// Converts the snapshot back into a cart, sanitizing invalid entries.
    pub fn into_cart(self) -> Cart {
        Cart::from_entries(self.cart_items)
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            cart_items: cart.entries().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, Product};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            format!("Description for {}", id),
            Money::from_cents(price_cents),
            format!("/images/{}.png", id),
        )
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let mut cart = Cart::new();
        cart.add(&test_product("P-001", 2499));
        cart.increment("P-001");

        let snapshot = CartSnapshot::from(&cart);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["cartItems"][0]["quantity"], 2);
        assert_eq!(json["cartItems"][0]["product"]["id"], "P-001");
        assert_eq!(json["cartItems"][0]["product"]["price"], 2499);
        assert_eq!(
            json["cartItems"][0]["product"]["imageUrl"],
            "/images/P-001.png"
        );
    }

    #[test]
    fn test_round_trip_preserves_ids_order_quantities() {
        let mut cart = Cart::new();
        cart.add(&test_product("b", 1000));
        cart.add(&test_product("a", 500));
        cart.increment("a");
        cart.add(&test_product("c", 250));

        let blob = serde_json::to_string(&CartSnapshot::from(&cart)).unwrap();
        let restored: CartSnapshot = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored.into_cart(), cart);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // A forward-compatible reader: newer writers may add fields
        let blob = r#"{
            "cartItems": [
                {
                    "product": {
                        "id": "P-001",
                        "name": "Arcade Tee",
                        "description": "Soft cotton tee",
                        "price": 2499,
                        "imageUrl": "/images/arcade-tee.png",
                        "stock": 12
                    },
                    "quantity": 2,
                    "addedAt": "2024-01-01T00:00:00Z"
                }
            ],
            "schemaVersion": 2
        }"#;

        let snapshot: CartSnapshot = serde_json::from_str(blob).unwrap();
        let cart = snapshot.into_cart();

        assert!(cart.contains("P-001"));
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn test_into_cart_sanitizes_invalid_entries() {
        let product = test_product("P-001", 2499);
        let snapshot = CartSnapshot {
            cart_items: vec![
                CartEntry {
                    product: product.clone(),
                    quantity: 0,
                },
                CartEntry {
                    product: product.clone(),
                    quantity: 3,
                },
            ],
        };

        let cart = snapshot.into_cart();
        // The zero-quantity entry is dropped; the valid one survives
        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.entries()[0].quantity, 3);
    }
}
