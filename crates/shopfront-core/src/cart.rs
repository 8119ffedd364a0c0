//! # Cart Collection
//!
//! The ordered cart collection and its four mutating operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation                 Collection Change   │
//! │  ───────────              ─────────                 ─────────────────   │
//! │                                                                         │
//! │  "Add to cart" ──────────► add(product) ──────────► push entry, qty 1   │
//! │                            (no-op if present)                           │
//! │                                                                         │
//! │  "+" button ─────────────► increment(id) ─────────► entry.quantity += 1 │
//! │                                                                         │
//! │  "-" button ─────────────► decrement(id) ─────────► quantity -= 1,      │
//! │                                                     remove at 0         │
//! │                                                                         │
//! │  "Remove" button ────────► remove(id) ────────────► delete entry        │
//! │                                                                         │
//! │  NOTE: Every operation is total. Operating on an absent product id      │
//! │        is a no-op, never an error.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per product id at any time
//! - `quantity >= 1` while an entry exists; a decrement to 0 removes it
//! - Entries keep insertion order

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Entry
// =============================================================================

/// One distinct product's presence in the cart.
///
/// ## Snapshot Copy
/// The entry owns a value copy of the product, frozen at the moment it was
/// added. There is no live link back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    /// Frozen copy of the catalog record.
    pub product: Product,

    /// Count of this product in the cart. Always >= 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// Creates a new entry for a product with quantity 1.
    pub fn new(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The ordered collection of cart entries for the current session.
///
/// `Cart` is a plain value type. Ownership, persistence and change
/// notification live in `shopfront-store`; everything here is a pure
/// collection operation or a pure query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from previously persisted entries.
    ///
    /// ## Sanitation
    /// Persisted data is outside our control, so entries that violate the
    /// cart invariants are dropped rather than trusted:
    /// - entries with `quantity == 0`
    /// - later duplicates of a product id (first occurrence wins)
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut items: Vec<CartEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.quantity == 0 {
                continue;
            }
            if items.iter().any(|i| i.product.id == entry.product.id) {
                continue;
            }
            items.push(entry);
        }
        Cart { items }
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------
    // Each returns `true` iff the collection changed, so the owning store
    // knows whether there is anything to persist and announce.

    /// Adds a product to the cart with quantity 1.
    ///
    /// ## Behavior
    /// - If the product is not in the cart: appends a new entry, quantity 1
    /// - If the product is already in the cart: no-op (membership, not count)
    ///
    /// Increasing the count of an existing entry is [`Cart::increment`]'s
    /// job, not this one's.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(CartEntry::new(product));
        true
    }

    /// Removes an entry entirely, regardless of its quantity.
    ///
    /// No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() != initial_len
    }

    /// Increases an entry's quantity by 1.
    ///
    /// No-op if the product is not in the cart. There is no upper bound:
    /// unbounded growth is the intended behavior.
    pub fn increment(&mut self, product_id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(entry) => {
                entry.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decreases an entry's quantity by 1, removing the entry at 0.
    ///
    /// ## Behavior
    /// Decrement and possible removal are one atomic step: a quantity-1
    /// entry disappears from the cart. No-op if the product is absent.
    pub fn decrement(&mut self, product_id: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i.product.id == product_id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Checks whether a product id is in the cart. O(n) scan.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Sums `price × quantity` over all entries.
    ///
    /// Returns [`Money::zero`] for an empty cart. Never fails for a
    /// well-formed cart: prices are non-negative and quantities positive.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartEntry::line_total).sum()
    }

    /// Returns the total quantity across all entries.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Returns the number of distinct products in the cart.
    pub fn entry_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_cart_contains_nothing() {
        let cart = Cart::new();
        assert!(!cart.contains("1"));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_add_makes_product_a_member() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        assert!(cart.add(&product));

        assert!(cart.contains("1"));
        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.entries()[0].quantity, 1);
    }

    #[test]
    fn test_add_is_idempotent_on_membership() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        assert!(cart.add(&product));
        // Second add is a no-op, NOT an increment
        assert!(!cart.add(&product));

        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.entries()[0].quantity, 1);
    }

    #[test]
    fn test_increment_then_decrement_is_net_zero() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);
        cart.add(&product);

        assert!(cart.increment("1"));
        assert_eq!(cart.entries()[0].quantity, 2);

        assert!(cart.decrement("1"));
        assert_eq!(cart.entries()[0].quantity, 1);
    }

    #[test]
    fn test_decrement_at_quantity_one_removes_entry() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);
        cart.add(&product);

        assert!(cart.decrement("1"));

        assert!(!cart.contains("1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_deletes_regardless_of_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);
        cart.add(&product);
        cart.increment("1");
        cart.increment("1");
        assert_eq!(cart.entries()[0].quantity, 3);

        assert!(cart.remove("1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_operations_on_absent_product_are_no_ops() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);
        cart.add(&product);
        let before = cart.clone();

        assert!(!cart.remove("missing"));
        assert!(!cart.increment("missing"));
        assert!(!cart.decrement("missing"));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 1000)); // $10.00
        cart.increment("1"); // qty 2
        cart.add(&test_product("2", 500)); // $5.00, qty 1

        // 10 * 2 + 5 * 1 = 25
        assert_eq!(cart.subtotal(), Money::from_cents(2500));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product("b", 100));
        cart.add(&test_product("a", 200));
        cart.add(&test_product("c", 300));

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_entries_drops_zero_quantities() {
        let product = test_product("1", 999);
        let entries = vec![CartEntry {
            product: product.clone(),
            quantity: 0,
        }];

        let cart = Cart::from_entries(entries);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_entries_drops_duplicate_ids() {
        let product = test_product("1", 999);
        let entries = vec![
            CartEntry {
                product: product.clone(),
                quantity: 2,
            },
            CartEntry {
                product: product.clone(),
                quantity: 5,
            },
        ];

        let cart = Cart::from_entries(entries);
        assert_eq!(cart.entry_count(), 1);
        // First occurrence wins
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn test_line_total() {
        let product = test_product("1", 299);
        let mut entry = CartEntry::new(&product);
        entry.quantity = 3;
        assert_eq!(entry.line_total(), Money::from_cents(897));
    }
}
