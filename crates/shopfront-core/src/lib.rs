//! # shopfront-core: Pure Domain Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the cart domain
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (external)                         │   │
//! │  │       Product List View ──► Cart View ──► Navigation            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ subscription interface                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-store                              │   │
//! │  │     CartStore, CartStorage adapters, snapshot, catalog          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐          │   │
//! │  │   │   money   │      │   types   │      │   cart    │          │   │
//! │  │   │   Money   │      │  Product  │      │   Cart    │          │   │
//! │  │   │ formatting│      │           │      │ CartEntry │          │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic and fixed-locale display
//! - [`types`] - Catalog domain types (Product)
//! - [`cart`] - The cart collection, its four operations and its queries
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart operations never fail; absent ids are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Cart, Money, Product};
//!
//! let tee = Product::new(
//!     "P-001",
//!     "Arcade Tee",
//!     "Soft cotton tee",
//!     Money::from_cents(2499),
//!     "/images/arcade-tee.png",
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&tee);
//! cart.increment("P-001");
//!
//! assert!(cart.contains("P-001"));
//! assert_eq!(cart.subtotal().to_string(), "$49.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use cart::{Cart, CartEntry};
pub use money::Money;
pub use types::Product;
