//! # shopfront-store: Cart State & Persistence for Shopfront
//!
//! Owns the cart, persists it, and tells the views when it changed.
//!
//! ## Module Organization
//! ```text
//! shopfront_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: operations, commits, subscriptions
//! ├── storage.rs      ◄─── CartStorage trait + memory/file adapters
//! ├── snapshot.rs     ◄─── Persisted wire format ({ cartItems: [...] })
//! ├── catalog.rs      ◄─── Static demo product list
//! └── error.rs        ◄─── StorageError
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  user action ──► CartStore operation ──► cart mutates                   │
//! │                                             │                           │
//! │                              ┌──────────────┴──────────────┐            │
//! │                              ▼                             ▼            │
//! │                    CartStorage.save(snapshot)     subscribers notified  │
//! │                    (best-effort, never fails      (synchronously, with  │
//! │                     the mutation)                  the new state)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopfront_store::{catalog, CartStore, MemoryStorage};
//!
//! let store = CartStore::new(MemoryStorage::new());
//!
//! let products = catalog::products();
//! store.add_item(&products[0]);
//! store.increment_quantity(&products[0].id);
//!
//! assert!(store.is_in_cart(&products[0].id));
//! assert_eq!(store.with_cart(|cart| cart.total_quantity()), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod snapshot;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use snapshot::CartSnapshot;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::{CartStore, SubscriptionId};

// Re-export the core types so consumers need a single dependency
pub use shopfront_core::{Cart, CartEntry, Money, Product};
