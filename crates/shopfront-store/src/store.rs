//! # Cart Store
//!
//! The owned, injectable state container for the cart.
//!
//! ## Commit Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Mutation, Start to Finish                        │
//! │                                                                         │
//! │  view calls store.add_item(&product)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Lock cart, apply the operation                                      │
//! │       │         changed? ──no──► return (no write, no notification)     │
//! │       ▼ yes                                                             │
//! │  2. Clone the new state, release the lock                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. storage.save(snapshot)   best-effort: failure is logged, never      │
//! │       │                      surfaced to the caller                     │
//! │       ▼                                                                 │
//! │  4. Invoke every subscriber synchronously with the new state            │
//! │                                                                         │
//! │  Exactly one mutation runs to completion before the next starts.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart lives behind a `Mutex` so the store is `Send + Sync` and can be
//! shared behind an `Arc` by whatever runtime embeds it. The intended usage
//! is still a single logical thread of user-triggered events; nothing here
//! suspends, blocks on I/O completion, or runs in the background.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::{debug, warn};

use shopfront_core::{Cart, Money, Product};

use crate::snapshot::CartSnapshot;
use crate::storage::{CartStorage, MemoryStorage};

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle identifying a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registered observer callback.
struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn Fn(&Cart) + Send>,
}

// =============================================================================
// CartStore
// =============================================================================

/// Holds the cart, persists it after every committed mutation, and notifies
/// subscribers.
///
/// ## Construction
/// The store is an explicit instance with an injected storage backend,
/// never a hidden global. Tests construct independent stores with their own
/// adapters:
///
/// ```rust
/// use shopfront_store::{CartStore, MemoryStorage};
/// use shopfront_core::{Money, Product};
///
/// let store = CartStore::new(MemoryStorage::new());
/// let tee = Product::new(
///     "P-001",
///     "Arcade Tee",
///     "Soft cotton tee",
///     Money::from_cents(2499),
///     "/images/arcade-tee.png",
/// );
///
/// store.add_item(&tee);
/// store.increment_quantity("P-001");
/// assert_eq!(store.subtotal().to_string(), "$49.98");
/// ```
///
/// ## Startup
/// `new` rehydrates from the storage backend. A missing, unreadable or
/// malformed snapshot yields an empty cart; startup never propagates an
/// error to the caller.
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Box<dyn CartStorage>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
}

impl CartStore {
    /// Creates a store backed by the given storage, rehydrating from it.
    pub fn new<S: CartStorage + 'static>(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(snapshot)) => snapshot.into_cart(),
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(error = %err, "failed to load cart snapshot, starting empty");
                Cart::new()
            }
        };
        debug!(entries = cart.entry_count(), "cart store initialized");

        CartStore {
            cart: Mutex::new(cart),
            storage: Box::new(storage),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Creates a store with a fresh in-memory backend.
    ///
    /// Session-scoped: nothing survives the process.
    pub fn in_memory() -> Self {
        CartStore::new(MemoryStorage::new())
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------
    // All four are synchronous and total: they never fail for well-formed
    // input, and operating on an absent product id is a no-op.

    /// Adds a product to the cart with quantity 1.
    ///
    /// ## Behavior
    /// - Product absent: a new entry is appended with quantity 1
    /// - Product already in the cart: no-op, the quantity does NOT change
    ///
    /// Use [`CartStore::increment_quantity`] to raise the count of a
    /// product that is already in the cart.
    pub fn add_item(&self, product: &Product) {
        debug!(product_id = %product.id, "add_item");
        self.commit(|cart| cart.add(product));
    }

    /// Removes a product's entry entirely, regardless of its quantity.
    ///
    /// No-op if the product is not in the cart.
    pub fn remove_item(&self, product_id: &str) {
        debug!(product_id = %product_id, "remove_item");
        self.commit(|cart| cart.remove(product_id));
    }

    /// Increases a product's quantity by 1. No configured upper bound.
    ///
    /// No-op if the product is not in the cart.
    pub fn increment_quantity(&self, product_id: &str) {
        debug!(product_id = %product_id, "increment_quantity");
        self.commit(|cart| cart.increment(product_id));
    }

    /// Decreases a product's quantity by 1, removing the entry at 0.
    ///
    /// Decrement and possible removal are one atomic step: callers cannot
    /// observe a quantity-0 entry. No-op if the product is not in the cart.
    pub fn decrement_quantity(&self, product_id: &str) {
        debug!(product_id = %product_id, "decrement_quantity");
        self.commit(|cart| cart.decrement(product_id));
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    /// Returns an owned snapshot of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.lock().expect("cart mutex poisoned").clone()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store.with_cart(|cart| cart.entry_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Checks whether a product id is currently in the cart.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.with_cart(|cart| cart.contains(product_id))
    }

    /// Returns the current subtotal over all entries.
    pub fn subtotal(&self) -> Money {
        self.with_cart(Cart::subtotal)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a callback invoked after every committed mutation.
    ///
    /// ## Contract
    /// - The callback runs synchronously on the mutating thread, after the
    ///   new state is committed and the persistence write was attempted
    /// - It receives the new state as an immutable snapshot
    /// - Every committed mutation is observed; no-op calls are not
    /// - The callback must not call back into this store
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("subscriber mutex poisoned")
            .push(Subscriber {
                id,
                callback: Box::new(callback),
            });
        id
    }

    /// Removes a previously registered callback. No-op for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("subscriber mutex poisoned")
            .retain(|s| s.id != id);
    }

    // -------------------------------------------------------------------------
    // Commit internals
    // -------------------------------------------------------------------------

    /// Applies a mutation; on change, persists and notifies.
    ///
    /// The cart lock is released before persistence and notification run,
    /// so subscribers see a settled immutable snapshot.
    fn commit<F>(&self, mutate: F)
    where
        F: FnOnce(&mut Cart) -> bool,
    {
        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            if !mutate(&mut cart) {
                return;
            }
            cart.clone()
        };

        self.persist(&snapshot);
        self.notify(&snapshot);
    }

    /// Best-effort persistence write. Failures are logged, never raised.
    fn persist(&self, cart: &Cart) {
        if let Err(err) = self.storage.save(&CartSnapshot::from(cart)) {
            warn!(error = %err, "failed to persist cart snapshot");
        }
    }

    /// Invokes every registered subscriber with the new state.
    fn notify(&self, cart: &Cart) {
        let subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
        for subscriber in subscribers.iter() {
            (subscriber.callback)(cart);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field(
                "subscribers",
                &self
                    .subscribers
                    .lock()
                    .expect("subscriber mutex poisoned")
                    .len(),
            )
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
