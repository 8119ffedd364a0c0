//! # Storage Adapters
//!
//! The pluggable persistence seam for the cart store.
//!
//! ## The Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartStorage trait                                  │
//! │                                                                         │
//! │            CartStore ──► save(snapshot) / load()                        │
//! │                               │                                         │
//! │              ┌────────────────┴────────────────┐                        │
//! │              ▼                                 ▼                        │
//! │     ┌─────────────────┐              ┌──────────────────┐              │
//! │     │  MemoryStorage  │              │  JsonFileStorage │              │
//! │     │  (session/test) │              │  (app data dir)  │              │
//! │     └─────────────────┘              └──────────────────┘              │
//! │                                                                         │
//! │  The store never knows which backend it talks to. Swapping backends    │
//! │  is a constructor argument, not a code change.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both adapters treat the snapshot as one opaque JSON blob under one fixed
//! name, mirroring a scoped key-value store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::snapshot::CartSnapshot;

/// File name of the persisted blob inside the data directory.
const STORAGE_FILE: &str = "cart.json";

/// Environment override for the data directory (development convenience).
const DATA_DIR_ENV: &str = "SHOPFRONT_DATA_DIR";

// =============================================================================
// CartStorage Trait
// =============================================================================

/// A narrow save/load interface over one named snapshot blob.
///
/// ## Contract
/// - `save` replaces the whole blob (last write wins)
/// - `load` returns `Ok(None)` when no blob exists yet, and `Err` when a
///   blob exists but cannot be read or parsed
///
/// The store treats both `Ok(None)` and `Err` as an empty cart at startup,
/// and logs-and-ignores `save` failures. Adapters only report; policy lives
/// in the store.
pub trait CartStorage: Send + Sync {
    /// Persists the full snapshot, replacing any previous blob.
    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()>;

    /// Loads the snapshot, or `None` if nothing has been persisted yet.
    fn load(&self) -> StorageResult<Option<CartSnapshot>>;
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage holding the serialized blob.
///
/// Clones share the same underlying blob, so a test can keep a handle to
/// the storage it handed to a store and inspect what was written:
///
/// ```rust
/// use shopfront_store::{CartStore, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// let store = CartStore::new(storage.clone());
/// assert!(storage.raw().is_none()); // nothing persisted yet
/// # drop(store);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with a raw blob, valid or not.
    ///
    /// Used to exercise rehydration paths against arbitrary persisted data.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStorage {
            blob: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// Returns the currently stored raw blob, if any.
    pub fn raw(&self) -> Option<String> {
        self.blob.lock().expect("storage mutex poisoned").clone()
    }
}

impl CartStorage for MemoryStorage {
    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()> {
        let raw = serde_json::to_string(snapshot)?;
        *self.blob.lock().expect("storage mutex poisoned") = Some(raw);
        Ok(())
    }

    fn load(&self) -> StorageResult<Option<CartSnapshot>> {
        let guard = self.blob.lock().expect("storage mutex poisoned");
        match guard.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }
}

// =============================================================================
// JsonFileStorage
// =============================================================================

/// File-backed storage: one JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Creates a storage under the platform app-data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.shopfront.shopfront/cart.json`
    /// - **Windows**: `%APPDATA%\shopfront\shopfront\data\cart.json`
    /// - **Linux**: `~/.local/share/shopfront/cart.json`
    ///
    /// ## Development Override
    /// Set `SHOPFRONT_DATA_DIR` to use a custom directory instead.
    pub fn in_app_data() -> StorageResult<Self> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => ProjectDirs::from("com", "shopfront", "shopfront")
                .ok_or(StorageError::NoDataDir)?
                .data_dir()
                .to_path_buf(),
        };

        fs::create_dir_all(&data_dir)?;
        Ok(JsonFileStorage {
            path: data_dir.join(STORAGE_FILE),
        })
    }

    /// Returns the path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()> {
        let raw = serde_json::to_string(snapshot)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "cart snapshot written");
        Ok(())
    }

    fn load(&self) -> StorageResult<Option<CartSnapshot>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Cart, Money, Product};

    fn sample_snapshot() -> CartSnapshot {
        let mut cart = Cart::new();
        cart.add(&Product::new(
            "P-001",
            "Arcade Tee",
            "Soft cotton tee",
            Money::from_cents(2499),
            "/images/arcade-tee.png",
        ));
        cart.increment("P-001");
        CartSnapshot::from(&cart)
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&sample_snapshot()).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.cart_items.len(), 1);
        assert_eq!(loaded.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_memory_storage_clones_share_blob() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.save(&sample_snapshot()).unwrap();

        assert!(handle.raw().unwrap().contains("cartItems"));
    }

    #[test]
    fn test_memory_storage_rejects_invalid_blob() {
        let storage = MemoryStorage::with_raw("{ not json");
        assert!(matches!(storage.load(), Err(StorageError::Serde(_))));
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE));

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE));

        storage.save(&sample_snapshot()).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.cart_items[0].product.id, "P-001");
        assert_eq!(loaded.cart_items[0].quantity, 2);
    }

    #[test]
    fn test_file_storage_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "][ definitely not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::Serde(_))));
    }

    #[test]
    fn test_file_storage_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE));

        storage.save(&sample_snapshot()).unwrap();
        storage.save(&CartSnapshot::default()).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert!(loaded.cart_items.is_empty());
    }
}
