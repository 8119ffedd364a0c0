//! # Error Types
//!
//! Storage-layer errors for shopfront-store.
//!
//! The cart operations themselves are total and never fail. The only thing
//! that can go wrong in this crate is talking to a storage backend, and the
//! store swallows even that (write failures are logged, read failures fall
//! back to an empty cart). `StorageError` exists so adapters can report
//! *what* went wrong to the store and to tests.

use thiserror::Error;

/// Errors raised by a [`CartStorage`](crate::storage::CartStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying blob could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The blob exists but is not a valid snapshot.
    #[error("snapshot is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    /// No platform app-data directory could be determined.
    #[error("could not determine app data directory")]
    NoDataDir,
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;
