//! # Persistence Adapter
//!
//! The inventory never talks to a disk or database directly. It is handed a
//! [`KeyValueStore`]: an async get/set map from string keys to string payloads.
//!
//! - [`MemoryStore`] keeps everything in a `HashMap` and can inject failures or
//!   suspension points, which is what the tests use.
//! - [`JsonFileStore`] writes one JSON file per key into a data directory.
//!
//! Stores are shared by wrapping them in an `Arc`; the blanket impl below lets
//! the repository own an `Arc<S>` while a test keeps another handle to inspect it.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the operation (e.g. an injected failure).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Asynchronous string key-value persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if nothing was written yet.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the payload stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }
}
