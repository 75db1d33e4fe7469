//! Error types for the inventory ledger.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during inventory operations.
///
/// Unknown ids and depleted stock are not errors: those operations complete
/// and leave the collection unchanged.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Writing the collection back to the store failed.
    #[error("Inventory storage error: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be encoded as JSON.
    #[error("Inventory encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A restock would push stock past the largest representable level.
    /// Nothing is written.
    #[error("Restocking {id} by {quantity} overflows its stock level")]
    StockOverflow { id: String, quantity: i64 },

    /// The ledger actor is no longer accepting requests.
    #[error("Ledger actor closed")]
    ActorClosed,

    /// The ledger actor dropped the request without answering.
    #[error("Ledger actor dropped response channel")]
    ActorDropped,
}
