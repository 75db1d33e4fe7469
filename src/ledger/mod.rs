//! # Ledger Actor
//!
//! Serialized access to an [`InventoryRepository`](crate::inventory::InventoryRepository).
//!
//! ## Why an Actor?
//!
//! The repository rewrites the whole collection on every mutation and takes no
//! lock, so two overlapping calls can lose an update. The ledger gives the
//! repository a single owner: a Tokio task that receives requests over an mpsc
//! channel and applies them one after another. Callers hold a [`LedgerClient`],
//! which can be cloned freely and shared across tasks.
//!
//! ## Structure
//!
//! - [`LedgerActor`] - the task that owns the repository
//! - [`LedgerClient`] - the cloneable handle
//! - [`LedgerRequest`] - the messages between them
//! - [`mock`] - helpers for testing client code without an actor
//!
//! ## Usage
//!
//! ```rust
//! use palengke::clock::SystemClock;
//! use palengke::inventory::InventoryRepository;
//! use palengke::ledger::LedgerActor;
//! use palengke::model::ProductInput;
//! use palengke::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = InventoryRepository::new(MemoryStore::new(), Arc::new(SystemClock));
//!     let (actor, client) = LedgerActor::new(repo, 32);
//!     tokio::spawn(actor.run());
//!
//!     client.add_product(ProductInput::new("p1", "Rice", 45.0, 52.0, 10)).await?;
//!     client.sell_product("p1").await?;
//!     assert_eq!(client.list_products().await?[0].stock, 9);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod message;
pub mod mock;

pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use message::{LedgerRequest, Response};
