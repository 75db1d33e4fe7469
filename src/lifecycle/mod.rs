//! # Storefront Lifecycle
//!
//! Starting, wiring and stopping the ledger.
//!
//! - [`Storefront`] builds an [`InventoryRepository`](crate::inventory::InventoryRepository)
//!   over an injected store and clock, hands it to a
//!   [`LedgerActor`](crate::ledger::LedgerActor), and spawns the actor.
//! - [`Storefront::shutdown`] drops the client and awaits the actor task.
//! - [`setup_tracing`] installs the log subscriber used by the demo binary.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued
//!    requests are handled
//! 3. **Await completion** - the task handle reports a panic, if any

pub mod storefront;
pub mod tracing;

pub use storefront::Storefront;
pub use self::tracing::setup_tracing;
