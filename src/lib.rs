//! # PALengke Inventory Ledger
//!
//! > **Stock, sales and profit tracking for a small vendor's store.**
//!
//! This crate is the bookkeeping core of a storefront app: it keeps the product
//! catalog, appends a log entry for every sale and restock, and derives the
//! dashboard figures (profit, capital, per-day profit) from that log.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Document, One Owner
//!
//! The whole collection is a single JSON document under a single key. Every
//! mutation reads it, changes it, and writes it back. That keeps persistence
//! trivial (any async key-value store will do) but means two overlapping
//! mutations can lose an update. The [`ledger`] actor fixes that by giving the
//! repository exactly one owner that handles requests sequentially.
//!
//! ### Explicit Dependencies
//!
//! Nothing is global. The store ([`storage::KeyValueStore`]) and the clock
//! ([`clock::Clock`]) are injected, which is also what makes the date-window
//! tests deterministic.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: [`Product`](model::Product), its [`StockLog`](model::StockLog)
//!   events, and the stats structures returned to the dashboard.
//!
//! ### 2. The Ledger ([`inventory`], [`stats`])
//! - **Role**: read-modify-write operations on the collection, and the folds
//!   that turn the event logs into numbers.
//! - **Key items**: [`InventoryRepository`](inventory::InventoryRepository),
//!   [`calculate_stats`](stats::calculate_stats), [`profit_per_day`](stats::profit_per_day).
//!
//! ### 3. The Plumbing ([`storage`], [`clock`], [`config`])
//! - **Role**: pluggable persistence and time, plus runtime settings.
//!
//! ### 4. The Actor ([`ledger`], [`lifecycle`])
//! - **Role**: serialized access through a cloneable [`LedgerClient`](ledger::LedgerClient),
//!   and the [`Storefront`](lifecycle::Storefront) that starts and stops it.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Seed the sample catalog, record a few sales, print the dashboard
//! RUST_LOG=info cargo run
//!
//! # Keep the data somewhere else
//! PALENGKE_DATA_DIR=/tmp/palengke cargo run
//! ```

pub mod clock;
pub mod config;
pub mod inventory;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod stats;
pub mod storage;
