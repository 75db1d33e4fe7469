//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Ledger lifecycle**: actor start and shutdown, with the storage key
//! - **Requests**: every ledger request at `debug`, outcome at `info`/`warn`
//! - **Mutations**: `Added`, `Sold`, `Restocked` with the product id span
//! - **No-ops**: unknown ids and depleted stock at `warn`
//! - **Recovered failures**: unreadable or unparseable inventory at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Request payloads
//! RUST_LOG=debug cargo run
//!
//! # Raw store traffic
//! RUST_LOG=palengke::storage=trace cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO Ledger started key="inventory"
//! INFO add_product: Added id="sample-1" size=1
//! INFO Request ok operation="LoadSampleData"
//! INFO sell_product: Sold id="sample-1" sold=1
//! WARN sell_product: Not found id="nope"
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
