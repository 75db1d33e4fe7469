//! # Inventory Repository
//!
//! Reads and writes the whole product collection as one JSON document under a
//! single key, and implements the add / sell / restock operations on it.
//!
//! ## Read-Modify-Write
//!
//! Every mutation loads the entire collection, changes it in memory, and writes
//! the entire collection back. There is no per-product write and no lock.
//!
//! ## Lost Updates
//!
//! [`InventoryRepository`] does **not** serialize callers. Two overlapping
//! mutations on the same repository can both read the same base collection; the
//! second write then silently discards the first one. Callers that may overlap
//! should go through the [`ledger`](crate::ledger) actor instead, which owns a
//! repository and applies requests one at a time.
//!
//! ## Failure Policy
//!
//! - Read failures and unparseable payloads are logged and treated as an empty
//!   collection.
//! - Write failures are returned to the caller.
//! - An unknown id, or a sale on zero stock, is a no-op. The (unchanged)
//!   collection is still written back.

mod error;
pub mod sample;

pub use error::*;

use crate::clock::{format_timestamp, Clock};
use crate::model::{DailyProfit, InventoryStats, Product, ProductInput};
use crate::stats;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "inventory";

pub struct InventoryRepository<S: KeyValueStore> {
    store: S,
    key: String,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore> InventoryRepository<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            clock,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the persisted collection, or an empty one if nothing usable is stored.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn list_products(&self) -> Vec<Product> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read inventory, using empty collection");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Failed to parse inventory, using empty collection");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self, input), fields(id = %input.id))]
    pub async fn add_product(&self, input: ProductInput) -> Result<(), InventoryError> {
        debug!(?input, "add_product called");
        let mut products = self.list_products().await;
        products.push(Product::from_input(input));
        self.persist(&products).await?;
        info!(size = products.len(), "Added");
        Ok(())
    }

    /// Sells one unit of every product with this id that has stock on hand.
    #[instrument(skip(self))]
    pub async fn sell_product(&self, id: &str) -> Result<(), InventoryError> {
        let mut products = self.list_products().await;
        let timestamp = self.timestamp();

        let mut matched = 0;
        let mut sold = 0;
        for product in products.iter_mut().filter(|p| p.id == id) {
            matched += 1;
            if product.record_sale(&timestamp) {
                sold += 1;
            }
        }

        self.persist(&products).await?;
        match (matched, sold) {
            (0, _) => warn!("Not found"),
            (_, 0) => warn!("Out of stock"),
            _ => info!(sold, "Sold"),
        }
        Ok(())
    }

    /// Adds `quantity` to every product with this id. The quantity is not
    /// validated: zero or negative values are applied and logged as given.
    ///
    /// A restock whose result does not fit the stock level fails with
    /// [`InventoryError::StockOverflow`] and leaves the stored collection as is.
    #[instrument(skip(self))]
    pub async fn restock_product(&self, id: &str, quantity: i64) -> Result<(), InventoryError> {
        let mut products = self.list_products().await;
        let timestamp = self.timestamp();

        let mut matched = 0;
        for product in products.iter_mut().filter(|p| p.id == id) {
            if !product.record_restock(quantity, &timestamp) {
                warn!(stock = product.stock, "Restock overflows stock level");
                return Err(InventoryError::StockOverflow {
                    id: id.to_string(),
                    quantity,
                });
            }
            matched += 1;
        }

        self.persist(&products).await?;
        if matched == 0 {
            warn!("Not found");
        } else {
            if quantity <= 0 {
                warn!("Non-positive restock applied");
            }
            info!(matched, "Restocked");
        }
        Ok(())
    }

    /// Adds every built-in sample product, one `add_product` at a time.
    #[instrument(skip(self))]
    pub async fn load_sample_data(&self) -> Result<(), InventoryError> {
        for input in sample::sample_products() {
            self.add_product(input).await?;
        }
        Ok(())
    }

    pub async fn calculate_stats(&self) -> InventoryStats {
        let products = self.list_products().await;
        stats::calculate_stats(&products, self.clock.now())
    }

    pub async fn profit_per_day(&self) -> Vec<DailyProfit> {
        let products = self.list_products().await;
        stats::profit_per_day(&products, self.clock.now())
    }

    fn timestamp(&self) -> String {
        format_timestamp(self.clock.now())
    }

    async fn persist(&self, products: &[Product]) -> Result<(), InventoryError> {
        let payload = serde_json::to_string(products)?;
        self.store.set(&self.key, payload).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::StockLogKind;
    use crate::storage::{MemoryStore, StorageError};
    use chrono::{TimeZone, Utc};

    fn repo() -> (Arc<MemoryStore>, InventoryRepository<Arc<MemoryStore>>) {
        let store = Arc::new(MemoryStore::new());
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 0).unwrap());
        (store.clone(), InventoryRepository::new(store, Arc::new(clock)))
    }

    #[tokio::test]
    async fn test_list_products_empty_when_nothing_stored() {
        let (_, repo) = repo();
        assert!(repo.list_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_swallows_parse_and_read_failures() {
        let (store, repo) = repo();
        store.insert_raw(DEFAULT_STORAGE_KEY, "{not json").await;
        assert!(repo.list_products().await.is_empty());

        repo.add_product(ProductInput::new("a", "Egg", 7.0, 9.0, 1))
            .await
            .unwrap();
        store.set_fail_reads(true);
        assert!(repo.list_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_sell_example() {
        let (_, repo) = repo();
        repo.add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 10))
            .await
            .unwrap();
        repo.sell_product("p1").await.unwrap();

        let product = &repo.list_products().await[0];
        assert_eq!(product.stock, 9);
        assert_eq!(product.total_sold, 1);
        assert_eq!(product.profit, 3.0);
        assert_eq!(product.logs.len(), 1);
        assert_eq!(product.logs[0].kind, StockLogKind::Sale);
        assert_eq!(product.logs[0].quantity, 1);
        assert_eq!(product.logs[0].timestamp, "2026-10-19T09:15:00.000Z");
        assert_eq!(repo.calculate_stats().await.profit_today, 3.0);
    }

    #[tokio::test]
    async fn test_noop_sell_still_rewrites() {
        let (store, repo) = repo();
        repo.add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 0))
            .await
            .unwrap();
        let before = repo.list_products().await;
        let writes = store.write_count();

        repo.sell_product("p1").await.unwrap();
        repo.sell_product("missing").await.unwrap();

        assert_eq!(repo.list_products().await, before);
        assert_eq!(store.write_count(), writes + 2);
    }

    #[tokio::test]
    async fn test_restock_applies_non_positive_quantity() {
        let (_, repo) = repo();
        repo.add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 2))
            .await
            .unwrap();
        repo.restock_product("p1", 0).await.unwrap();
        repo.restock_product("p1", -5).await.unwrap();

        let product = &repo.list_products().await[0];
        assert_eq!(product.stock, -3);
        assert_eq!(product.capital, 10.0);
        let quantities: Vec<_> = product.logs.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![0, -5]);
    }

    #[tokio::test]
    async fn test_restock_overflow_fails_without_writing() {
        let (store, repo) = repo();
        repo.add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 1))
            .await
            .unwrap();
        let before = repo.list_products().await;
        let writes = store.write_count();

        let result = repo.restock_product("p1", i64::MAX).await;
        assert!(matches!(
            result,
            Err(InventoryError::StockOverflow { ref id, quantity }) if id == "p1" && quantity == i64::MAX
        ));
        assert_eq!(store.write_count(), writes);
        assert_eq!(repo.list_products().await, before);

        repo.restock_product("p1", 2).await.unwrap();
        assert_eq!(repo.list_products().await[0].stock, 3);
    }

    #[tokio::test]
    async fn test_null_capital_does_not_hide_collection() {
        let (store, repo) = repo();
        repo.add_product(ProductInput::new("a", "Egg", 7.0, 9.0, 1))
            .await
            .unwrap();
        repo.add_product(ProductInput::new("b", "Gold", 1e308, f64::MAX, 10))
            .await
            .unwrap();
        assert!(store
            .raw(DEFAULT_STORAGE_KEY)
            .await
            .unwrap()
            .contains(r#""capital":null"#));
        assert_eq!(repo.list_products().await.len(), 2);

        repo.add_product(ProductInput::new("c", "Salt", 10.0, 12.0, 3))
            .await
            .unwrap();
        let ids: Vec<_> = repo.list_products().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let (store, repo) = repo();
        store.set_fail_writes(true);
        let result = repo
            .add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 2))
            .await;
        assert!(matches!(
            result,
            Err(InventoryError::Storage(StorageError::Unavailable(_)))
        ));
        assert!(store.raw(DEFAULT_STORAGE_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_all_mutated() {
        let (_, repo) = repo();
        repo.add_product(ProductInput::new("dup", "A", 1.0, 2.0, 1))
            .await
            .unwrap();
        repo.add_product(ProductInput::new("dup", "B", 1.0, 3.0, 1))
            .await
            .unwrap();
        repo.sell_product("dup").await.unwrap();

        let products = repo.list_products().await;
        assert!(products.iter().all(|p| p.stock == 0 && p.total_sold == 1));
    }

    #[tokio::test]
    async fn test_custom_key() {
        let (store, repo) = repo();
        let repo = repo.with_key("stall-2");
        repo.add_product(ProductInput::new("p1", "Rice", 5.0, 8.0, 2))
            .await
            .unwrap();
        assert!(store.raw("stall-2").await.is_some());
        assert!(store.raw(DEFAULT_STORAGE_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_load_sample_data_appends_in_order() {
        let (store, repo) = repo();
        repo.load_sample_data().await.unwrap();

        let ids: Vec<_> = repo.list_products().await.into_iter().map(|p| p.id).collect();
        let expected: Vec<_> = sample::sample_products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.write_count(), expected.len());
    }
}
