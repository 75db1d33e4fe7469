//! Products and their stock movement log.
//!
//! # Stored Document
//! The whole collection is persisted as one JSON array, so the field names here
//! are the wire format (camelCase, like the mobile app wrote them).
//!
//! The derived fields (`capital`, `total_sold`, `profit`, `logs`) are filled in by
//! [`Product::from_input`] and then only touched by [`Product::record_sale`] and
//! [`Product::record_restock`]. See [`ProductInput`] for the creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same as a missing field.
///
/// Non-finite money values are stored as `null` by JSON encoders, so one bad
/// record must not make the whole collection unreadable.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque handle to a product picture.
///
/// The ledger stores whatever the caller handed in and gives it back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(serde_json::Value);

impl ImageRef {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Kind of stock movement recorded in a [`StockLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLogKind {
    Restock,
    Sale,
}

/// An immutable stock movement event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLog {
    #[serde(rename = "type")]
    pub kind: StockLogKind,
    pub quantity: i64,
    /// ISO-8601 UTC timestamp, e.g. `2026-10-19T08:30:00.000Z`.
    pub timestamp: String,
}

impl StockLog {
    pub fn sale(timestamp: impl Into<String>) -> Self {
        Self {
            kind: StockLogKind::Sale,
            quantity: 1,
            timestamp: timestamp.into(),
        }
    }

    pub fn restock(quantity: i64, timestamp: impl Into<String>) -> Self {
        Self {
            kind: StockLogKind::Restock,
            quantity,
            timestamp: timestamp.into(),
        }
    }

    pub fn is_sale(&self) -> bool {
        self.kind == StockLogKind::Sale
    }

    /// Text before the `T` separator, i.e. the ISO date of the event.
    pub fn date_key(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map_or(self.timestamp.as_str(), |(date, _)| date)
    }

    /// Timestamp as an instant, or `None` if the stored text is not RFC 3339.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub price: f64,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub store_name: String,
    pub store_type: String,
    pub store_location: String,
    /// Cost basis locked in at creation. Restocks never change it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sold: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<StockLog>,
}

impl Product {
    /// Builds a fresh product: capital is `cost * stock`, counters start at zero
    /// and the log is empty.
    pub fn from_input(input: ProductInput) -> Self {
        let capital = input.cost * input.stock as f64;
        Self {
            id: input.id,
            name: input.name,
            cost: input.cost,
            price: input.price,
            stock: input.stock,
            image: input.image,
            store_name: input.store_name,
            store_type: input.store_type,
            store_location: input.store_location,
            capital,
            total_sold: 0,
            profit: 0.0,
            logs: Vec::new(),
        }
    }

    /// Margin realized by selling one unit.
    pub fn unit_profit(&self) -> f64 {
        self.price - self.cost
    }

    /// Sells a single unit if any is on hand.
    ///
    /// Returns `false` and leaves the product untouched when stock is depleted.
    pub fn record_sale(&mut self, timestamp: &str) -> bool {
        if self.stock <= 0 {
            return false;
        }
        self.stock -= 1;
        self.total_sold = self.total_sold.saturating_add(1);
        self.profit += self.unit_profit();
        self.logs.push(StockLog::sale(timestamp));
        true
    }

    /// Adds `quantity` to stock. Non-positive quantities are applied as given.
    ///
    /// Returns `false` and leaves the product untouched when the new stock level
    /// does not fit in an `i64`.
    pub fn record_restock(&mut self, quantity: i64, timestamp: &str) -> bool {
        let Some(stock) = self.stock.checked_add(quantity) else {
            return false;
        };
        self.stock = stock;
        self.logs.push(StockLog::restock(quantity, timestamp));
        true
    }

    pub fn sale_logs(&self) -> impl Iterator<Item = &StockLog> {
        self.logs.iter().filter(|log| log.is_sale())
    }

    /// Profit recomputed from the sale log; agrees with `profit` for any product
    /// mutated only through this type.
    pub fn replayed_profit(&self) -> f64 {
        let unit = self.unit_profit();
        self.sale_logs().map(|log| unit * log.quantity as f64).sum()
    }

    /// Units sold recomputed from the sale log.
    pub fn replayed_units_sold(&self) -> i64 {
        self.sale_logs().map(|log| log.quantity).sum()
    }
}

/// Payload for adding a product to the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub price: f64,
    /// Initial on-hand quantity; also the basis for `capital`.
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub store_name: String,
    pub store_type: String,
    pub store_location: String,
}

impl ProductInput {
    /// Creates an input with empty store metadata and no image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            price,
            stock,
            image: None,
            store_name: String::new(),
            store_type: String::new(),
            store_location: String::new(),
        }
    }

    pub fn with_store(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.store_name = name.into();
        self.store_type = kind.into();
        self.store_location = location.into();
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2026-10-19T08:30:00.000Z";

    #[test]
    fn test_from_input_locks_capital() {
        let mut product = Product::from_input(ProductInput::new("p1", "Rice", 40.0, 50.0, 10));
        assert_eq!(product.capital, 400.0);
        assert_eq!(product.total_sold, 0);
        assert!(product.logs.is_empty());

        product.record_restock(5, TS);
        assert_eq!(product.stock, 15);
        assert_eq!(product.capital, 400.0, "restock must not touch capital");
    }

    #[test]
    fn test_record_sale_on_empty_stock_is_noop() {
        let mut product = Product::from_input(ProductInput::new("p1", "Rice", 40.0, 50.0, 0));
        let before = product.clone();
        assert!(!product.record_sale(TS));
        assert_eq!(product, before);
    }

    #[test]
    fn test_replay_matches_incremental_counters() {
        let mut product = Product::from_input(ProductInput::new("p1", "Soap", 4.0, 10.0, 3));
        product.record_sale(TS);
        product.record_restock(2, TS);
        product.record_sale(TS);

        assert_eq!(product.profit, 12.0);
        assert_eq!(product.replayed_profit(), product.profit);
        assert_eq!(product.replayed_units_sold(), product.total_sold as i64);
    }

    #[test]
    fn test_stock_log_wire_format() {
        let json = serde_json::to_value(StockLog::restock(-2, TS)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "restock", "quantity": -2, "timestamp": TS})
        );
    }

    #[test]
    fn test_date_key_and_parse() {
        let log = StockLog::sale(TS);
        assert_eq!(log.date_key(), "2026-10-19");
        assert!(log.parsed_timestamp().is_some());

        let garbage = StockLog::sale("yesterday");
        assert_eq!(garbage.date_key(), "yesterday");
        assert!(garbage.parsed_timestamp().is_none());
    }

    #[test]
    fn test_missing_derived_fields_default() {
        let raw = r#"[{"id":"a","name":"Egg","cost":7,"price":9,"stock":12,
            "image":3,"storeName":"Aling Nena","storeType":"Sari-sari","storeLocation":"Cebu"}]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();
        assert_eq!(products[0].total_sold, 0);
        assert_eq!(products[0].profit, 0.0);
        assert!(products[0].logs.is_empty());
        assert_eq!(products[0].image, Some(ImageRef::new(3)));
    }

    #[test]
    fn test_null_derived_fields_default() {
        let raw = r#"[{"id":"a","name":"Egg","cost":7,"price":9,"stock":12,
            "storeName":"Aling Nena","storeType":"Sari-sari","storeLocation":"Cebu",
            "capital":null,"totalSold":null,"profit":null,"logs":null}]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();
        assert_eq!(products[0].capital, 0.0);
        assert_eq!(products[0].total_sold, 0);
        assert_eq!(products[0].profit, 0.0);
        assert!(products[0].logs.is_empty());
    }

    #[test]
    fn test_non_finite_capital_reads_back_as_zero() {
        let product = Product::from_input(ProductInput::new("big", "Gold", 1e308, f64::MAX, 10));
        assert!(product.capital.is_infinite());

        let raw = serde_json::to_string(&vec![product]).unwrap();
        assert!(raw.contains(r#""capital":null"#));
        let products: Vec<Product> = serde_json::from_str(&raw).unwrap();
        assert_eq!(products[0].capital, 0.0);
        assert_eq!(products[0].stock, 10);
    }

    #[test]
    fn test_restock_overflow_leaves_product_untouched() {
        let mut product = Product::from_input(ProductInput::new("p1", "Rice", 40.0, 50.0, 1));
        let before = product.clone();
        assert!(!product.record_restock(i64::MAX, TS));
        assert_eq!(product, before);

        assert!(product.record_restock(i64::MAX - 1, TS));
        assert_eq!(product.stock, i64::MAX);
    }
}
