//! # PALengke Demo
//!
//! Walks the ledger through a vendor's day:
//! 1.  Opens a [`Storefront`] from `PALENGKE_*` settings.
//! 2.  Seeds the sample catalog if the inventory is empty.
//! 3.  Records a few sales and a restock.
//! 4.  Logs the analytics dashboard figures.

use palengke::config::StorefrontConfig;
use palengke::lifecycle::{setup_tracing, Storefront};
use tracing::{info, warn, Instrument};

fn peso(amount: f64) -> String {
    format!("+P{:.2}", amount)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let storefront = Storefront::open(&config);
    let client = &storefront.client;

    let span = tracing::info_span!("seeding");
    async {
        if client.list_products().await.map_err(|e| e.to_string())?.is_empty() {
            info!("Inventory empty, loading sample products");
            client.load_sample_data().await.map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("trading");
    async {
        for id in ["sample-1", "sample-1", "sample-2", "sample-6"] {
            client.sell_product(id).await.map_err(|e| e.to_string())?;
        }
        client
            .restock_product("sample-6", 12)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let stats = client.calculate_stats().await.map_err(|e| e.to_string())?;
    info!(
        total_spent = %peso(stats.total_capital),
        profit_today = %peso(stats.profit_today),
        profit_weekly = %peso(stats.profit_weekly),
        total_profit = %peso(stats.total_profit),
        units_sold = stats.total_sold,
        "Dashboard"
    );

    for day in client.profit_per_day().await.map_err(|e| e.to_string())? {
        info!(label = %day.label, profit = %peso(day.profit), "Daily profit");
    }

    for product in client.list_products().await.map_err(|e| e.to_string())? {
        if product.stock <= 0 {
            warn!(id = %product.id, name = %product.name, "Out of stock");
        }
    }

    storefront.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
