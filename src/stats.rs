//! # Stats Aggregator
//!
//! Pure folds over a loaded collection. The async entry points live on
//! [`InventoryRepository`](crate::inventory::InventoryRepository), which loads the
//! collection and hands it here together with the clock's "now".
//!
//! The two "recent profit" figures deliberately use different tests:
//!
//! - `profit_today` matches the raw timestamp text against today's UTC date
//!   (`2026-10-19T...` starts with `2026-10-19`). No parsing, no timezone math.
//! - `profit_weekly` parses the timestamp and compares instants against
//!   `now - 7 days`. Text that does not parse never counts.

use crate::model::{DailyProfit, InventoryStats, Product};
use chrono::{DateTime, Datelike, Duration, Utc};

/// Number of buckets returned by [`profit_per_day`], and the width of the
/// weekly window in days.
pub const PROFIT_WINDOW_DAYS: i64 = 7;

pub fn calculate_stats(products: &[Product], now: DateTime<Utc>) -> InventoryStats {
    let today = now.date_naive().to_string();
    let week_ago = now - Duration::days(PROFIT_WINDOW_DAYS);

    let mut stats = InventoryStats::default();
    for product in products {
        stats.total_profit += product.profit;
        stats.total_capital += product.capital;
        stats.total_sold += product.total_sold;

        let unit_profit = product.unit_profit();
        for log in product.sale_logs() {
            let amount = unit_profit * log.quantity as f64;
            if log.timestamp.starts_with(&today) {
                stats.profit_today += amount;
            }
            if log.parsed_timestamp().is_some_and(|at| at >= week_ago) {
                stats.profit_weekly += amount;
            }
        }
    }
    stats
}

/// Profit per UTC calendar day for today and the six days before it, oldest
/// first. Sales dated outside the window are dropped.
pub fn profit_per_day(products: &[Product], now: DateTime<Utc>) -> Vec<DailyProfit> {
    let today = now.date_naive();
    let mut buckets: Vec<(String, DailyProfit)> = (0..PROFIT_WINDOW_DAYS)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            let bucket = DailyProfit {
                date,
                label: format!("{}/{}", date.month(), date.day()),
                profit: 0.0,
            };
            (date.to_string(), bucket)
        })
        .collect();

    for product in products {
        let unit_profit = product.unit_profit();
        for log in product.sale_logs() {
            if let Some((_, bucket)) = buckets.iter_mut().find(|(key, _)| key == log.date_key()) {
                bucket.profit += unit_profit * log.quantity as f64;
            }
        }
    }

    buckets.into_iter().map(|(_, bucket)| bucket).collect()
}
