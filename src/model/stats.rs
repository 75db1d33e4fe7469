use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dashboard summary returned by [`crate::stats::calculate_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Sum of the stored `profit` fields.
    pub total_profit: f64,
    /// Sum of the stored `capital` fields.
    pub total_capital: f64,
    /// Sum of the stored `total_sold` fields.
    pub total_sold: u64,
    pub profit_today: f64,
    pub profit_weekly: f64,
}

/// One bar of the seven-day profit chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProfit {
    pub date: NaiveDate,
    /// `M/D` label shown under the bar.
    pub label: String,
    pub profit: f64,
}
