//! # Ledger Messages
//!
//! Request type sent from [`LedgerClient`](super::LedgerClient) to
//! [`LedgerActor`](super::LedgerActor). One variant per repository operation,
//! each carrying a oneshot sender for the answer.

use crate::inventory::InventoryError;
use crate::model::{DailyProfit, InventoryStats, Product, ProductInput};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the ledger actor.
pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

#[derive(Debug)]
pub enum LedgerRequest {
    ListProducts {
        respond_to: Response<Vec<Product>>,
    },
    AddProduct {
        input: ProductInput,
        respond_to: Response<()>,
    },
    SellProduct {
        id: String,
        respond_to: Response<()>,
    },
    RestockProduct {
        id: String,
        quantity: i64,
        respond_to: Response<()>,
    },
    LoadSampleData {
        respond_to: Response<()>,
    },
    CalculateStats {
        respond_to: Response<InventoryStats>,
    },
    ProfitPerDay {
        respond_to: Response<Vec<DailyProfit>>,
    },
}
