//! # Ledger Client
//!
//! Cheap-to-clone handle for talking to a running [`LedgerActor`](super::LedgerActor).
//! Every method sends one [`LedgerRequest`] and awaits the actor's answer.

use super::message::LedgerRequest;
use crate::inventory::InventoryError;
use crate::model::{DailyProfit, InventoryStats, Product, ProductInput};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, InventoryError>>) -> LedgerRequest,
    ) -> Result<T, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| InventoryError::ActorClosed)?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        self.request(|respond_to| LedgerRequest::ListProducts { respond_to })
            .await
    }

    #[instrument(skip(self, input), fields(id = %input.id))]
    pub async fn add_product(&self, input: ProductInput) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::AddProduct { input, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn sell_product(&self, id: &str) -> Result<(), InventoryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| LedgerRequest::SellProduct { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn restock_product(&self, id: &str, quantity: i64) -> Result<(), InventoryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| LedgerRequest::RestockProduct {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn load_sample_data(&self) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::LoadSampleData { respond_to })
            .await
    }

    pub async fn calculate_stats(&self) -> Result<InventoryStats, InventoryError> {
        self.request(|respond_to| LedgerRequest::CalculateStats { respond_to })
            .await
    }

    pub async fn profit_per_day(&self) -> Result<Vec<DailyProfit>, InventoryError> {
        self.request(|respond_to| LedgerRequest::ProfitPerDay { respond_to })
            .await
    }
}
