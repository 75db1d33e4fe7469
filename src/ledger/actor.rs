//! # Ledger Actor
//!
//! The "server" half of the ledger. It owns one [`InventoryRepository`] and the
//! receiving end of the request channel, and handles requests strictly one at a
//! time. Because no request starts before the previous one has written the
//! collection back, the read-modify-write of one mutation can never interleave
//! with another: overlapping callers cannot lose each other's updates.

use super::client::LedgerClient;
use super::message::LedgerRequest;
use crate::inventory::{InventoryError, InventoryRepository};
use crate::storage::KeyValueStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct LedgerActor<S: KeyValueStore> {
    receiver: mpsc::Receiver<LedgerRequest>,
    inventory: InventoryRepository<S>,
}

impl<S: KeyValueStore + 'static> LedgerActor<S> {
    /// Creates the actor and the first client handle.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait
    /// for room.
    pub fn new(inventory: InventoryRepository<S>, buffer_size: usize) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory,
        };
        (actor, LedgerClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        let key = self.inventory.key().to_string();
        info!(%key, "Ledger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::ListProducts { respond_to } => {
                    let products = self.inventory.list_products().await;
                    debug!(size = products.len(), "ListProducts");
                    let _ = respond_to.send(Ok(products));
                }
                LedgerRequest::AddProduct { input, respond_to } => {
                    debug!(?input, "AddProduct");
                    let result = self.inventory.add_product(input).await;
                    log_outcome("AddProduct", &result);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::SellProduct { id, respond_to } => {
                    debug!(%id, "SellProduct");
                    let result = self.inventory.sell_product(&id).await;
                    log_outcome("SellProduct", &result);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::RestockProduct {
                    id,
                    quantity,
                    respond_to,
                } => {
                    debug!(%id, quantity, "RestockProduct");
                    let result = self.inventory.restock_product(&id, quantity).await;
                    log_outcome("RestockProduct", &result);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::LoadSampleData { respond_to } => {
                    debug!("LoadSampleData");
                    let result = self.inventory.load_sample_data().await;
                    log_outcome("LoadSampleData", &result);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::CalculateStats { respond_to } => {
                    let stats = self.inventory.calculate_stats().await;
                    debug!(?stats, "CalculateStats");
                    let _ = respond_to.send(Ok(stats));
                }
                LedgerRequest::ProfitPerDay { respond_to } => {
                    let days = self.inventory.profit_per_day().await;
                    debug!(buckets = days.len(), "ProfitPerDay");
                    let _ = respond_to.send(Ok(days));
                }
            }
        }

        info!(%key, "Shutdown");
    }
}

fn log_outcome(operation: &str, result: &Result<(), InventoryError>) {
    match result {
        Ok(()) => info!(operation, "Request ok"),
        Err(e) => warn!(operation, error = %e, "Request failed"),
    }
}
