//! # Mock Ledger
//!
//! Helpers for testing code that holds a [`LedgerClient`] without spawning a
//! [`LedgerActor`](super::LedgerActor).
//!
//! [`create_mock_client`] returns a client whose requests land on a receiver the
//! test controls. The `expect_*` helpers pull the next request off that receiver
//! and hand back its payload plus the responder, so the test decides what the
//! "actor" answers (success, error, or dropping the responder).
//!
//! ```rust
//! use palengke::ledger::mock::{create_mock_client, expect_sell};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.sell_product("p1").await });
//!
//!     let (id, responder) = expect_sell(&mut receiver).await.unwrap();
//!     assert_eq!(id, "p1");
//!     responder.send(Ok(())).unwrap();
//!
//!     assert!(task.await.unwrap().is_ok());
//! }
//! ```

use super::client::LedgerClient;
use super::message::{LedgerRequest, Response};
use crate::model::ProductInput;
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Next request, if it is an AddProduct.
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(ProductInput, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::AddProduct { input, respond_to }) => Some((input, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a SellProduct.
pub async fn expect_sell(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::SellProduct { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a RestockProduct.
pub async fn expect_restock(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, i64, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::RestockProduct {
            id,
            quantity,
            respond_to,
        }) => Some((id, quantity, respond_to)),
        _ => None,
    }
}
