use crate::clock::{Clock, SystemClock};
use crate::config::StorefrontConfig;
use crate::inventory::InventoryRepository;
use crate::ledger::{LedgerActor, LedgerClient};
use crate::storage::{JsonFileStore, KeyValueStore};
use std::sync::Arc;
use tracing::{error, info};

/// A running inventory ledger: the store, the repository and the ledger actor,
/// wired together.
///
/// `Storefront` is responsible for:
/// - **Wiring**: building the repository over the injected store and clock
/// - **Lifecycle**: spawning the ledger actor and stopping it again
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::open(&StorefrontConfig::from_env()?);
///
/// storefront.client.load_sample_data().await?;
/// storefront.client.sell_product("sample-1").await?;
/// let stats = storefront.client.calculate_stats().await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Handle for sending requests to the ledger actor
    pub client: LedgerClient,

    /// Task running the ledger actor (awaited on shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Starts a ledger over `store`. Must be called inside a Tokio runtime.
    pub fn new<S>(store: S, clock: Arc<dyn Clock>, config: &StorefrontConfig) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let repo = InventoryRepository::new(store, clock).with_key(config.storage_key.clone());
        let (actor, client) = LedgerActor::new(repo, config.channel_capacity);
        let handle = tokio::spawn(actor.run());

        Self { client, handle }
    }

    /// Starts a ledger persisted as JSON files under `config.data_dir`, stamped
    /// with the wall clock.
    pub fn open(config: &StorefrontConfig) -> Self {
        info!(data_dir = %config.data_dir.display(), "Opening storefront");
        Self::new(
            JsonFileStore::new(&config.data_dir),
            Arc::new(SystemClock),
            config,
        )
    }

    /// Drops this storefront's client and waits for the actor to drain.
    ///
    /// The actor exits once every clone of the client is gone, so callers that
    /// cloned [`Storefront::client`] must drop their copies first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Ledger task failed: {:?}", e);
            return Err(format!("Ledger task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
