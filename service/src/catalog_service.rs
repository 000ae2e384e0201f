use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::U256;
use entities::catalog::CatalogState;
use entities::market::{AssetRecord, RawMarketItem};
use futures::future::{join_all, try_join_all};
use interfaces::contracts::{AssetHandle, ChainError};
use interfaces::metadata_fetcher::{MetadataError, MetadataFetcher};
use interfaces::wallet_session::{GatewayError, SessionError, WalletSession};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::converter::{to_asset_record, ConvertError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Record(#[from] ConvertError),
    #[error("catalog load did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

/// How the loader treats individual metadata failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataPolicy {
    /// A single failed resolution fails the whole load. Default.
    #[default]
    AllOrNothing,
    /// Keep the records that resolve, report the rest.
    KeepResolvable,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub metadata: MetadataPolicy,
    /// Upper bound on the whole load, wallet connection included.
    /// `None` waits indefinitely.
    pub deadline: Option<Duration>,
}

/// One record that could not be resolved under `KeepResolvable`.
#[derive(Debug, Clone)]
pub struct MetadataFailure {
    pub token_id: U256,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub assets: Vec<AssetRecord>,
    /// Always empty under `AllOrNothing`.
    pub failures: Vec<MetadataFailure>,
}

/// Owns the catalog state and runs the load workflow against the chain
/// and the metadata server.
pub struct CatalogService {
    wallet: Arc<dyn WalletSession + Sync + Send>,
    metadata: Arc<dyn MetadataFetcher + Sync + Send>,
    state: Mutex<CatalogState>,
}

impl CatalogService {
    pub fn new(
        wallet: Arc<dyn WalletSession + Sync + Send>,
        metadata: Arc<dyn MetadataFetcher + Sync + Send>,
    ) -> CatalogService {
        CatalogService { wallet, metadata, state: Mutex::new(CatalogState::NotLoaded) }
    }

    /// Current state snapshot. `NotLoaded` until the first successful
    /// load; `Loaded` afterwards, even when the wallet owns nothing.
    pub async fn state(&self) -> CatalogState {
        self.state.lock().await.clone()
    }

    /// Loads the wallet's items with the default options: all-or-nothing
    /// metadata resolution, no deadline.
    pub async fn load_owned_assets(&self) -> Result<Vec<AssetRecord>, CatalogError> {
        self.load_owned_assets_with(LoadOptions::default())
            .await
            .map(|load| load.assets)
    }

    pub async fn load_owned_assets_with(
        &self,
        options: LoadOptions,
    ) -> Result<CatalogLoad, CatalogError> {
        let load = match options.deadline {
            Some(limit) => tokio::time::timeout(limit, self.run_load(options.metadata))
                .await
                .map_err(|_| CatalogError::DeadlineExceeded(limit))??,
            None => self.run_load(options.metadata).await?,
        };

        // Replace the payload atomically. Concurrent loads settle in
        // completion order, last writer wins.
        let mut state = self.state.lock().await;
        *state = CatalogState::Loaded(load.assets.clone());

        Ok(load)
    }

    async fn run_load(&self, policy: MetadataPolicy) -> Result<CatalogLoad, CatalogError> {
        let session = self.wallet.connect().await?;
        let marketplace = session.marketplace()?;
        let asset = session.asset()?;

        let raw_items = marketplace.fetch_my_items().await?;
        tracing::debug!(
            wallet = %session.wallet_address(),
            items = raw_items.len(),
            "market records fetched"
        );

        // One resolution future per record, all issued together. Output
        // order is the input order, whatever the completion order.
        let resolutions = raw_items.iter().map(|item| self.resolve(asset.clone(), item));

        let load = match policy {
            MetadataPolicy::AllOrNothing => CatalogLoad {
                assets: try_join_all(resolutions).await?,
                failures: Vec::new(),
            },
            MetadataPolicy::KeepResolvable => {
                let mut assets = Vec::with_capacity(raw_items.len());
                let mut failures = Vec::new();
                for (item, outcome) in raw_items.iter().zip(join_all(resolutions).await) {
                    match outcome {
                        Ok(record) => assets.push(record),
                        Err(e) => failures.push(MetadataFailure {
                            token_id: item.token_id,
                            reason: e.to_string(),
                        }),
                    }
                }
                CatalogLoad { assets, failures }
            }
        };

        tracing::info!(
            assets = load.assets.len(),
            failures = load.failures.len(),
            "catalog assembled"
        );
        Ok(load)
    }

    async fn resolve(
        &self,
        asset: Arc<dyn AssetHandle + Sync + Send>,
        raw: &RawMarketItem,
    ) -> Result<AssetRecord, CatalogError> {
        let uri = asset.token_uri(raw.token_id).await?;
        let document = self.metadata.fetch(&uri).await?;
        Ok(to_asset_record(raw, &document)?)
    }
}
