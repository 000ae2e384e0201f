use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{Address, U256};
use entities::market::RawMarketItem;
use entities::resale::TxReceiptInfo;
use interfaces::contracts::{AssetHandle, ChainError, MarketplaceHandle, PendingTx};
use interfaces::wallet_session::{ChainSession, GatewayError, SessionError, WalletSession};

use crate::data_gen;

/// Everything the fakes observed, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallRecord {
    ItemsFetched,
    FeeQueried,
    ApprovalSubmitted,
    ApprovalConfirmed,
    ListingSubmitted { token_id: U256, item_id: U256, price: U256, fee: U256 },
    ListingConfirmed,
}

/// How a scripted transaction behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxScript {
    #[default]
    Confirms,
    /// Submission succeeds, the mined transaction reverts.
    Reverts,
    /// The signer declines; submission itself errors.
    Rejected,
}

/// Scripted world builder, one per test.
#[derive(Default)]
pub struct FakeChainCfg {
    items: Vec<RawMarketItem>,
    listing_fee: U256,
    approval: TxScript,
    listing: TxScript,
    session_error: Option<SessionError>,
    confirm_delay: Duration,
}

impl FakeChainCfg {
    pub fn with_item(mut self, item: RawMarketItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_listing_fee(mut self, fee: U256) -> Self {
        self.listing_fee = fee;
        self
    }

    pub fn approval(mut self, script: TxScript) -> Self {
        self.approval = script;
        self
    }

    pub fn listing(mut self, script: TxScript) -> Self {
        self.listing = script;
        self
    }

    /// Every `connect` fails with this error.
    pub fn refusing_session(mut self, error: SessionError) -> Self {
        self.session_error = Some(error);
        self
    }

    /// Confirmation waits this long (virtual time) before resolving.
    pub fn confirm_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    pub fn start(self) -> FakeWorld {
        let world = Arc::new(WorldState {
            items: self.items,
            listing_fee: self.listing_fee,
            approval: Mutex::new(self.approval),
            listing: Mutex::new(self.listing),
            session_error: self.session_error,
            confirm_delay: self.confirm_delay,
            wallet_address: data_gen::rand_address(),
            journal: Mutex::new(Vec::new()),
        });
        FakeWorld { wallet: Arc::new(FakeWalletSession { world: world.clone() }), world }
    }
}

pub struct FakeWorld {
    pub wallet: Arc<FakeWalletSession>,
    world: Arc<WorldState>,
}

impl FakeWorld {
    /// Journal snapshot.
    pub fn records(&self) -> Vec<CallRecord> {
        self.world.journal.lock().unwrap().clone()
    }

    /// Rescripts the listing behavior for later calls.
    pub fn script_listing(&self, script: TxScript) {
        *self.world.listing.lock().unwrap() = script;
    }

    /// Rescripts the approval behavior for later calls.
    pub fn script_approval(&self, script: TxScript) {
        *self.world.approval.lock().unwrap() = script;
    }
}

struct WorldState {
    items: Vec<RawMarketItem>,
    listing_fee: U256,
    approval: Mutex<TxScript>,
    listing: Mutex<TxScript>,
    session_error: Option<SessionError>,
    confirm_delay: Duration,
    wallet_address: Address,
    journal: Mutex<Vec<CallRecord>>,
}

impl WorldState {
    fn record(&self, record: CallRecord) {
        self.journal.lock().unwrap().push(record);
    }
}

pub struct FakeWalletSession {
    world: Arc<WorldState>,
}

#[async_trait::async_trait]
impl WalletSession for FakeWalletSession {
    async fn connect(&self) -> Result<Arc<dyn ChainSession + Sync + Send>, SessionError> {
        if let Some(error) = &self.world.session_error {
            return Err(error.clone());
        }
        Ok(Arc::new(FakeChainSession { world: self.world.clone() }))
    }
}

struct FakeChainSession {
    world: Arc<WorldState>,
}

impl ChainSession for FakeChainSession {
    fn wallet_address(&self) -> Address {
        self.world.wallet_address
    }

    fn chain_id(&self) -> u64 {
        31337
    }

    fn marketplace(&self) -> Result<Arc<dyn MarketplaceHandle + Sync + Send>, GatewayError> {
        Ok(Arc::new(FakeMarketplace { world: self.world.clone() }))
    }

    fn asset(&self) -> Result<Arc<dyn AssetHandle + Sync + Send>, GatewayError> {
        Ok(Arc::new(FakeAssetToken { world: self.world.clone() }))
    }
}

struct FakeMarketplace {
    world: Arc<WorldState>,
}

#[async_trait::async_trait]
impl MarketplaceHandle for FakeMarketplace {
    async fn fetch_my_items(&self) -> Result<Vec<RawMarketItem>, ChainError> {
        self.world.record(CallRecord::ItemsFetched);
        Ok(self.world.items.clone())
    }

    async fn listing_fee(&self) -> Result<U256, ChainError> {
        self.world.record(CallRecord::FeeQueried);
        Ok(self.world.listing_fee)
    }

    async fn resell_item(
        &self,
        token_id: U256,
        item_id: U256,
        price: U256,
        fee: U256,
    ) -> Result<Box<dyn PendingTx>, ChainError> {
        let script = *self.world.listing.lock().unwrap();
        if script == TxScript::Rejected {
            return Err(ChainError::Rejected("listing declined in wallet".to_string()));
        }
        self.world.record(CallRecord::ListingSubmitted { token_id, item_id, price, fee });
        Ok(Box::new(FakePendingTx {
            world: self.world.clone(),
            script,
            confirm_record: CallRecord::ListingConfirmed,
        }))
    }
}

struct FakeAssetToken {
    world: Arc<WorldState>,
}

#[async_trait::async_trait]
impl AssetHandle for FakeAssetToken {
    async fn token_uri(&self, token_id: U256) -> Result<String, ChainError> {
        Ok(crate::token_uri(token_id))
    }

    async fn approve_marketplace(&self) -> Result<Box<dyn PendingTx>, ChainError> {
        let script = *self.world.approval.lock().unwrap();
        if script == TxScript::Rejected {
            return Err(ChainError::Rejected("approval declined in wallet".to_string()));
        }
        self.world.record(CallRecord::ApprovalSubmitted);
        Ok(Box::new(FakePendingTx {
            world: self.world.clone(),
            script,
            confirm_record: CallRecord::ApprovalConfirmed,
        }))
    }
}

struct FakePendingTx {
    world: Arc<WorldState>,
    script: TxScript,
    confirm_record: CallRecord,
}

#[async_trait::async_trait]
impl PendingTx for FakePendingTx {
    async fn confirmed(self: Box<Self>) -> Result<TxReceiptInfo, ChainError> {
        if !self.world.confirm_delay.is_zero() {
            tokio::time::sleep(self.world.confirm_delay).await;
        }
        match self.script {
            TxScript::Reverts => Err(ChainError::Reverted(data_gen::rand_tx_hash())),
            _ => {
                self.world.record(self.confirm_record.clone());
                Ok(TxReceiptInfo { tx_hash: data_gen::rand_tx_hash(), block_number: Some(1) })
            }
        }
    }
}
