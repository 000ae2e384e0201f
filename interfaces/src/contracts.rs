use alloy::primitives::{TxHash, U256};
use entities::market::RawMarketItem;
use entities::resale::TxReceiptInfo;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The signer refused to authorize the call; nothing reached the chain.
    #[error("call rejected before submission: {0}")]
    Rejected(String),
    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted on chain")]
    Reverted(TxHash),
    /// Transport or node-side failure.
    #[error("rpc failure: {0}")]
    Rpc(String),
}

/// A submitted transaction that has not been mined yet.
#[async_trait::async_trait]
pub trait PendingTx: Send {
    /// Suspends until the transaction is mined. Returns the receipt of a
    /// successful execution; a mined-but-reverted transaction is an error.
    async fn confirmed(self: Box<Self>) -> Result<TxReceiptInfo, ChainError>;
}

/// Marketplace contract boundary.
#[async_trait::async_trait]
pub trait MarketplaceHandle {
    /// Items currently owned by or listed for the connected wallet,
    /// in contract return order.
    async fn fetch_my_items(&self) -> Result<Vec<RawMarketItem>, ChainError>;
    /// Fee the marketplace charges to accept a listing, as a raw
    /// fixed-point amount.
    async fn listing_fee(&self) -> Result<U256, ChainError>;
    /// Submits the relisting call. `price` is the fixed-point ask;
    /// `fee` is attached as the call's value payment.
    async fn resell_item(
        &self,
        token_id: U256,
        item_id: U256,
        price: U256,
        fee: U256,
    ) -> Result<Box<dyn PendingTx>, ChainError>;
}

/// Asset (NFT) contract boundary.
#[async_trait::async_trait]
pub trait AssetHandle {
    /// Metadata URI recorded for one token.
    async fn token_uri(&self, token_id: U256) -> Result<String, ChainError>;
    /// Grants the marketplace transfer rights over the wallet's tokens,
    /// so it can move the asset once the relisted item sells.
    async fn approve_marketplace(&self) -> Result<Box<dyn PendingTx>, ChainError>;
}
