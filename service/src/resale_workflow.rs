use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{TxHash, U256};
use entities::resale::{PendingResale, ResaleOutcome, TxReceiptInfo};
use interfaces::contracts::{ChainError, MarketplaceHandle};
use interfaces::wallet_session::{GatewayError, SessionError, WalletSession};
use thiserror::Error;
use util::units::{scale_amount, AmountError, NATIVE_DECIMALS};

#[derive(Debug, Error)]
pub enum ResaleError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("ask price is invalid: {0}")]
    InvalidAskPrice(#[from] AmountError),
    /// The signer declined the approval; nothing was submitted.
    #[error("approval rejected: {0}")]
    ApprovalRejected(String),
    /// The approval transaction was mined but reverted.
    #[error("approval transaction {0} reverted")]
    ApprovalReverted(TxHash),
    /// The signer declined the listing call. The approval already stands.
    #[error("listing rejected: {0}")]
    ListingRejected(String),
    /// The marketplace rejected the relisting. The approval already
    /// stands, so retrying just the listing phase is a valid recovery.
    #[error("listing transaction {0} reverted")]
    ListingReverted(TxHash),
    #[error("rpc failure: {0}")]
    Rpc(String),
    #[error("resale did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

/// Puts an owned item back on sale through the strict two-phase sequence:
/// marketplace approval first, confirmed on chain, then the fee-paying
/// relisting call. The listing is never submitted before the approval
/// receipt is in.
pub struct ResaleWorkflow {
    wallet: Arc<dyn WalletSession + Sync + Send>,
}

impl ResaleWorkflow {
    pub fn new(wallet: Arc<dyn WalletSession + Sync + Send>) -> ResaleWorkflow {
        ResaleWorkflow { wallet }
    }

    pub async fn resell(&self, order: &PendingResale) -> Result<ResaleOutcome, ResaleError> {
        // Validate the ask up front, so a bad price never costs an approval.
        let ask = scale_amount(&order.ask_price, NATIVE_DECIMALS)?;

        let session = self.wallet.connect().await?;
        let asset = session.asset()?;
        let marketplace = session.marketplace()?;

        let pending = asset.approve_marketplace().await.map_err(approval_error)?;
        let approval = pending.confirmed().await.map_err(approval_error)?;
        tracing::info!(tx = %approval.tx_hash, "marketplace approval confirmed");

        let listing = submit_listing(marketplace.as_ref(), order, ask).await?;

        Ok(ResaleOutcome { approval: Some(approval), listing })
    }

    /// Listing phase only. Recovery path for an order whose approval is
    /// already confirmed but whose listing failed.
    pub async fn relist(&self, order: &PendingResale) -> Result<ResaleOutcome, ResaleError> {
        let ask = scale_amount(&order.ask_price, NATIVE_DECIMALS)?;

        let session = self.wallet.connect().await?;
        let marketplace = session.marketplace()?;
        let listing = submit_listing(marketplace.as_ref(), order, ask).await?;

        Ok(ResaleOutcome { approval: None, listing })
    }

    pub async fn resell_with_deadline(
        &self,
        order: &PendingResale,
        deadline: Duration,
    ) -> Result<ResaleOutcome, ResaleError> {
        tokio::time::timeout(deadline, self.resell(order))
            .await
            .map_err(|_| ResaleError::DeadlineExceeded(deadline))?
    }
}

async fn submit_listing(
    marketplace: &(dyn MarketplaceHandle + Sync + Send),
    order: &PendingResale,
    ask: U256,
) -> Result<TxReceiptInfo, ResaleError> {
    let fee = marketplace.listing_fee().await.map_err(listing_error)?;

    let pending = marketplace
        .resell_item(U256::from(order.token_id), U256::from(order.item_id), ask, fee)
        .await
        .map_err(listing_error)?;
    let listing = pending.confirmed().await.map_err(listing_error)?;
    tracing::info!(tx = %listing.tx_hash, token_id = order.token_id, "item relisted");

    Ok(listing)
}

fn approval_error(err: ChainError) -> ResaleError {
    match err {
        ChainError::Rejected(reason) => ResaleError::ApprovalRejected(reason),
        ChainError::Reverted(tx) => ResaleError::ApprovalReverted(tx),
        ChainError::Rpc(reason) => ResaleError::Rpc(reason),
    }
}

fn listing_error(err: ChainError) -> ResaleError {
    match err {
        ChainError::Rejected(reason) => ResaleError::ListingRejected(reason),
        ChainError::Reverted(tx) => ResaleError::ListingReverted(tx),
        ChainError::Rpc(reason) => ResaleError::Rpc(reason),
    }
}
