use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};
use entities::market::RawMarketItem;
use entities::resale::TxReceiptInfo;
use interfaces::contracts::{AssetHandle, ChainError, MarketplaceHandle, PendingTx};

use crate::abi::{AssetToken, Marketplace};

pub(crate) struct EvmMarketplaceHandle {
    instance: Marketplace::MarketplaceInstance<DynProvider>,
    asset_address: Address,
}

impl EvmMarketplaceHandle {
    pub(crate) fn new(address: Address, asset_address: Address, provider: DynProvider) -> Self {
        EvmMarketplaceHandle {
            instance: Marketplace::new(address, provider),
            asset_address,
        }
    }
}

#[async_trait::async_trait]
impl MarketplaceHandle for EvmMarketplaceHandle {
    async fn fetch_my_items(&self) -> Result<Vec<RawMarketItem>, ChainError> {
        let items = self.instance.fetchMyNFTs().call().await.map_err(rpc_err)?;
        Ok(items
            .into_iter()
            .map(|item| RawMarketItem {
                item_id: item.itemId,
                token_id: item.tokenId,
                seller: item.seller,
                owner: item.owner,
                price: item.price,
            })
            .collect())
    }

    async fn listing_fee(&self) -> Result<U256, ChainError> {
        self.instance.getListingPrice().call().await.map_err(rpc_err)
    }

    async fn resell_item(
        &self,
        token_id: U256,
        item_id: U256,
        price: U256,
        fee: U256,
    ) -> Result<Box<dyn PendingTx>, ChainError> {
        let pending = self
            .instance
            .resellItem(self.asset_address, token_id, item_id, price)
            .value(fee)
            .send()
            .await
            .map_err(rpc_err)?;
        tracing::debug!(%token_id, %item_id, "relisting submitted");
        Ok(Box::new(EvmPendingTx { inner: pending }))
    }
}

pub(crate) struct EvmAssetHandle {
    instance: AssetToken::AssetTokenInstance<DynProvider>,
    marketplace_address: Address,
}

impl EvmAssetHandle {
    pub(crate) fn new(address: Address, marketplace_address: Address, provider: DynProvider) -> Self {
        EvmAssetHandle {
            instance: AssetToken::new(address, provider),
            marketplace_address,
        }
    }
}

#[async_trait::async_trait]
impl AssetHandle for EvmAssetHandle {
    async fn token_uri(&self, token_id: U256) -> Result<String, ChainError> {
        self.instance.tokenURI(token_id).call().await.map_err(rpc_err)
    }

    async fn approve_marketplace(&self) -> Result<Box<dyn PendingTx>, ChainError> {
        let pending = self
            .instance
            .setApprovalForAll(self.marketplace_address, true)
            .send()
            .await
            .map_err(rpc_err)?;
        tracing::debug!(operator = %self.marketplace_address, "marketplace approval submitted");
        Ok(Box::new(EvmPendingTx { inner: pending }))
    }
}

struct EvmPendingTx {
    inner: PendingTransactionBuilder<Ethereum>,
}

#[async_trait::async_trait]
impl PendingTx for EvmPendingTx {
    async fn confirmed(self: Box<Self>) -> Result<TxReceiptInfo, ChainError> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;
        // a mined receipt with a failed status is a revert, not a success
        if !receipt.status() {
            return Err(ChainError::Reverted(receipt.transaction_hash));
        }
        Ok(TxReceiptInfo {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

fn rpc_err(err: alloy::contract::Error) -> ChainError {
    ChainError::Rpc(err.to_string())
}
