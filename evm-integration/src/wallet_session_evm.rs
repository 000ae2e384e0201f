use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use interfaces::contracts::{AssetHandle, MarketplaceHandle};
use interfaces::wallet_session::{ChainSession, GatewayError, SessionError, WalletSession};
use util::config::Settings;

use crate::handles::{EvmAssetHandle, EvmMarketplaceHandle};

/// Wallet session backed by a locally held signing key and an HTTP
/// JSON-RPC provider.
///
/// Holds configuration only; every `connect` builds a fresh signer-filled
/// provider and verifies the network it landed on.
pub struct EvmWalletSession {
    rpc_url: url::Url,
    chain_id: u64,
    private_key: String,
    marketplace_address: Address,
    asset_address: Address,
}

impl EvmWalletSession {
    pub fn from_settings(settings: &Settings) -> Result<EvmWalletSession, GatewayError> {
        let rpc_url = settings.chain.rpc_url.parse().map_err(|e: url::ParseError| {
            GatewayError::Binding { name: "provider", source: anyhow::Error::new(e) }
        })?;
        Ok(EvmWalletSession {
            rpc_url,
            chain_id: settings.chain.chain_id,
            private_key: settings.wallet.private_key.clone(),
            marketplace_address: parse_address("marketplace", &settings.contracts.marketplace_address)?,
            asset_address: parse_address("asset", &settings.contracts.asset_address)?,
        })
    }
}

#[async_trait::async_trait]
impl WalletSession for EvmWalletSession {
    async fn connect(&self) -> Result<Arc<dyn ChainSession + Sync + Send>, SessionError> {
        let signer: PrivateKeySigner = self
            .private_key
            .parse()
            .map_err(|e| SessionError::WalletUnavailable(format!("unusable signing key: {e}")))?;
        let wallet_address = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(self.rpc_url.clone())
            .erased();

        let actual = provider
            .get_chain_id()
            .await
            .map_err(|e| SessionError::WalletUnavailable(format!("provider unreachable: {e}")))?;
        if actual != self.chain_id {
            return Err(SessionError::NetworkMismatch { expected: self.chain_id, actual });
        }

        tracing::debug!(%wallet_address, chain_id = actual, "wallet session established");

        Ok(Arc::new(EvmChainSession {
            provider,
            wallet_address,
            chain_id: actual,
            marketplace_address: self.marketplace_address,
            asset_address: self.asset_address,
        }))
    }
}

struct EvmChainSession {
    provider: DynProvider,
    wallet_address: Address,
    chain_id: u64,
    marketplace_address: Address,
    asset_address: Address,
}

impl ChainSession for EvmChainSession {
    fn wallet_address(&self) -> Address {
        self.wallet_address
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn marketplace(&self) -> Result<Arc<dyn MarketplaceHandle + Sync + Send>, GatewayError> {
        Ok(Arc::new(EvmMarketplaceHandle::new(
            self.marketplace_address,
            self.asset_address,
            self.provider.clone(),
        )))
    }

    fn asset(&self) -> Result<Arc<dyn AssetHandle + Sync + Send>, GatewayError> {
        Ok(Arc::new(EvmAssetHandle::new(
            self.asset_address,
            self.marketplace_address,
            self.provider.clone(),
        )))
    }
}

fn parse_address(name: &'static str, raw: &str) -> Result<Address, GatewayError> {
    raw.parse::<Address>()
        .map_err(|e| GatewayError::InvalidAddress { name, reason: e.to_string() })
}
