use std::sync::Arc;

use alloy::primitives::Address;
use thiserror::Error;

use crate::contracts::{AssetHandle, MarketplaceHandle};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No usable provider: nothing installed or configured, the node is
    /// unreachable, or the user declined the connection prompt.
    #[error("wallet provider unavailable: {0}")]
    WalletUnavailable(String),
    /// The provider answered, but on the wrong network.
    #[error("connected to chain {actual}, configuration expects chain {expected}")]
    NetworkMismatch { expected: u64, actual: u64 },
}

/// Misconfiguration at the contract boundary. Fatal for the process: the
/// deployed addresses and ABI are immutable configuration, retrying
/// cannot fix them.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{name} contract address is invalid: {reason}")]
    InvalidAddress { name: &'static str, reason: String },
    #[error("failed to bind {name} contract")]
    Binding {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Entry point to the wallet provider.
///
/// Every call establishes an independent signer-bound session. Top-level
/// operations reconnect instead of sharing a session, so a stale signer is
/// never carried from one user action into a later one.
#[async_trait::async_trait]
pub trait WalletSession {
    async fn connect(&self) -> Result<Arc<dyn ChainSession + Sync + Send>, SessionError>;
}

/// A connected signer bound to a provider, able to construct typed
/// contract handles. Handle construction is pure: nothing beyond
/// (address, ABI, connection) goes into it.
pub trait ChainSession: Sync + Send {
    /// Address of the connected signer account.
    fn wallet_address(&self) -> Address;
    fn chain_id(&self) -> u64;
    /// Signer-bound marketplace handle.
    fn marketplace(&self) -> Result<Arc<dyn MarketplaceHandle + Sync + Send>, GatewayError>;
    /// Signer-bound asset contract handle. Read methods only need the
    /// underlying provider; writes go through the session signer.
    fn asset(&self) -> Result<Arc<dyn AssetHandle + Sync + Send>, GatewayError>;
}
