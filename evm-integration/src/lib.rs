//! Alloy-backed implementation of the wallet and contract seams.

mod abi;
mod handles;
mod wallet_session_evm;

pub use wallet_session_evm::EvmWalletSession;
