use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Market listing record exactly as the marketplace contract returns it.
/// Ids and price are still raw 256-bit words at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarketItem {
    pub item_id: U256,
    pub token_id: U256,
    pub seller: Address,
    pub owner: Address,
    /// Fixed-point amount, scaled by the native currency's decimals.
    pub price: U256,
}

/// Off-chain metadata document fetched from a token URI.
///
/// Only `image` is required; metadata servers commonly attach more fields
/// and unknown ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub image: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A fully resolved catalog row: ids narrowed and validated, price
/// unit-converted, image URI pulled from metadata.
///
/// Records are immutable snapshots; a catalog refresh replaces the whole
/// sequence rather than mutating rows in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub item_id: u64,
    pub token_id: u64,
    pub seller: Address,
    pub owner: Address,
    /// Decimal amount in whole native-currency units, e.g. "1.5".
    pub price: String,
    pub image: String,
}
