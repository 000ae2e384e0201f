//! Boundary conversion from raw on-chain records into catalog rows.

use alloy::primitives::U256;
use entities::market::{AssetMetadata, AssetRecord, RawMarketItem};
use thiserror::Error;
use util::units::{unscale_amount, NATIVE_DECIMALS};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The contract returned an id wider than the catalog's 64-bit ids.
    #[error("{field} {value} does not fit in 64 bits")]
    IdOutOfRange { field: &'static str, value: String },
}

pub fn to_asset_record(
    raw: &RawMarketItem,
    metadata: &AssetMetadata,
) -> Result<AssetRecord, ConvertError> {
    Ok(AssetRecord {
        item_id: narrow_id("itemId", raw.item_id)?,
        token_id: narrow_id("tokenId", raw.token_id)?,
        seller: raw.seller,
        owner: raw.owner,
        price: unscale_amount(raw.price, NATIVE_DECIMALS),
        image: metadata.image.clone(),
    })
}

fn narrow_id(field: &'static str, value: U256) -> Result<u64, ConvertError> {
    u64::try_from(value).map_err(|_| ConvertError::IdOutOfRange { field, value: value.to_string() })
}
