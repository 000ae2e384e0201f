use alloy::primitives::{Address, TxHash, U256};
use entities::market::RawMarketItem;
use rand::Rng;

pub fn rand_address() -> Address {
    Address::from(rand::thread_rng().gen::<[u8; 20]>())
}

pub fn rand_tx_hash() -> TxHash {
    TxHash::from(rand::thread_rng().gen::<[u8; 32]>())
}

/// Market item with the given ids and raw fixed-point price; the parties
/// are random addresses.
pub fn market_item(item_id: u64, token_id: u64, price: U256) -> RawMarketItem {
    RawMarketItem {
        item_id: U256::from(item_id),
        token_id: U256::from(token_id),
        seller: rand_address(),
        owner: rand_address(),
        price,
    }
}
