//! In-memory doubles for the wallet, the contracts, and the metadata
//! server, used by the workflow integration tests.

use alloy::primitives::U256;

pub mod data_gen;
mod fake_chain;
mod fake_metadata;

pub use fake_chain::{CallRecord, FakeChainCfg, FakeWorld, TxScript};
pub use fake_metadata::FakeMetadataStore;

/// URI the fake asset contract reports for a token. The fake metadata
/// store is keyed by the same scheme.
pub fn token_uri(token_id: U256) -> String {
    util::str_util::form_url("http://metadata.test", 80, &format!("token/{token_id}.json"))
}
