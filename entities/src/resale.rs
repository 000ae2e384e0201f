use alloy::primitives::TxHash;
use serde::{Deserialize, Serialize};

/// Caller's intent to put an owned item back on sale.
/// Exists only for the duration of one workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResale {
    pub token_id: u64,
    pub item_id: u64,
    /// Decimal ask in whole native-currency units, e.g. "2.0".
    pub ask_price: String,
}

/// Mined-transaction summary returned by a confirmation wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceiptInfo {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Result of a completed resale. `approval` is `None` when only the
/// listing phase ran, i.e. on the recovery path after an earlier attempt
/// already confirmed the approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResaleOutcome {
    pub approval: Option<TxReceiptInfo>,
    pub listing: TxReceiptInfo,
}
