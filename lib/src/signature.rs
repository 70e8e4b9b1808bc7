//! Event signatures of the protocol contracts.
//!
//! Fixed per-kind identifiers defined by the protocol; opaque to the
//! aggregation layer and to provers, which only need them to be stable.

/// Asset received on the "from" chain of a swap.
pub const ASSET_RECEIVE_EVENT_SIGNATURE: &str = "AssetReceive(bytes32)";

/// No-receive reported for a swap on the "from" chain.
pub const ASSET_NO_RECEIVE_EVENT_SIGNATURE: &str = "AssetNoReceive(bytes32)";

/// Asset sent on the "to" chain of a swap.
pub const ASSET_SEND_EVENT_SIGNATURE: &str = "AssetSend(bytes32)";

/// Asset sent by a liquidator on the "to" chain of a swap.
pub const ASSET_LIQ_SEND_EVENT_SIGNATURE: &str = "AssetLiqSend(bytes32)";

/// No-send reported for a swap on the "to" chain.
pub const ASSET_NO_SEND_EVENT_SIGNATURE: &str = "AssetNoSend(bytes32)";

/// Collateral withdraw reported on the lock chain.
pub const WITHDRAW_REPORT_EVENT_SIGNATURE: &str = "WithdrawReport(bytes32)";
