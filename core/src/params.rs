//! Registration parameters, one struct per recognized event kind.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Params for [`ProofAggregator::add_asset_receive_event_proof`].
///
/// [`ProofAggregator::add_asset_receive_event_proof`]: crate::ProofAggregator::add_asset_receive_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetReceiveProofParams {
    /// Hash of the swap.
    pub hash: B256,
    /// "from" chain ID of the swap.
    pub from_chain_id: String,
    /// Protocol contract address on the "from" chain.
    pub from_contract_address: String,
    /// TXID of the receive transaction.
    pub receive_txid: String,
    /// Chain ID of the collateral.
    pub collateral_chain_id: String,
    /// Protocol contract address on the collateral chain.
    pub collateral_contract_address: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}

/// Params for [`ProofAggregator::add_asset_no_receive_event_proof`].
///
/// [`ProofAggregator::add_asset_no_receive_event_proof`]: crate::ProofAggregator::add_asset_no_receive_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetNoReceiveProofParams {
    /// Hash of the swap.
    pub hash: B256,
    /// "from" chain ID of the swap.
    pub from_chain_id: String,
    /// Protocol contract address on the "from" chain.
    pub from_contract_address: String,
    /// TXID of the no-receive report transaction.
    ///
    /// An empty value is replaced with the hex of the swap hash.
    pub report_no_receive_txid: String,
    /// Caller of the report-no-receive transaction.
    pub reporter: Address,
    /// Chain ID of the collateral.
    pub collateral_chain_id: String,
    /// Protocol contract address on the collateral chain.
    pub collateral_contract_address: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}

/// Params for [`ProofAggregator::add_asset_send_event_proof`].
///
/// [`ProofAggregator::add_asset_send_event_proof`]: crate::ProofAggregator::add_asset_send_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetSendProofParams {
    /// Hash of the swap.
    pub hash: B256,
    /// "to" chain ID of the swap.
    pub to_chain_id: String,
    /// Protocol contract address on the "to" chain.
    pub to_contract_address: String,
    /// TXID of the send transaction.
    pub send_txid: String,
    /// Chain ID of the collateral.
    pub collateral_chain_id: String,
    /// Protocol contract address on the collateral chain.
    pub collateral_contract_address: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}

/// Params for [`ProofAggregator::add_asset_liq_send_event_proof`].
///
/// [`ProofAggregator::add_asset_liq_send_event_proof`]: crate::ProofAggregator::add_asset_liq_send_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetLiqSendProofParams {
    /// Hash of the swap.
    pub hash: B256,
    /// "to" chain ID of the swap.
    pub to_chain_id: String,
    /// Protocol contract address on the "to" chain.
    pub to_contract_address: String,
    /// TXID of the liq-send transaction.
    pub liq_send_txid: String,
    /// Caller of the liq-send transaction.
    pub liquidator: Address,
    /// Chain ID of the collateral.
    pub collateral_chain_id: String,
    /// Protocol contract address on the collateral chain.
    pub collateral_contract_address: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}

/// Params for [`ProofAggregator::add_asset_no_send_event_proof`].
///
/// [`ProofAggregator::add_asset_no_send_event_proof`]: crate::ProofAggregator::add_asset_no_send_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetNoSendProofParams {
    /// Hash of the swap.
    pub hash: B256,
    /// "to" chain ID of the swap.
    pub to_chain_id: String,
    /// Protocol contract address on the "to" chain.
    pub to_contract_address: String,
    /// TXID of the report-no-send transaction.
    ///
    /// An empty value is replaced with the hex of the swap hash.
    pub report_no_send_txid: String,
    /// Caller of the report-no-send transaction.
    pub reporter: Address,
    /// Chain ID of the collateral.
    pub collateral_chain_id: String,
    /// Protocol contract address on the collateral chain.
    pub collateral_contract_address: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}

/// Params for [`ProofAggregator::add_withdraw_report_event_proof`].
///
/// Withdraw reports travel between EVM collateral chains only, so the
/// lock/unlock chain ids are numeric.
///
/// [`ProofAggregator::add_withdraw_report_event_proof`]: crate::ProofAggregator::add_withdraw_report_event_proof
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithdrawReportProofParams {
    /// Collateral manager variant.
    pub variant: U256,
    /// Lock chain ID.
    pub lock_chain_id: u64,
    /// Unlock chain ID.
    pub unlock_chain_id: u64,
    /// Account making the withdraw.
    pub account: Address,
    /// Collateral manager "lockCounter" on the lock chain.
    pub lock_counter: U256,
    /// Amount in wei to withdraw.
    pub amount: U256,
    /// Collateral manager "nonce" on the lock chain.
    pub nonce: U256,
    /// Contract address on the lock chain.
    pub lock_chain_contract_address: String,
    /// Contract address on the unlock chain.
    pub unlock_chain_contract_address: String,
    /// TXID of the report-withdraw transaction.
    pub report_withdraw_txid: String,
    /// Caller-supplied operation tag, propagated for tracing.
    pub operation: String,
}
