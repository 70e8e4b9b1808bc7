//! Proof aggregation and batching for cross-chain operations.
//!
//! A [`ProofAggregator`] collects "prove that event E happened" requests
//! issued over the course of one logical operation, groups them by the
//! route they travel, proves every route with the most efficient
//! strategy the prover supports, and hands attestations back in
//! registration order regardless of how they were dispatched.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use alloy_primitives::U256;
use chainproof_lib::{
    hash::{swap_actor_hash, withdraw_report_hash, WithdrawReport},
    signature::{
        ASSET_LIQ_SEND_EVENT_SIGNATURE, ASSET_NO_RECEIVE_EVENT_SIGNATURE,
        ASSET_NO_SEND_EVENT_SIGNATURE, ASSET_RECEIVE_EVENT_SIGNATURE, ASSET_SEND_EVENT_SIGNATURE,
        WITHDRAW_REPORT_EVENT_SIGNATURE,
    },
    EmitEvent, GetProofParams, Prover, ProverCapability, RouteParams,
};
use futures::future::try_join_all;
use tracing::debug;

use crate::interfaces::{AggregatorError, AggregatorResult};
use crate::params::{
    AssetLiqSendProofParams, AssetNoReceiveProofParams, AssetNoSendProofParams,
    AssetReceiveProofParams, AssetSendProofParams, WithdrawReportProofParams,
};

pub mod interfaces;
pub mod params;

/// One registered assertion plus its position in registration order.
struct ProofRequest {
    event: EmitEvent,
    index: usize,
}

/// Accumulated requests for one route.
struct PendingGroup {
    /// Operation tag of the first registration on this route.
    operation: String,
    requests: Vec<ProofRequest>,
}

/// Collects proof requests and batches them per route.
///
/// An aggregator instance is single-owner: it is meant to serve one
/// logical operation at a time, with registrations strictly preceding
/// [`ProofAggregator::build`]. Registration while a build is in flight
/// is ruled out by the `&mut self` receivers.
pub struct ProofAggregator {
    prover: Arc<dyn Prover>,
    ignore_capabilities: HashSet<ProverCapability>,
    pending: BTreeMap<RouteParams, PendingGroup>,
    next_request_index: usize,
}

impl ProofAggregator {
    pub fn new(prover: Arc<dyn Prover>) -> Self {
        Self::with_ignored_capabilities(prover, [])
    }

    /// Like [`ProofAggregator::new`], but any capability listed in
    /// `ignore_capabilities` is treated as unsupported even when the
    /// prover advertises it. Useful to force the single-proof fallback
    /// for testing or for known-broken batch paths.
    pub fn with_ignored_capabilities(
        prover: Arc<dyn Prover>,
        ignore_capabilities: impl IntoIterator<Item = ProverCapability>,
    ) -> Self {
        Self {
            prover,
            ignore_capabilities: ignore_capabilities.into_iter().collect(),
            pending: BTreeMap::new(),
            next_request_index: 0,
        }
    }

    /// Number of requests registered since the last build.
    pub fn pending_requests(&self) -> usize {
        self.next_request_index
    }

    /// Register an asset receive event of a swap.
    pub fn add_asset_receive_event_proof(&mut self, params: AssetReceiveProofParams) {
        let event = EmitEvent {
            txid: params.receive_txid,
            signature: ASSET_RECEIVE_EVENT_SIGNATURE.to_string(),
            hash_arg: params.hash,
        };
        let route = RouteParams {
            emit_chain_id: params.from_chain_id,
            emit_address: params.from_contract_address,
            consume_chain_id: params.collateral_chain_id,
            consume_address: params.collateral_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Register a no-receive report event of a swap.
    pub fn add_asset_no_receive_event_proof(&mut self, params: AssetNoReceiveProofParams) {
        let txid = if params.report_no_receive_txid.is_empty() {
            format!("0x{}", hex::encode(params.hash))
        } else {
            params.report_no_receive_txid
        };
        let event = EmitEvent {
            txid,
            signature: ASSET_NO_RECEIVE_EVENT_SIGNATURE.to_string(),
            hash_arg: swap_actor_hash(params.hash, params.reporter),
        };
        let route = RouteParams {
            emit_chain_id: params.from_chain_id,
            emit_address: params.from_contract_address,
            consume_chain_id: params.collateral_chain_id,
            consume_address: params.collateral_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Register an asset send event of a swap.
    pub fn add_asset_send_event_proof(&mut self, params: AssetSendProofParams) {
        let event = EmitEvent {
            txid: params.send_txid,
            signature: ASSET_SEND_EVENT_SIGNATURE.to_string(),
            hash_arg: params.hash,
        };
        let route = RouteParams {
            emit_chain_id: params.to_chain_id,
            emit_address: params.to_contract_address,
            consume_chain_id: params.collateral_chain_id,
            consume_address: params.collateral_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Register a liquidation send event of a swap.
    pub fn add_asset_liq_send_event_proof(&mut self, params: AssetLiqSendProofParams) {
        let event = EmitEvent {
            txid: params.liq_send_txid,
            signature: ASSET_LIQ_SEND_EVENT_SIGNATURE.to_string(),
            hash_arg: swap_actor_hash(params.hash, params.liquidator),
        };
        let route = RouteParams {
            emit_chain_id: params.to_chain_id,
            emit_address: params.to_contract_address,
            consume_chain_id: params.collateral_chain_id,
            consume_address: params.collateral_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Register a no-send report event of a swap.
    pub fn add_asset_no_send_event_proof(&mut self, params: AssetNoSendProofParams) {
        let txid = if params.report_no_send_txid.is_empty() {
            format!("0x{}", hex::encode(params.hash))
        } else {
            params.report_no_send_txid
        };
        let event = EmitEvent {
            txid,
            signature: ASSET_NO_SEND_EVENT_SIGNATURE.to_string(),
            hash_arg: swap_actor_hash(params.hash, params.reporter),
        };
        let route = RouteParams {
            emit_chain_id: params.to_chain_id,
            emit_address: params.to_contract_address,
            consume_chain_id: params.collateral_chain_id,
            consume_address: params.collateral_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Register a collateral withdraw report event.
    pub fn add_withdraw_report_event_proof(&mut self, params: WithdrawReportProofParams) {
        let report_hash = withdraw_report_hash(&WithdrawReport {
            variant: params.variant,
            lock_chain: U256::from(params.lock_chain_id),
            unlock_chain: U256::from(params.unlock_chain_id),
            account: params.account,
            lock_counter: params.lock_counter,
            amount: params.amount,
            nonce: params.nonce,
        });
        let event = EmitEvent {
            txid: params.report_withdraw_txid,
            signature: WITHDRAW_REPORT_EVENT_SIGNATURE.to_string(),
            hash_arg: report_hash,
        };
        let route = RouteParams {
            emit_chain_id: params.lock_chain_id.to_string(),
            emit_address: params.lock_chain_contract_address,
            consume_chain_id: params.unlock_chain_id.to_string(),
            consume_address: params.unlock_chain_contract_address,
        };
        self.add_event(route, params.operation, event);
    }

    /// Build attestations for everything registered since construction
    /// or the previous build, in registration order.
    ///
    /// Routes are dispatched concurrently; within a route one
    /// multi-proof call is issued when the prover supports it and one
    /// call per event otherwise. A route with no usable capability
    /// fails the whole build.
    ///
    /// Pending state is consumed when this method is invoked: on
    /// failure nothing is returned and the events must be registered
    /// again before retrying.
    pub async fn build(&mut self) -> AggregatorResult<Vec<String>> {
        let pending = std::mem::take(&mut self.pending);
        let total = std::mem::take(&mut self.next_request_index);

        debug!(
            "building {} proof requests across {} routes",
            total,
            pending.len()
        );

        let batches = try_join_all(
            pending
                .iter()
                .map(|(route, group)| self.prove_group(route, group)),
        )
        .await?;

        // Indices partition [0, total) across groups, so every slot is
        // written exactly once.
        let mut proofs = vec![String::new(); total];
        for batch in batches {
            for (index, proof) in batch {
                proofs[index] = proof;
            }
        }
        Ok(proofs)
    }

    fn add_event(&mut self, route: RouteParams, operation: String, event: EmitEvent) {
        let request = ProofRequest {
            event,
            index: self.next_request_index,
        };
        self.next_request_index += 1;
        self.pending
            .entry(route)
            .or_insert_with(|| PendingGroup {
                operation,
                requests: Vec::new(),
            })
            .requests
            .push(request);
    }

    async fn prove_group(
        &self,
        route: &RouteParams,
        group: &PendingGroup,
    ) -> AggregatorResult<HashMap<usize, String>> {
        let capabilities = self.prover.capabilities(route);
        let usable = |capability: ProverCapability| {
            capabilities.contains(&capability) && !self.ignore_capabilities.contains(&capability)
        };

        if usable(ProverCapability::MultiProof) {
            self.prove_group_multi(route, group).await
        } else if usable(ProverCapability::SingleProof) {
            self.prove_group_single(route, group).await
        } else {
            Err(AggregatorError::NoUsableCapability(route.clone()))
        }
    }

    async fn prove_group_multi(
        &self,
        route: &RouteParams,
        group: &PendingGroup,
    ) -> AggregatorResult<HashMap<usize, String>> {
        debug!(
            "proving {} events on route {route} with one multi-proof call",
            group.requests.len()
        );
        let params = GetProofParams {
            route: route.clone(),
            operation: group.operation.clone(),
            emit_events: group
                .requests
                .iter()
                .map(|request| request.event.clone())
                .collect(),
        };
        let proofs = self.prover.get_proof(params).await?;
        if proofs.len() != group.requests.len() {
            return Err(AggregatorError::ProofCountMismatch {
                route: route.clone(),
                expected: group.requests.len(),
                got: proofs.len(),
            });
        }
        Ok(group
            .requests
            .iter()
            .map(|request| request.index)
            .zip(proofs)
            .collect())
    }

    async fn prove_group_single(
        &self,
        route: &RouteParams,
        group: &PendingGroup,
    ) -> AggregatorResult<HashMap<usize, String>> {
        debug!(
            "proving {} events on route {route} event by event",
            group.requests.len()
        );
        let proofs = try_join_all(group.requests.iter().map(|request| {
            let params = GetProofParams {
                route: route.clone(),
                operation: group.operation.clone(),
                emit_events: vec![request.event.clone()],
            };
            async move {
                let mut proofs = self.prover.get_proof(params).await?;
                if proofs.len() != 1 {
                    return Err(AggregatorError::ProofCountMismatch {
                        route: route.clone(),
                        expected: 1,
                        got: proofs.len(),
                    });
                }
                Ok::<_, AggregatorError>((request.index, proofs.remove(0)))
            }
        }))
        .await?;
        Ok(proofs.into_iter().collect())
    }
}
