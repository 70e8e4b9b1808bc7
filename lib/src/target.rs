//! Proof target resolution for per-deployment prover configs.
//!
//! A prover config is built per contract deployment and needs to map
//! the chain an event is emitted on to the consuming chain/contract
//! plus prover-specific target info (verifier contracts, transport
//! adapters and the like).

use serde::{Deserialize, Serialize};

/// Key for resolving a prover deployment target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProofTargetParams {
    /// Chain ID the event is emitted on.
    pub emit_chain_id: String,
    /// Chain ID the attestation is consumed on.
    pub consume_chain_id: String,
    /// Contract address consuming the attestation.
    pub consume_address: String,
}

/// Static table mapping proving lanes to prover-specific target info.
///
/// A prover config declares its deployment table once and resolves
/// targets from it when a proof request comes in:
///
/// ```
/// use chainproof_lib::target::{ProofTargetParams, ProofTargetSelector};
///
/// struct BitcoinTargetInfo {
///     proof_verifier: &'static str,
/// }
///
/// let lane = ProofTargetParams {
///     emit_chain_id: "bitcoin".to_string(),
///     consume_chain_id: "100".to_string(),
///     consume_address: "0x8271BeCaD4C7114488461BeD1B9193d4A5126797".to_string(),
/// };
/// let targets = ProofTargetSelector::new(vec![(
///     lane.clone(),
///     BitcoinTargetInfo {
///         proof_verifier: "0xA9579DC50DD0952077B04323E9AAAF2470989d12",
///     },
/// )]);
///
/// let info = targets.select_target(&lane).expect("lane is deployed");
/// assert_eq!(info.proof_verifier, "0xA9579DC50DD0952077B04323E9AAAF2470989d12");
/// ```
#[derive(Clone, Debug)]
pub struct ProofTargetSelector<T> {
    targets: Vec<(ProofTargetParams, T)>,
}

impl<T> ProofTargetSelector<T> {
    pub fn new(targets: Vec<(ProofTargetParams, T)>) -> Self {
        Self { targets }
    }

    /// Resolve the target info for the given lane, matching on all
    /// three key fields.
    pub fn select_target(&self, params: &ProofTargetParams) -> Option<&T> {
        self.targets
            .iter()
            .find(|(key, _)| key == params)
            .map(|(_, info)| info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(emit_chain_id: &str) -> ProofTargetParams {
        ProofTargetParams {
            emit_chain_id: emit_chain_id.to_string(),
            consume_chain_id: "100".to_string(),
            consume_address: "0x8271BeCaD4C7114488461BeD1B9193d4A5126797".to_string(),
        }
    }

    #[test]
    fn selects_target_by_full_key() {
        let selector = ProofTargetSelector::new(vec![
            (params("137"), "polygon-verifier"),
            (params("42161"), "arbitrum-verifier"),
        ]);

        assert_eq!(selector.select_target(&params("137")), Some(&"polygon-verifier"));
        assert_eq!(
            selector.select_target(&params("42161")),
            Some(&"arbitrum-verifier")
        );
    }

    #[test]
    fn unknown_lane_resolves_to_none() {
        let selector = ProofTargetSelector::new(vec![(params("137"), ())]);

        assert_eq!(selector.select_target(&params("1")), None);

        let mut other_consumer = params("137");
        other_consumer.consume_address = "0x0000000000000000000000000000000000000000".to_string();
        assert_eq!(selector.select_target(&other_consumer), None);
    }
}
