use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A single "this event occurred on chain" assertion, normalized across
/// event kinds and ready to submit to a prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitEvent {
    /// TXID of the transaction the event was emitted in.
    ///
    /// For report events without a dedicated report transaction this
    /// carries the hex of the domain hash being proven instead, so the
    /// prover can still correlate the assertion to on-chain state.
    pub txid: String,
    /// Protocol identifier of the event kind, see [`crate::signature`].
    pub signature: String,
    /// Value disambiguating this occurrence from others of the same kind.
    pub hash_arg: B256,
}

/// The lane an attestation travels: where the event was emitted and
/// where the resulting proof will be consumed.
///
/// Chain ids and contract addresses are kept as strings since not every
/// lane endpoint is an EVM chain. Two proof requests belong to the same
/// lane iff all four fields are equal, so this type doubles as the
/// grouping key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteParams {
    /// Chain ID the event was emitted on.
    pub emit_chain_id: String,
    /// Contract address that emitted the event.
    pub emit_address: String,
    /// Chain ID the attestation will be consumed on.
    pub consume_chain_id: String,
    /// Contract address that consumes the attestation.
    pub consume_address: String,
}

impl std::fmt::Display for RouteParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.emit_chain_id, self.emit_address, self.consume_chain_id, self.consume_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(emit_chain: &str, consume_chain: &str) -> RouteParams {
        RouteParams {
            emit_chain_id: emit_chain.to_string(),
            emit_address: "0xemit".to_string(),
            consume_chain_id: consume_chain.to_string(),
            consume_address: "0xconsume".to_string(),
        }
    }

    #[test]
    fn routes_compare_on_all_four_fields() {
        assert_eq!(route("137", "100"), route("137", "100"));
        assert_ne!(route("137", "100"), route("42161", "100"));

        let mut a = route("137", "100");
        a.consume_address = "0xother".to_string();
        assert_ne!(a, route("137", "100"));
    }

    #[test]
    fn route_display_names_both_endpoints() {
        let rendered = route("137", "100").to_string();
        assert_eq!(rendered, "137:0xemit -> 100:0xconsume");
    }
}
