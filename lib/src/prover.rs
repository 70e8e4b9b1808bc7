use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::{EmitEvent, RouteParams};

/// A proving strategy a prover can advertise for a route.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum ProverCapability {
    /// # SingleProof
    ///
    /// One prover call attests a single emitted event.
    #[serde(alias = "SINGLE_PROOF")]
    SingleProof,
    /// # MultiProof
    ///
    /// One prover call attests a whole batch of events on the same route.
    #[serde(alias = "MULTI_PROOF")]
    MultiProof,
}

impl std::fmt::Display for ProverCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ProverCapability::SingleProof => "single_proof",
            ProverCapability::MultiProof => "multi_proof",
        })
    }
}

impl std::str::FromStr for ProverCapability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single_proof" => Ok(ProverCapability::SingleProof),
            "multi_proof" => Ok(ProverCapability::MultiProof),
            _ => Err(format!("Unknown prover capability {}", s)),
        }
    }
}

/// Prover error types.
#[derive(thiserror::Error, Debug)]
pub enum ProverError {
    /// The prover refused to attest the submitted events.
    #[error("ProverError::Denied `{0}`")]
    Denied(String),
    /// The prover could not be reached or answered malformed.
    #[error("ProverError::Transport `{0}`")]
    Transport(String),
    /// Request or response (de)serialization failed.
    #[error("ProverError::Param `{0}`")]
    Param(#[from] serde_json::Error),
}

impl From<String> for ProverError {
    fn from(e: String) -> Self {
        ProverError::Transport(e)
    }
}

/// Result type for prover operations.
pub type ProverResult<T, E = ProverError> = core::result::Result<T, E>;

/// Parameters of one `get_proof` call: a proving route, the caller's
/// operation tag, and the events to attest on that route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetProofParams {
    /// The route every event in this call travels.
    pub route: RouteParams,
    /// Opaque caller-supplied tag, propagated for tracing only.
    pub operation: String,
    /// Events to attest, in filing order.
    pub emit_events: Vec<EmitEvent>,
}

/// The external proving service boundary.
///
/// Implementations are expected to be cheap to query for capabilities
/// and to return exactly one attestation string per submitted event,
/// in input order. Timeouts belong to the implementation, not to the
/// callers of this trait.
#[async_trait::async_trait]
pub trait Prover: Send + Sync {
    /// The proving strategies supported for the given route.
    fn capabilities(&self, route: &RouteParams) -> HashSet<ProverCapability>;

    /// Attest the given events, returning one proof per event in input
    /// order.
    async fn get_proof(&self, params: GetProofParams) -> ProverResult<Vec<String>>;
}
