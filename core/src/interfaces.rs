use chainproof_lib::{ProverError, RouteParams};

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    /// No proving strategy is usable for a route after capability
    /// filtering. Fatal for the whole build, no partial result.
    #[error("prover has no usable proof capability for route {0}")]
    NoUsableCapability(RouteParams),

    /// The prover answered with a different number of attestations than
    /// events submitted.
    #[error("prover returned {got} proofs for route {route}, expected {expected}")]
    ProofCountMismatch {
        route: RouteParams,
        expected: usize,
        got: usize,
    },

    /// Errors raised by the prover propagate unchanged; they are not
    /// retried at this layer.
    #[error(transparent)]
    Prover(#[from] ProverError),
}

pub type AggregatorResult<T> = Result<T, AggregatorError>;
