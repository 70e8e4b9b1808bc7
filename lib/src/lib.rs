//! Shared value types for the chainproof SDK.
//!
//! This crate defines the vocabulary the rest of the SDK speaks:
//! emitted-event assertions, proving routes, the prover boundary and its
//! capability model, plus the keccak helpers used to derive event hash
//! arguments from ABI-encoded protocol records.

pub mod event;
pub mod hash;
pub mod prover;
pub mod signature;
pub mod target;

pub use event::{EmitEvent, RouteParams};
pub use prover::{GetProofParams, Prover, ProverCapability, ProverError, ProverResult};
