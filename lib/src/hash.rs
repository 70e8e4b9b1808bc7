//! Keccak helpers for deriving event hash arguments.
//!
//! The protocol contracts disambiguate report events by hashing
//! ABI-encoded records, so the same tuples are reproduced here with
//! `abi.encode` semantics.

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

/// Returns `keccak256(abi.encode(swap_hash, actor))`.
///
/// Identifies the actor of a swap report or liquidation: the reporter
/// of a no-receive/no-send report, or the liquidator of a liq-send.
pub fn swap_actor_hash(swap_hash: B256, actor: Address) -> B256 {
    keccak256((swap_hash, actor).abi_encode())
}

/// The record a collateral withdraw report commits to on the lock chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawReport {
    /// Collateral manager variant.
    pub variant: U256,
    /// Chain the collateral is locked on.
    pub lock_chain: U256,
    /// Chain the collateral is unlocked on.
    pub unlock_chain: U256,
    /// Account making the withdraw.
    pub account: Address,
    /// Collateral manager "lockCounter" on the lock chain.
    pub lock_counter: U256,
    /// Amount in wei to withdraw.
    pub amount: U256,
    /// Collateral manager "nonce" on the lock chain.
    pub nonce: U256,
}

/// Returns `keccak256(abi.encode(variant, lockChain, unlockChain,
/// account, lockCounter, amount, nonce))`.
pub fn withdraw_report_hash(report: &WithdrawReport) -> B256 {
    keccak256(
        (
            report.variant,
            report.lock_chain,
            report.unlock_chain,
            report.account,
            report.lock_counter,
            report.amount,
            report.nonce,
        )
            .abi_encode(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WithdrawReport {
        WithdrawReport {
            variant: U256::from(1),
            lock_chain: U256::from(137),
            unlock_chain: U256::from(100),
            account: Address::repeat_byte(0x42),
            lock_counter: U256::from(7),
            amount: U256::from(1_000_000_000u64),
            nonce: U256::from(3),
        }
    }

    #[test]
    fn swap_actor_hash_is_deterministic() {
        let hash = B256::repeat_byte(0x11);
        let actor = Address::repeat_byte(0x22);
        assert_eq!(swap_actor_hash(hash, actor), swap_actor_hash(hash, actor));
    }

    #[test]
    fn swap_actor_hash_discriminates_actor_and_hash() {
        let hash = B256::repeat_byte(0x11);
        let actor = Address::repeat_byte(0x22);
        assert_ne!(
            swap_actor_hash(hash, actor),
            swap_actor_hash(hash, Address::repeat_byte(0x23))
        );
        assert_ne!(
            swap_actor_hash(hash, actor),
            swap_actor_hash(B256::repeat_byte(0x12), actor)
        );
    }

    #[test]
    fn swap_actor_encoding_is_two_words() {
        let encoded = (B256::repeat_byte(0x11), Address::repeat_byte(0x22)).abi_encode();
        assert_eq!(encoded.len(), 64);
    }

    #[test]
    fn withdraw_report_encoding_is_seven_words() {
        let r = report();
        let encoded = (
            r.variant,
            r.lock_chain,
            r.unlock_chain,
            r.account,
            r.lock_counter,
            r.amount,
            r.nonce,
        )
            .abi_encode();
        assert_eq!(encoded.len(), 7 * 32);
    }

    #[test]
    fn withdraw_report_hash_commits_to_every_field() {
        let base = withdraw_report_hash(&report());
        assert_eq!(base, withdraw_report_hash(&report()));

        let mut changed = report();
        changed.nonce = U256::from(4);
        assert_ne!(base, withdraw_report_hash(&changed));

        let mut changed = report();
        changed.account = Address::repeat_byte(0x43);
        assert_ne!(base, withdraw_report_hash(&changed));
    }
}
