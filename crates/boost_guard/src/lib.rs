/*!
 * Boost Guard
 *
 * Off-chain authorization for Boost token distributions. A boost owner
 * escrows tokens in the Boost contract and names a guard; recipients can
 * only claim with a signature from that guard over their claim.
 *
 * Key Features:
 * - Two digest schemes matching the verifying contract: a raw packed hash
 *   signed as a personal message, and EIP-712 typed data bound to chain id
 *   and contract address
 * - Pluggable claim strategies (fixed unit per recipient, or amount fixed
 *   by the contract)
 * - Batch signing that aborts as a whole on the first failure
 * - An in-memory Boost contract that recomputes digests and recovers the
 *   guard, used to drive signatures through the full lifecycle
 *
 * Workflow:
 * 1. Owner creates a boost with a deposit, a guard and an expiry
 * 2. Guard runs a strategy over the eligible recipients and signs each claim
 * 3. Anyone submits the signed claims; each recipient is paid at most once
 * 4. Owner withdraws the remaining balance once the boost has expired
 */

pub mod claim;
pub mod config;
pub mod constants;
pub mod contract;
pub mod digest;
pub mod error;
pub mod guard;
pub mod signature;
pub mod signer;
pub mod strategy;

#[cfg(test)]
pub mod test;

pub use claim::*;
pub use config::*;
pub use digest::*;
pub use error::*;
pub use guard::*;
pub use signature::*;
pub use signer::*;
pub use strategy::*;
