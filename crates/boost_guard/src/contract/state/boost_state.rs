use ethers::types::{Address, H256, U256};

use crate::claim::BoostId;

/**
 * Boost record
 *
 * State the contract keeps per boost. Reading an unknown id yields the zeroed
 * record, the way a Solidity mapping does.
 *
 * Lifecycle:
 * 1. Created with the initial deposit
 * 2. Topped up by the owner until expiry
 * 3. Drained by claims until expiry
 * 4. Emptied by the owner's withdrawal after expiry
 */
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Boost {
    /// Identifier, immutable once created
    pub id: BoostId,

    /// External reference supplied at creation
    pub reference: H256,

    /// Token being distributed
    pub token: Address,

    /// Tokens left to distribute
    /// - Increases only on deposit
    /// - Decreases only on claim and withdraw
    pub balance: U256,

    /// Payout of a claim that carries no amount
    pub amount_per_account: Option<U256>,

    /// Account whose signatures authorize claims
    pub guard: Address,

    /// Claims are accepted from this timestamp on
    pub start: u64,

    /// Claims are rejected and withdrawal allowed from this timestamp on
    pub expires: u64,

    /// Creator of the boost
    pub owner: Address,
}

impl Boost {
    pub fn exists(&self) -> bool {
        !self.owner.is_zero()
    }

    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires
    }
}
