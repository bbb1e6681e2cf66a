use ethers::types::{Address, U256};

use crate::claim::BoostId;

/// Event emitted when a new boost is created
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoostCreated {
    /// Identifier of the boost
    pub boost_id: BoostId,
    /// Owner of the boost
    pub owner: Address,
    /// Guard whose signatures authorize claims
    pub guard: Address,
    /// Token being distributed
    pub token: Address,
    /// Initial deposit
    pub deposit: U256,
    /// Expiry of the boost (Unix timestamp)
    pub expires: u64,
}

/// Event emitted when tokens are added to a boost, including the initial deposit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoostDeposited {
    pub boost_id: BoostId,
    /// Account the tokens were pulled from
    pub sender: Address,
    pub amount: U256,
}

/// Event emitted for every paid claim
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensClaimed {
    pub boost_id: BoostId,
    pub recipient: Address,
    pub amount: U256,
    /// Boost balance left after this claim
    pub remaining: U256,
}

/// Event emitted when the owner withdraws the remaining balance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoostWithdrawn {
    pub boost_id: BoostId,
    pub owner: Address,
    /// Account that received the tokens
    pub destination: Address,
    pub amount: U256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoostEvent {
    Created(BoostCreated),
    Deposited(BoostDeposited),
    Claimed(TokensClaimed),
    Withdrawn(BoostWithdrawn),
}

impl BoostEvent {
    pub fn boost_id(&self) -> BoostId {
        match self {
            BoostEvent::Created(e) => e.boost_id,
            BoostEvent::Deposited(e) => e.boost_id,
            BoostEvent::Claimed(e) => e.boost_id,
            BoostEvent::Withdrawn(e) => e.boost_id,
        }
    }
}

impl From<BoostCreated> for BoostEvent {
    fn from(event: BoostCreated) -> Self {
        BoostEvent::Created(event)
    }
}

impl From<BoostDeposited> for BoostEvent {
    fn from(event: BoostDeposited) -> Self {
        BoostEvent::Deposited(event)
    }
}

impl From<TokensClaimed> for BoostEvent {
    fn from(event: TokensClaimed) -> Self {
        BoostEvent::Claimed(event)
    }
}

impl From<BoostWithdrawn> for BoostEvent {
    fn from(event: BoostWithdrawn) -> Self {
        BoostEvent::Withdrawn(event)
    }
}
