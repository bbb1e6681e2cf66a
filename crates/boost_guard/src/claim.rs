use std::fmt;

use ethers::types::{Address, Bytes, Signature, H256, U256};
use ethers::utils::keccak256;
use serde::{Deserialize, Serialize};

/**
 * Boost identifier
 *
 * A single 32-byte big-endian word. Content-derived ids (hash of a label)
 * and sequential ids (a counter) share this representation, so packing the
 * id as `bytes32` or as `uint256` yields identical bytes.
 */
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BoostId(pub H256);

impl BoostId {
    /// keccak-256 of a utf-8 label, same as `ethers.utils.id(label)`
    pub fn from_label(label: &str) -> Self {
        Self(H256(keccak256(label.as_bytes())))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_fixed_bytes()
    }

    pub fn to_u256(&self) -> U256 {
        U256::from_big_endian(self.0.as_bytes())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<H256> for BoostId {
    fn from(value: H256) -> Self {
        Self(value)
    }
}

impl From<U256> for BoostId {
    fn from(value: U256) -> Self {
        let mut bytes = [0u8; 32];
        value.to_big_endian(&mut bytes);
        Self(H256(bytes))
    }
}

impl From<u64> for BoostId {
    fn from(value: u64) -> Self {
        U256::from(value).into()
    }
}

impl fmt::Display for BoostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/**
 * Claim record
 *
 * One entitlement of one recipient in one boost. Built by a strategy for the
 * duration of a signing batch and never persisted; the contract tracks the
 * claimed state per (boost, recipient).
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Boost this claim belongs to
    pub boost_id: BoostId,

    /// Account allowed to redeem the claim
    pub recipient: Address,

    /// Signed entitlement
    /// - `None` defers to the amount per account fixed at boost creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<U256>,
}

impl Claim {
    pub fn new(boost_id: BoostId, recipient: Address) -> Self {
        Self {
            boost_id,
            recipient,
            amount: None,
        }
    }

    pub fn with_amount(boost_id: BoostId, recipient: Address, amount: impl Into<U256>) -> Self {
        Self {
            boost_id,
            recipient,
            amount: Some(amount.into()),
        }
    }
}

/// A claim paired with the guard signature authorizing it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedClaim {
    pub claim: Claim,
    pub signature: Signature,
}

impl SignedClaim {
    /// Signature encoded as r || s || v, the form the contract accepts
    pub fn signature_bytes(&self) -> Bytes {
        Bytes::from(self.signature.to_vec())
    }
}
