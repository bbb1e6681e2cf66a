use ethers::abi::{encode, Token};
use ethers::types::transaction::eip712::EIP712Domain;
use ethers::types::{Address, H256, U256};
use ethers::utils::keccak256;
use serde::{Deserialize, Serialize};

use crate::claim::Claim;
use crate::constants::*;

/**
 * Typed-data domain of a verifying contract
 *
 * Carries no chain id. The signer supplies it at signing time and the chain
 * itself at verification time.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDomain {
    /// Domain name, e.g. "boost"
    pub name: String,
    /// Domain version, e.g. "1"
    pub version: String,
    /// Address of the contract that verifies the claims
    pub verifying_contract: Address,
}

impl ClaimDomain {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            verifying_contract,
        }
    }

    /// EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)
    pub fn eip712_domain(&self, chain_id: u64) -> EIP712Domain {
        EIP712Domain {
            name: Some(self.name.clone()),
            version: Some(self.version.clone()),
            chain_id: Some(U256::from(chain_id)),
            verifying_contract: Some(self.verifying_contract),
            salt: None,
        }
    }

    pub fn separator(&self, chain_id: u64) -> [u8; 32] {
        self.eip712_domain(chain_id).separator()
    }
}

pub fn claim_type_hash(with_amount: bool) -> [u8; 32] {
    if with_amount {
        keccak256(CLAIM_TYPE)
    } else {
        keccak256(CLAIM_TYPE_WITHOUT_AMOUNT)
    }
}

/// hashStruct(Claim): keccak256(typeHash || boostId || recipient [|| amount])
pub fn claim_struct_hash(claim: &Claim) -> [u8; 32] {
    let mut tokens = vec![
        Token::FixedBytes(claim_type_hash(claim.amount.is_some()).to_vec()),
        Token::Uint(claim.boost_id.to_u256()),
        Token::Address(claim.recipient),
    ];
    if let Some(amount) = claim.amount {
        tokens.push(Token::Uint(amount));
    }
    keccak256(encode(&tokens))
}

/// keccak256(0x19 0x01 || domainSeparator || hashStruct(claim))
pub fn typed_claim_hash(domain: &ClaimDomain, chain_id: u64, claim: &Claim) -> H256 {
    let separator = domain.separator(chain_id);
    let struct_hash = claim_struct_hash(claim);
    let digest_input = [&EIP712_PREFIX[..], &separator[..], &struct_hash[..]].concat();
    H256(keccak256(digest_input))
}
