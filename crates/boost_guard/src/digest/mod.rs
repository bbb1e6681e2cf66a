pub mod raw_hash;
pub mod typed_data;

pub use raw_hash::*;
pub use typed_data::*;

use ethers::types::{Address, Signature, H256};

use crate::claim::Claim;
use crate::error::{GuardError, Result};

/**
 * Digest scheme dictated by the verifying contract
 *
 * - RawHash: personal-message signature over the packed claim hash. Binds
 *   boost and recipient only; safe only while boost ids are never reused
 *   across chains or deployments.
 * - TypedData: EIP-712 signature whose domain binds name, version, chain id
 *   and verifying contract. The production scheme.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigestScheme {
    RawHash,
    TypedData(ClaimDomain),
}

impl DigestScheme {
    pub fn requires_chain_id(&self) -> bool {
        matches!(self, DigestScheme::TypedData(_))
    }
}

/**
 * Builds the digest the guard signs for a claim
 *
 * @param claim - The claim to authorize
 * @param scheme - Scheme the verifying contract recomputes
 * @param chain_id - Chain the signature is valid on (typed data only)
 *
 * A typed-data digest without a chain id fails with ChainUnavailable.
 */
pub fn claim_digest(claim: &Claim, scheme: &DigestScheme, chain_id: Option<u64>) -> Result<H256> {
    match scheme {
        DigestScheme::RawHash => signed_message_hash(claim),
        DigestScheme::TypedData(domain) => {
            let chain_id = chain_id.ok_or(GuardError::ChainUnavailable)?;
            Ok(typed_claim_hash(domain, chain_id, claim))
        }
    }
}

/// Recovers the signer of `digest` from an encoded r || s || v signature.
/// Malformed signatures recover nothing.
pub fn recover_guard(digest: H256, signature: &[u8]) -> Option<Address> {
    let signature = Signature::try_from(signature).ok()?;
    signature.recover(digest).ok()
}
