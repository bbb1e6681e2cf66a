use ethers::abi::{encode_packed, Token};
use ethers::types::H256;
use ethers::utils::{hash_message, keccak256};

use crate::claim::Claim;
use crate::error::{GuardError, Result};

/**
 * Raw claim hash (claim identifier)
 *
 * keccak256(packed(bytes32 boostId, address recipient [, uint256 amount]))
 *
 * The amount is appended only when the claim carries one.
 */
pub fn raw_claim_hash(claim: &Claim) -> Result<H256> {
    let mut tokens = vec![
        Token::FixedBytes(claim.boost_id.as_bytes().to_vec()),
        Token::Address(claim.recipient),
    ];
    if let Some(amount) = claim.amount {
        // encode_packed shrinks a bare uint to its minimal width; uint256
        // packs as the full 32-byte word
        let mut word = [0u8; 32];
        amount.to_big_endian(&mut word);
        tokens.push(Token::FixedBytes(word.to_vec()));
    }

    let packed = encode_packed(&tokens).map_err(|e| GuardError::Encoding(e.to_string()))?;
    Ok(H256(keccak256(packed)))
}

/// Raw claim hash under the personal-message prefix
/// ("\x19Ethereum Signed Message:\n32"), the value the guard key signs.
pub fn signed_message_hash(claim: &Claim) -> Result<H256> {
    let hash = raw_claim_hash(claim)?;
    Ok(hash_message(hash.as_bytes()))
}
