use ethers::types::{Address, Signature};
use tracing::{debug, info, warn};

use crate::claim::{BoostId, Claim};
use crate::digest::{claim_digest, DigestScheme};
use crate::error::Result;
use crate::signer::GuardSigner;

/**
 * Signs a batch of claims
 *
 * @param signer - Guard of the boost the claims belong to
 * @param scheme - Digest scheme of the verifying contract
 * @param claims - Claims to authorize, in submission order
 *
 * Returns one signature per claim, at the same index. The chain id is
 * resolved once per batch and only for typed data. Any failure aborts the
 * batch and no partial list is returned; retrying means re-signing the
 * whole batch.
 */
pub async fn generate_signatures<S>(
    signer: &S,
    scheme: &DigestScheme,
    claims: &[Claim],
) -> Result<Vec<Signature>>
where
    S: GuardSigner + ?Sized,
{
    let chain_id = if scheme.requires_chain_id() {
        Some(signer.chain_id().await?)
    } else {
        None
    };
    sign_batch(signer, scheme, chain_id, claims).await
}

/**
 * Signs bare recipients of a boost with the raw-hash scheme
 *
 * Equivalent to signing `Claim::new(boost_id, recipient)` for each recipient.
 */
pub async fn generate_recipient_signatures<S>(
    signer: &S,
    boost_id: BoostId,
    recipients: &[Address],
) -> Result<Vec<Signature>>
where
    S: GuardSigner + ?Sized,
{
    let claims: Vec<Claim> = recipients
        .iter()
        .map(|recipient| Claim::new(boost_id, *recipient))
        .collect();
    generate_signatures(signer, &DigestScheme::RawHash, &claims).await
}

pub(crate) async fn sign_batch<S>(
    signer: &S,
    scheme: &DigestScheme,
    chain_id: Option<u64>,
    claims: &[Claim],
) -> Result<Vec<Signature>>
where
    S: GuardSigner + ?Sized,
{
    let guard = signer.address();
    let mut signatures = Vec::with_capacity(claims.len());

    for (index, claim) in claims.iter().enumerate() {
        let signed = match claim_digest(claim, scheme, chain_id) {
            Ok(digest) => signer.sign_digest(digest).await,
            Err(e) => Err(e),
        };
        match signed {
            Ok(signature) => {
                debug!(
                    guard = ?guard,
                    boost = %claim.boost_id,
                    recipient = ?claim.recipient,
                    index,
                    "signed claim"
                );
                signatures.push(signature);
            }
            Err(e) => {
                warn!(
                    guard = ?guard,
                    index,
                    batch = claims.len(),
                    error = %e,
                    "aborting signature batch"
                );
                return Err(e);
            }
        }
    }

    info!(
        guard = ?guard,
        signatures = signatures.len(),
        typed = scheme.requires_chain_id(),
        "signature batch complete"
    );
    Ok(signatures)
}
