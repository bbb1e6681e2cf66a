use ethers::types::Address;
use tracing::info;

use crate::claim::{BoostId, SignedClaim};
use crate::config::GuardConfig;
use crate::error::{GuardError, Result};
use crate::signature::sign_batch;
use crate::signer::GuardSigner;

/**
 * Guard
 *
 * A guard key plus the configuration of the contract it signs for. Runs the
 * whole authorization flow: strategy -> digest -> signature.
 */
pub struct Guard<S> {
    signer: S,
    config: GuardConfig,
}

impl<S: GuardSigner> Guard<S> {
    pub fn new(signer: S, config: GuardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { signer, config })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /**
     * Authorizes recipients of a boost
     *
     * @param boost_id - Boost the recipients claim from
     * @param verifying_contract - Address of the Boost contract
     * @param recipients - Eligible accounts, in submission order
     *
     * The chain id is resolved once, and only for typed data. Fails as a
     * whole; never returns a partial set.
     */
    pub async fn authorize(
        &self,
        boost_id: BoostId,
        verifying_contract: Address,
        recipients: &[Address],
    ) -> Result<Vec<SignedClaim>> {
        let scheme = self.config.scheme_for(verifying_contract);
        let chain_id = if scheme.requires_chain_id() {
            Some(self.signer.chain_id().await?)
        } else {
            None
        };
        let strategy = self.config.strategy.build();
        let claims = strategy
            .generate_claims(boost_id, chain_id, recipients)
            .await?;
        if claims.len() != recipients.len() {
            return Err(GuardError::Strategy(format!(
                "{} returned {} claims for {} recipients",
                strategy.name(),
                claims.len(),
                recipients.len()
            )));
        }

        let signatures = sign_batch(&self.signer, &scheme, chain_id, &claims).await?;

        info!(
            boost = %boost_id,
            strategy = strategy.name(),
            chain_id = ?chain_id,
            claims = claims.len(),
            "authorized recipients"
        );

        Ok(claims
            .into_iter()
            .zip(signatures)
            .map(|(claim, signature)| SignedClaim { claim, signature })
            .collect())
    }
}
