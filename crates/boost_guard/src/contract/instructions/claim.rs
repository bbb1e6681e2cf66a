use std::collections::HashSet;

use ethers::types::{Address, Bytes, U256};
use tracing::{info, warn};

use crate::claim::{BoostId, Claim, SignedClaim};
use crate::constants::SIGNATURE_LEN;
use crate::contract::error::{require, BoostError, BoostResult};
use crate::contract::event::TokensClaimed;
use crate::contract::state::ClaimStatus;
use crate::contract::LocalBoostContract;
use crate::digest::{claim_digest, recover_guard};

/// One claim as submitted to the contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    /// Account receiving the tokens
    pub recipient: Address,
    /// Signed amount; `None` pays the boost's amount per account
    pub amount: Option<U256>,
    /// Guard signature, r || s || v
    pub signature: Bytes,
}

impl ClaimRequest {
    pub fn new(recipient: Address, amount: Option<U256>, signature: impl Into<Bytes>) -> Self {
        Self {
            recipient,
            amount,
            signature: signature.into(),
        }
    }
}

impl From<&SignedClaim> for ClaimRequest {
    fn from(signed: &SignedClaim) -> Self {
        Self::new(
            signed.claim.recipient,
            signed.claim.amount,
            signed.signature_bytes(),
        )
    }
}

impl From<SignedClaim> for ClaimRequest {
    fn from(signed: SignedClaim) -> Self {
        Self::from(&signed)
    }
}

impl LocalBoostContract {
    /**
     * Pays guard-authorized claims
     *
     * @param caller - Submitter; anyone may submit on behalf of recipients
     * @param boost_id - Boost to pay from
     * @param requests - Claims with their guard signatures
     *
     * Validation Process (per request, first failure reverts the batch):
     * 1. Boost exists, has started and has not expired
     * 2. Payout resolves to a nonzero amount
     * 3. Digest recomputed here recovers to the boost's guard
     * 4. Recipient has not claimed yet
     * 5. Payout fits the remaining balance
     */
    pub(crate) fn handle_claim(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        requests: Vec<ClaimRequest>,
    ) -> BoostResult<U256> {
        let now = self.now();
        let boost = self
            .get_boost_ref(boost_id)
            .ok_or(BoostError::BoostDoesNotExist)?
            .clone();

        // ===== VALIDATION PHASE =====

        require!(!requests.is_empty(), BoostError::EmptyClaim);
        require!(boost.has_started(now), BoostError::BoostNotStarted);
        require!(!boost.is_expired(now), BoostError::BoostExpired);

        let mut remaining = boost.balance;
        let mut recipients = HashSet::with_capacity(requests.len());
        let mut payouts = Vec::with_capacity(requests.len());

        for request in &requests {
            let payout = request
                .amount
                .or(boost.amount_per_account)
                .filter(|amount| !amount.is_zero())
                .ok_or(BoostError::ClaimAmountRequired)?;

            // ===== SIGNATURE VERIFICATION =====

            let claim = Claim {
                boost_id,
                recipient: request.recipient,
                amount: request.amount,
            };
            require!(
                request.signature.len() == SIGNATURE_LEN,
                BoostError::InvalidSignature
            );
            // ecrecover only takes v = 27 or 28
            require!(
                matches!(request.signature[SIGNATURE_LEN - 1], 27 | 28),
                BoostError::InvalidSignature
            );
            let digest = claim_digest(&claim, self.scheme(), Some(self.chain_id()))
                .map_err(|_| BoostError::InvalidSignature)?;
            let signer = recover_guard(digest, &request.signature);
            if signer != Some(boost.guard) {
                warn!(
                    boost = %boost_id,
                    recipient = ?request.recipient,
                    recovered = ?signer,
                    "claim signature rejected"
                );
                return Err(BoostError::InvalidSignature);
            }

            require!(
                !self.claims.contains_key(&(boost_id, request.recipient))
                    && recipients.insert(request.recipient),
                BoostError::RecipientAlreadyClaimed
            );

            remaining = remaining
                .checked_sub(payout)
                .ok_or(BoostError::InsufficientBoostBalance)?;
            payouts.push((request.recipient, payout, remaining));
        }

        // ===== EFFECTS PHASE =====

        if let Some(stored) = self.boosts.get_mut(&boost_id) {
            stored.balance = remaining;
        }
        for (recipient, payout, _) in &payouts {
            self.claims.insert(
                (boost_id, *recipient),
                ClaimStatus {
                    claimed_amount: *payout,
                    claimed_at: now,
                },
            );
        }

        // ===== INTERACTIONS PHASE =====

        let contract = self.address();
        let mut total = U256::zero();
        for (recipient, payout, remaining_after) in payouts {
            self.token_mut(boost.token)?
                .transfer(contract, recipient, payout)?;
            total += payout;
            self.emit(TokensClaimed {
                boost_id,
                recipient,
                amount: payout,
                remaining: remaining_after,
            });
        }

        info!(
            boost = %boost_id,
            submitter = ?caller,
            claims = requests.len(),
            total = %total,
            remaining = %remaining,
            "claims paid"
        );

        Ok(total)
    }
}
