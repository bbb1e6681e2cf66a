use ethers::types::{Address, U256};
use tracing::info;

use crate::claim::BoostId;
use crate::contract::error::{require, BoostError, BoostResult};
use crate::contract::event::BoostWithdrawn;
use crate::contract::LocalBoostContract;

impl LocalBoostContract {
    /**
     * Withdraws the remaining balance of an expired boost
     *
     * Access Control: Owner only
     *
     * Business Logic:
     * - Only after expiry, so no authorized claim can be starved
     * - Empties the boost; a second withdrawal fails on the zero balance
     * - Tokens go to `destination`, or to the owner when none is given
     */
    pub(crate) fn handle_withdraw(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        destination: Option<Address>,
    ) -> BoostResult<U256> {
        let now = self.now();
        let boost = self
            .get_boost_ref(boost_id)
            .ok_or(BoostError::BoostDoesNotExist)?
            .clone();

        // ===== VALIDATION PHASE =====

        require!(caller == boost.owner, BoostError::OnlyBoostOwner);
        require!(boost.is_expired(now), BoostError::BoostNotExpired);
        require!(
            !boost.balance.is_zero(),
            BoostError::InsufficientBoostBalance
        );

        // ===== INTERACTIONS PHASE =====

        let destination = destination.unwrap_or(boost.owner);
        let contract = self.address();
        self.token_mut(boost.token)?
            .transfer(contract, destination, boost.balance)?;

        // ===== EFFECTS PHASE =====

        if let Some(stored) = self.boosts.get_mut(&boost_id) {
            stored.balance = U256::zero();
        }

        info!(
            boost = %boost_id,
            destination = ?destination,
            amount = %boost.balance,
            "boost withdrawn"
        );

        self.emit(BoostWithdrawn {
            boost_id,
            owner: boost.owner,
            destination,
            amount: boost.balance,
        });

        Ok(boost.balance)
    }
}
