use ethers::types::{Address, U256};
use tracing::info;

use crate::claim::BoostId;
use crate::contract::error::{require, BoostError, BoostResult};
use crate::contract::event::BoostDeposited;
use crate::contract::LocalBoostContract;

impl LocalBoostContract {
    /**
     * Tops up an existing boost
     *
     * Access Control: Owner only, until the boost expires
     */
    pub(crate) fn handle_deposit(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        amount: U256,
    ) -> BoostResult<()> {
        let now = self.now();
        let boost = self
            .get_boost_ref(boost_id)
            .ok_or(BoostError::BoostDoesNotExist)?
            .clone();

        // ===== VALIDATION PHASE =====

        require!(!amount.is_zero(), BoostError::BoostDepositRequired);
        require!(caller == boost.owner, BoostError::OnlyBoostOwner);
        require!(!boost.is_expired(now), BoostError::BoostExpired);

        let new_balance = boost
            .balance
            .checked_add(amount)
            .ok_or(BoostError::ArithmeticOverflow)?;

        // ===== INTERACTIONS PHASE =====

        let contract = self.address();
        self.token_mut(boost.token)?
            .transfer_from(contract, caller, contract, amount)?;

        // ===== EFFECTS PHASE =====

        if let Some(stored) = self.boosts.get_mut(&boost_id) {
            stored.balance = new_balance;
        }

        info!(boost = %boost_id, amount = %amount, balance = %new_balance, "boost deposited");

        self.emit(BoostDeposited {
            boost_id,
            sender: caller,
            amount,
        });

        Ok(())
    }
}
