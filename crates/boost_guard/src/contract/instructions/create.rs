use ethers::types::{Address, H256, U256};
use tracing::info;

use crate::claim::BoostId;
use crate::contract::error::{require, BoostError, BoostResult};
use crate::contract::event::{BoostCreated, BoostDeposited};
use crate::contract::state::Boost;
use crate::contract::LocalBoostContract;

/**
 * Parameters for creating a boost
 *
 * The caller becomes the owner and must have approved the contract for at
 * least `deposit` tokens.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoostParams {
    /// Identifier of the new boost; must be unused
    /// - Overwritten with the next counter id by `create_next`
    pub id: BoostId,
    /// External reference, e.g. the proposal the boost rewards
    pub reference: H256,
    /// Token to distribute
    pub token: Address,
    /// Initial deposit pulled from the caller
    pub deposit: U256,
    /// Account whose signatures authorize claims
    pub guard: Address,
    /// Payout of claims that carry no amount
    /// - When set: nonzero and at most `deposit`
    pub amount_per_account: Option<U256>,
    /// First timestamp claims are accepted; defaults to the current block
    pub start: Option<u64>,
    /// Expiry timestamp; must be strictly in the future
    pub expires: u64,
}

impl LocalBoostContract {
    /**
     * Creates a new boost
     *
     * Validation order: deposit, expiry, amount per account, unused id,
     * then the token pull (allowance before balance).
     */
    pub(crate) fn handle_create(
        &mut self,
        caller: Address,
        params: BoostParams,
    ) -> BoostResult<BoostId> {
        let now = self.now();

        // ===== VALIDATION PHASE =====

        require!(!params.deposit.is_zero(), BoostError::BoostDepositRequired);
        require!(params.expires > now, BoostError::BoostExpireTooLow);

        let start = params.start.unwrap_or(now);
        require!(start < params.expires, BoostError::BoostExpireTooLow);

        if let Some(amount_per_account) = params.amount_per_account {
            require!(
                !amount_per_account.is_zero(),
                BoostError::BoostAmountPerAccountRequired
            );
            require!(
                amount_per_account <= params.deposit,
                BoostError::BoostAmountPerAccountTooHigh
            );
        }

        require!(
            !self.boosts.contains_key(&params.id),
            BoostError::BoostAlreadyExists
        );

        // ===== INTERACTIONS PHASE =====

        let contract = self.address();
        self.token_mut(params.token)?
            .transfer_from(contract, caller, contract, params.deposit)?;

        // ===== EFFECTS PHASE =====

        let boost = Boost {
            id: params.id,
            reference: params.reference,
            token: params.token,
            balance: params.deposit,
            amount_per_account: params.amount_per_account,
            guard: params.guard,
            start,
            expires: params.expires,
            owner: caller,
        };
        self.boosts.insert(params.id, boost);

        info!(
            boost = %params.id,
            owner = ?caller,
            guard = ?params.guard,
            deposit = %params.deposit,
            expires = params.expires,
            "boost created"
        );

        self.emit(BoostCreated {
            boost_id: params.id,
            owner: caller,
            guard: params.guard,
            token: params.token,
            deposit: params.deposit,
            expires: params.expires,
        });
        self.emit(BoostDeposited {
            boost_id: params.id,
            sender: caller,
            amount: params.deposit,
        });

        Ok(params.id)
    }

    /**
     * Creates a boost under the next counter id
     *
     * Counter ids start at 1 and skip ids already taken by an explicit
     * create. A failed create does not advance the counter.
     */
    pub(crate) fn handle_create_next(
        &mut self,
        caller: Address,
        mut params: BoostParams,
    ) -> BoostResult<BoostId> {
        let mut next = self
            .boost_count
            .checked_add(1)
            .ok_or(BoostError::ArithmeticOverflow)?;
        while self.boosts.contains_key(&BoostId::from(next)) {
            next = next.checked_add(1).ok_or(BoostError::ArithmeticOverflow)?;
        }

        params.id = BoostId::from(next);
        let id = self.handle_create(caller, params)?;
        self.boost_count = next;
        Ok(id)
    }
}
