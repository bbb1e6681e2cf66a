use std::collections::HashMap;

use ethers::types::{Address, U256};

use crate::contract::error::{require, BoostError, BoostResult};

/// ERC-20 ledger with mint-for-self, as used by the test token
#[derive(Clone, Debug, Default)]
pub struct TestToken {
    pub name: String,
    pub symbol: String,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl TestToken {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::zero(), |total, balance| total.saturating_add(*balance))
    }

    pub fn mint(&mut self, account: Address, amount: U256) -> BoostResult<()> {
        let balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(BoostError::ArithmeticOverflow)?;
        self.balances.insert(account, balance);
        Ok(())
    }

    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.insert((owner, spender), amount);
    }

    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> BoostResult<()> {
        let from_balance = self.balance_of(from);
        require!(
            from_balance >= amount,
            BoostError::TransferAmountExceedsBalance
        );
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(BoostError::ArithmeticOverflow)?;
        self.balances.insert(from, from_balance - amount);
        self.balances.insert(to, to_balance);
        Ok(())
    }

    /// Allowance is checked before balance; neither is touched on failure
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> BoostResult<()> {
        let allowance = self.allowance(from, spender);
        require!(allowance >= amount, BoostError::InsufficientAllowance);
        self.transfer(from, to, amount)?;
        self.allowances.insert((from, spender), allowance - amount);
        Ok(())
    }
}
