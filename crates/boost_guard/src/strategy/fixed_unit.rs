use async_trait::async_trait;
use ethers::types::{Address, U256};

use crate::claim::{BoostId, Claim};
use crate::constants::FIXED_UNIT_AMOUNT;
use crate::error::Result;
use crate::strategy::Strategy;

/// Every recipient is entitled to exactly one unit (one vote, one claim)
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedUnitStrategy;

#[async_trait]
impl Strategy for FixedUnitStrategy {
    fn name(&self) -> &'static str {
        "fixed-unit"
    }

    async fn generate_claims(
        &self,
        boost_id: BoostId,
        _chain_id: Option<u64>,
        recipients: &[Address],
    ) -> Result<Vec<Claim>> {
        Ok(recipients
            .iter()
            .map(|recipient| {
                Claim::with_amount(boost_id, *recipient, U256::from(FIXED_UNIT_AMOUNT))
            })
            .collect())
    }
}
