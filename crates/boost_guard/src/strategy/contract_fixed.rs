use async_trait::async_trait;
use ethers::types::Address;

use crate::claim::{BoostId, Claim};
use crate::error::Result;
use crate::strategy::Strategy;

/// Claims without an amount; the contract pays the amount per account fixed
/// when the boost was created.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContractFixedStrategy;

#[async_trait]
impl Strategy for ContractFixedStrategy {
    fn name(&self) -> &'static str {
        "contract-fixed"
    }

    async fn generate_claims(
        &self,
        boost_id: BoostId,
        _chain_id: Option<u64>,
        recipients: &[Address],
    ) -> Result<Vec<Claim>> {
        Ok(recipients
            .iter()
            .map(|recipient| Claim::new(boost_id, *recipient))
            .collect())
    }
}
