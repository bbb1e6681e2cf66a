pub mod contract_fixed;
pub mod fixed_unit;

pub use contract_fixed::*;
pub use fixed_unit::*;

use async_trait::async_trait;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::claim::{BoostId, Claim};
use crate::error::Result;

/**
 * Claim strategy
 *
 * Policy turning the recipients of a boost into claim records. Decides who
 * gets what; how the claims get authorized is up to the signature generator.
 *
 * Implementations must return claims in recipient order and must not
 * deduplicate: preventing double claims is the contract's job.
 *
 * `chain_id` is known only when the digest scheme binds one.
 */
#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_claims(
        &self,
        boost_id: BoostId,
        chain_id: Option<u64>,
        recipients: &[Address],
    ) -> Result<Vec<Claim>>;
}

/// Strategy selector used in configuration files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    FixedUnit,
    ContractFixed,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::FixedUnit => Box::new(FixedUnitStrategy),
            StrategyKind::ContractFixed => Box::new(ContractFixedStrategy),
        }
    }
}
