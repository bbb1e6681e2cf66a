use ethers::types::U256;

/**
 * Claim status of one (boost, recipient) pair
 *
 * Existence means claimed. Duplicate-claim prevention depends only on this
 * record, never on the content of the signature.
 */
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimStatus {
    /// Amount paid to the recipient
    pub claimed_amount: U256,
    /// Timestamp of the claim
    pub claimed_at: u64,
}
