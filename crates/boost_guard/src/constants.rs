/**
 * Guard Constants
 *
 * This module defines the constant values shared by the digest builder, the
 * claim strategies and the local contract model. Typed-data constants must
 * match the verifying contract byte for byte.
 */

/// ===== TYPED DATA CONSTANTS =====

/// Default EIP-712 domain name of the Boost contract
/// - Overridden through `GuardConfig::domain`
pub const DEFAULT_DOMAIN_NAME: &str = "boost";

/// Default EIP-712 domain version of the Boost contract
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// Claim type for claims carrying a signed amount
/// - Field order and type tags are part of the digest
pub const CLAIM_TYPE: &str = "Claim(uint256 boostId,address recipient,uint256 amount)";

/// Claim type for claims whose amount is fixed by the boost
pub const CLAIM_TYPE_WITHOUT_AMOUNT: &str = "Claim(uint256 boostId,address recipient)";

/// Prefix bytes of an EIP-712 digest preimage
pub const EIP712_PREFIX: [u8; 2] = [0x19, 0x01];

/// ===== STRATEGY CONSTANTS =====

/// Amount granted to every recipient by the fixed-unit strategy
/// - One vote, one claim
pub const FIXED_UNIT_AMOUNT: u64 = 1;

/// ===== SIGNATURE CONSTANTS =====

/// Length of an encoded signature (r || s || v)
pub const SIGNATURE_LEN: usize = 65;

/// ===== LOCAL CHAIN CONSTANTS =====

/// Timestamp of the first block of the in-memory contract
pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;
