use thiserror::Error;

/// Errors reported by the Boost contract. Guards never recover from these;
/// they are surfaced to the caller as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoostError {
    // Lookup errors
    #[error("Boost does not exist")]
    BoostDoesNotExist,
    #[error("Boost already exists")]
    BoostAlreadyExists,

    // Access control errors
    #[error("Only the boost owner can perform this action")]
    OnlyBoostOwner,

    // Time validation errors
    #[error("Boost expiry must be in the future")]
    BoostExpireTooLow,
    #[error("Boost has not started")]
    BoostNotStarted,
    #[error("Boost has expired")]
    BoostExpired,
    #[error("Boost has not expired yet")]
    BoostNotExpired,

    // Amount validation errors
    #[error("Deposit amount is required")]
    BoostDepositRequired,
    #[error("Amount per account is required")]
    BoostAmountPerAccountRequired,
    #[error("Amount per account exceeds deposit")]
    BoostAmountPerAccountTooHigh,
    #[error("Claim amount is required")]
    ClaimAmountRequired,
    #[error("Insufficient boost balance")]
    InsufficientBoostBalance,

    // Claim errors
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Recipient already claimed")]
    RecipientAlreadyClaimed,
    #[error("No claims submitted")]
    EmptyClaim,

    // Token errors
    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,
    #[error("ERC20: transfer amount exceeds balance")]
    TransferAmountExceedsBalance,
    #[error("Token does not exist")]
    TokenDoesNotExist,

    // System level errors
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

pub type BoostResult<T> = std::result::Result<T, BoostError>;

/// Returns `$err` unless `$cond` holds
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use require;
