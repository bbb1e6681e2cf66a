use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    // Signing context errors
    #[error("Chain id could not be resolved from the signer")]
    ChainUnavailable,
    #[error("Signer rejected the request: {0}")]
    SignerRejected(String),

    // Payload errors
    #[error("Failed to encode claim payload: {0}")]
    Encoding(String),

    // Setup errors
    #[error("Invalid guard configuration: {0}")]
    Config(String),
    #[error("Strategy failed to generate claims: {0}")]
    Strategy(String),
}

pub type Result<T> = std::result::Result<T, GuardError>;
