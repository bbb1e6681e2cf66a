use async_trait::async_trait;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Signature, H256};

use crate::error::{GuardError, Result};

/**
 * Holder of a boost's guard key
 *
 * The two suspension points of a signing batch live here: resolving the
 * chain the signer is connected to, and producing a signature over a digest.
 */
#[async_trait]
pub trait GuardSigner: Send + Sync {
    /// Address recorded as `guard` on the boosts this signer authorizes
    fn address(&self) -> Address;

    /// Chain id of the connected network
    /// - Fails with ChainUnavailable when no network is known
    async fn chain_id(&self) -> Result<u64>;

    /// Signs a prepared 32-byte digest (no further prefixing)
    async fn sign_digest(&self, digest: H256) -> Result<Signature>;
}

/// Guard key held in process
#[derive(Clone, Debug)]
pub struct LocalGuard {
    wallet: LocalWallet,
    network: Option<u64>,
}

impl LocalGuard {
    pub fn new(wallet: LocalWallet) -> Self {
        Self {
            wallet,
            network: None,
        }
    }

    /// Parses a hex private key, with or without the 0x prefix
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let wallet = private_key
            .trim()
            .parse::<LocalWallet>()
            .map_err(|e| GuardError::Config(format!("invalid guard key: {e}")))?;
        Ok(Self::new(wallet))
    }

    /// Attaches the signer to a network
    pub fn connect(mut self, chain_id: u64) -> Self {
        self.network = Some(chain_id);
        self
    }

    pub fn wallet(&self) -> &LocalWallet {
        &self.wallet
    }
}

#[async_trait]
impl GuardSigner for LocalGuard {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    async fn chain_id(&self) -> Result<u64> {
        self.network.ok_or(GuardError::ChainUnavailable)
    }

    async fn sign_digest(&self, digest: H256) -> Result<Signature> {
        self.wallet
            .sign_hash(digest)
            .map_err(|e| GuardError::SignerRejected(e.to_string()))
    }
}
