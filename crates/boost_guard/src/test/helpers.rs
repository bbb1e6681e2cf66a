use ethers::types::{Address, H256, U256};
use tracing_subscriber::EnvFilter;

use crate::claim::{BoostId, Claim, SignedClaim};
use crate::config::GuardConfig;
use crate::contract::{BoostParams, BoostProtocol, ClaimRequest, LocalBoostContract};
use crate::digest::DigestScheme;
use crate::signature::generate_signatures;
use crate::signer::{GuardSigner, LocalGuard};

/// Chain id of the local development network
pub const CHAIN_ID: u64 = 31337;

/// Deterministic development accounts
pub const KEYS: [&str; 9] = [
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
    "0x7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
    "0x47e179ec197488593b187f80a00eb0da91f1b9d0b13f8733639f19c30a34926a",
    "0x8b3a350cf5c34c9194ca85829a2df0ec3153be0318b5e2d3348e872092edffba",
    "0x92db14e403b83dfe3df233f83dfa3a0d7096f21ca9b0d6d6b8d88b2b4ec1564e",
    "0x4bbbf85ce3377467afe5d46f804f221813b2bb87f24d81f60f1fcdbf7cbf4356",
    "0xdbda1821b80551c9d65939329250298aa3472ba22feea921c0cf5d620ea67b97",
];

pub const OWNER: usize = 0;
pub const GUARD: usize = 1;

/// Accounts used as recipients
pub const RECIPIENTS: [usize; 4] = [2, 3, 4, 5];

/// Lifetime of boosts created by the fixtures
pub const BOOST_DURATION: u64 = 60;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Signer for development account `index`, connected to the local chain
pub fn signer(index: usize) -> LocalGuard {
    LocalGuard::from_private_key(KEYS[index])
        .unwrap()
        .connect(CHAIN_ID)
}

pub fn account(index: usize) -> Address {
    signer(index).address()
}

pub fn recipients() -> Vec<Address> {
    RECIPIENTS.iter().map(|index| account(*index)).collect()
}

pub fn boost_address() -> Address {
    "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        .parse()
        .unwrap()
}

pub fn amount(value: u64) -> U256 {
    U256::from(value)
}

/// A deployed Boost contract with one token and a funded owner
pub struct Fixture {
    pub contract: LocalBoostContract,
    pub token: Address,
    pub owner: Address,
    pub guard: LocalGuard,
}

impl Fixture {
    pub fn deploy() -> Self {
        Self::deploy_with(&GuardConfig::default())
    }

    pub fn deploy_with(config: &GuardConfig) -> Self {
        Self::deploy_on(CHAIN_ID, config)
    }

    pub fn deploy_on(chain_id: u64, config: &GuardConfig) -> Self {
        init_tracing();
        let mut contract = LocalBoostContract::deploy(chain_id, boost_address(), config);
        let token = contract.deploy_token("Test Token", "TEST");
        Self {
            contract,
            token,
            owner: account(OWNER),
            guard: signer(GUARD),
        }
    }

    /// Mints `value` tokens to `holder` and approves the contract for them
    pub fn fund(&mut self, holder: Address, value: u64) {
        self.contract.mint(self.token, holder, amount(value)).unwrap();
        self.contract
            .approve(self.token, holder, amount(value))
            .unwrap();
    }

    /// Creation parameters for a boost guarded by the fixture's guard
    pub fn params(&self, id: BoostId, deposit: u64, amount_per_account: Option<u64>) -> BoostParams {
        BoostParams {
            id,
            reference: H256::zero(),
            token: self.token,
            deposit: amount(deposit),
            guard: self.guard.address(),
            amount_per_account: amount_per_account.map(amount),
            start: None,
            expires: self.contract.now() + BOOST_DURATION,
        }
    }

    /// Funds the owner and creates a boost in one go
    pub fn create_boost(&mut self, label: &str, deposit: u64, amount_per_account: Option<u64>) -> BoostId {
        self.fund(self.owner, deposit);
        let params = self.params(BoostId::from_label(label), deposit, amount_per_account);
        self.contract.create(self.owner, params).unwrap()
    }

    pub fn guard_address(&self) -> Address {
        self.guard.address()
    }

    pub fn scheme(&self) -> DigestScheme {
        self.contract.scheme().clone()
    }

    /// Signs `claims` with the fixture's guard
    pub async fn sign(&self, claims: &[Claim]) -> Vec<ClaimRequest> {
        sign_with(&self.guard, &self.scheme(), claims).await
    }

    pub fn balance(&self, holder: Address) -> U256 {
        self.contract.balance_of(self.token, holder)
    }
}

/// Signs `claims` with `signer` and pairs each claim with its signature
pub async fn sign_with(
    signer: &LocalGuard,
    scheme: &DigestScheme,
    claims: &[Claim],
) -> Vec<ClaimRequest> {
    let signatures = generate_signatures(signer, scheme, claims).await.unwrap();
    claims
        .iter()
        .cloned()
        .zip(signatures)
        .map(|(claim, signature)| ClaimRequest::from(SignedClaim { claim, signature }))
        .collect()
}

/// Claims without a signed amount, paid at the boost's amount per account
pub fn fixed_claims(boost_id: BoostId, recipients: &[Address]) -> Vec<Claim> {
    recipients
        .iter()
        .map(|recipient| Claim::new(boost_id, *recipient))
        .collect()
}
