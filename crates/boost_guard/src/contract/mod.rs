pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod token;

pub use error::{BoostError, BoostResult};
pub use event::*;
pub use instructions::*;
pub use state::*;
pub use token::*;

use std::collections::HashMap;

use ethers::types::{Address, U256};
use ethers::utils::get_contract_address;
use tracing::{debug, info};

use crate::claim::BoostId;
use crate::config::GuardConfig;
use crate::constants::GENESIS_TIMESTAMP;
use crate::digest::DigestScheme;

/**
 * Boost contract interface
 *
 * The ABI guard signatures must be compatible with. `caller` is the
 * transaction sender. Every failing call leaves the state untouched.
 */
pub trait BoostProtocol {
    /// Creates a boost and pulls the initial deposit from `caller`
    fn create(&mut self, caller: Address, params: BoostParams) -> BoostResult<BoostId>;

    /// Creates a boost under the next counter id, ignoring `params.id`
    fn create_next(&mut self, caller: Address, params: BoostParams) -> BoostResult<BoostId>;

    /// Tops up a boost from its owner
    fn deposit(&mut self, caller: Address, boost_id: BoostId, amount: U256) -> BoostResult<()>;

    /// Pays one guard-authorized claim; anyone may submit it
    fn claim(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        request: ClaimRequest,
    ) -> BoostResult<U256> {
        self.claim_multi(caller, boost_id, vec![request])
    }

    /// Pays several claims atomically; returns the total paid
    fn claim_multi(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        requests: Vec<ClaimRequest>,
    ) -> BoostResult<U256>;

    /// Sends the remaining balance to `destination` (the owner by default)
    fn withdraw(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        destination: Option<Address>,
    ) -> BoostResult<U256>;

    fn get_boost(&self, boost_id: BoostId) -> Boost;

    /// Token balance of the boost owner
    fn owner_balance(&self, boost_id: BoostId) -> U256;

    /// Token allowance the boost owner granted this contract
    fn owner_allowance(&self, boost_id: BoostId) -> U256;
}

/**
 * In-memory Boost contract
 *
 * Reference model of the deployed contract used to drive guard signatures
 * through the full lifecycle. Keeps its own clock and token ledgers and
 * recomputes every claim digest with its own chain id and address.
 */
#[derive(Debug)]
pub struct LocalBoostContract {
    address: Address,
    chain_id: u64,
    scheme: DigestScheme,
    now: u64,
    deployed_tokens: u64,
    boost_count: u64,
    pub(crate) boosts: HashMap<BoostId, Boost>,
    pub(crate) claims: HashMap<(BoostId, Address), ClaimStatus>,
    pub(crate) tokens: HashMap<Address, TestToken>,
    events: Vec<BoostEvent>,
}

impl LocalBoostContract {
    /// Deploys the contract at `address` on chain `chain_id`, verifying
    /// claims with the scheme `config` describes
    pub fn deploy(chain_id: u64, address: Address, config: &GuardConfig) -> Self {
        let scheme = config.scheme_for(address);
        info!(
            address = ?address,
            chain_id,
            typed = scheme.requires_chain_id(),
            "deployed boost contract"
        );
        Self {
            address,
            chain_id,
            scheme,
            now: GENESIS_TIMESTAMP,
            deployed_tokens: 0,
            boost_count: 0,
            boosts: HashMap::new(),
            claims: HashMap::new(),
            tokens: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn scheme(&self) -> &DigestScheme {
        &self.scheme
    }

    /// Timestamp of the latest block
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn advance_clock(&mut self, seconds: u64) {
        self.now += seconds;
        debug!(now = self.now, "advanced clock");
    }

    /// Deploys a test token and returns its address
    pub fn deploy_token(&mut self, name: &str, symbol: &str) -> Address {
        self.deployed_tokens += 1;
        let address = get_contract_address(self.address, self.deployed_tokens);
        self.tokens.insert(address, TestToken::new(name, symbol));
        address
    }

    pub fn token(&self, token: Address) -> BoostResult<&TestToken> {
        self.tokens.get(&token).ok_or(BoostError::TokenDoesNotExist)
    }

    pub(crate) fn token_mut(&mut self, token: Address) -> BoostResult<&mut TestToken> {
        self.tokens
            .get_mut(&token)
            .ok_or(BoostError::TokenDoesNotExist)
    }

    pub fn mint(&mut self, token: Address, account: Address, amount: U256) -> BoostResult<()> {
        self.token_mut(token)?.mint(account, amount)
    }

    /// Lets this contract pull `amount` of `token` from `owner`
    pub fn approve(&mut self, token: Address, owner: Address, amount: U256) -> BoostResult<()> {
        let spender = self.address;
        self.token_mut(token)?.approve(owner, spender, amount);
        Ok(())
    }

    pub fn balance_of(&self, token: Address, account: Address) -> U256 {
        self.tokens
            .get(&token)
            .map(|t| t.balance_of(account))
            .unwrap_or_default()
    }

    pub fn allowance(&self, token: Address, owner: Address) -> U256 {
        self.tokens
            .get(&token)
            .map(|t| t.allowance(owner, self.address))
            .unwrap_or_default()
    }

    pub(crate) fn get_boost_ref(&self, boost_id: BoostId) -> Option<&Boost> {
        self.boosts.get(&boost_id)
    }

    pub fn claim_status(&self, boost_id: BoostId, recipient: Address) -> Option<ClaimStatus> {
        self.claims.get(&(boost_id, recipient)).copied()
    }

    pub fn events(&self) -> &[BoostEvent] {
        &self.events
    }

    pub(crate) fn emit(&mut self, event: impl Into<BoostEvent>) {
        let event = event.into();
        debug!(?event, "boost event");
        self.events.push(event);
    }
}

impl BoostProtocol for LocalBoostContract {
    fn create(&mut self, caller: Address, params: BoostParams) -> BoostResult<BoostId> {
        self.handle_create(caller, params)
    }

    fn create_next(&mut self, caller: Address, params: BoostParams) -> BoostResult<BoostId> {
        self.handle_create_next(caller, params)
    }

    fn deposit(&mut self, caller: Address, boost_id: BoostId, amount: U256) -> BoostResult<()> {
        self.handle_deposit(caller, boost_id, amount)
    }

    fn claim_multi(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        requests: Vec<ClaimRequest>,
    ) -> BoostResult<U256> {
        self.handle_claim(caller, boost_id, requests)
    }

    fn withdraw(
        &mut self,
        caller: Address,
        boost_id: BoostId,
        destination: Option<Address>,
    ) -> BoostResult<U256> {
        self.handle_withdraw(caller, boost_id, destination)
    }

    fn get_boost(&self, boost_id: BoostId) -> Boost {
        self.boosts.get(&boost_id).cloned().unwrap_or_default()
    }

    fn owner_balance(&self, boost_id: BoostId) -> U256 {
        let boost = self.get_boost(boost_id);
        self.balance_of(boost.token, boost.owner)
    }

    fn owner_allowance(&self, boost_id: BoostId) -> U256 {
        let boost = self.get_boost(boost_id);
        self.allowance(boost.token, boost.owner)
    }
}
