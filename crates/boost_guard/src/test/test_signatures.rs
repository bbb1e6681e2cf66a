use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ethers::types::{Address, Signature, H256};

use crate::claim::{BoostId, Claim};
use crate::config::{GuardConfig, SchemeKind};
use crate::contract::{BoostError, BoostProtocol, ClaimRequest, LocalBoostContract};
use crate::digest::{claim_digest, recover_guard, DigestScheme};
use crate::error::{GuardError, Result};
use crate::guard::Guard;
use crate::signature::{generate_recipient_signatures, generate_signatures};
use crate::signer::{GuardSigner, LocalGuard};
use crate::strategy::StrategyKind;
use crate::test::helpers::*;

/// Signer that refuses the `reject_at`-th signature request
struct RejectingSigner {
    inner: LocalGuard,
    reject_at: usize,
    calls: AtomicUsize,
}

impl RejectingSigner {
    fn new(reject_at: usize) -> Self {
        Self {
            inner: signer(GUARD),
            reject_at,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GuardSigner for RejectingSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn chain_id(&self) -> Result<u64> {
        self.inner.chain_id().await
    }

    async fn sign_digest(&self, digest: H256) -> Result<Signature> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.reject_at {
            return Err(GuardError::SignerRejected("user denied signature".to_string()));
        }
        self.inner.sign_digest(digest).await
    }
}

fn raw_hash_config() -> GuardConfig {
    GuardConfig {
        scheme: SchemeKind::RawHash,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signatures_are_deterministic() {
        let fixture = Fixture::deploy();
        let claims = fixed_claims(BoostId::from_label("0x1"), &recipients());

        let first = generate_signatures(&fixture.guard, &fixture.scheme(), &claims)
            .await
            .unwrap();
        let second = generate_signatures(&fixture.guard, &fixture.scheme(), &claims)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_signatures_follow_claim_order() {
        let fixture = Fixture::deploy();
        let scheme = fixture.scheme();
        let claims: Vec<Claim> = recipients()
            .into_iter()
            .enumerate()
            .map(|(i, recipient)| Claim::with_amount(BoostId::from_label("0x1"), recipient, i as u64 + 1))
            .collect();

        let signatures = generate_signatures(&fixture.guard, &scheme, &claims)
            .await
            .unwrap();

        assert_eq!(signatures.len(), claims.len());
        for (claim, signature) in claims.iter().zip(&signatures) {
            let digest = claim_digest(claim, &scheme, Some(CHAIN_ID)).unwrap();
            assert_eq!(
                recover_guard(digest, &signature.to_vec()),
                Some(fixture.guard.address())
            );
        }
    }

    #[tokio::test]
    async fn test_signatures_scoped_to_boost_and_recipient() {
        let fixture = Fixture::deploy();
        let recipient = account(RECIPIENTS[0]);
        let claims = vec![
            Claim::new(BoostId::from_label("0x1"), recipient),
            Claim::new(BoostId::from_label("0x2"), recipient),
            Claim::new(BoostId::from_label("0x1"), account(RECIPIENTS[1])),
        ];

        let signatures = generate_signatures(&fixture.guard, &fixture.scheme(), &claims)
            .await
            .unwrap();

        assert_ne!(signatures[0], signatures[1]);
        assert_ne!(signatures[0], signatures[2]);
        let other_digest = claim_digest(&claims[1], &fixture.scheme(), Some(CHAIN_ID)).unwrap();
        assert_ne!(
            recover_guard(other_digest, &signatures[0].to_vec()),
            Some(fixture.guard.address())
        );
    }

    #[tokio::test]
    async fn test_typed_signature_bound_to_chain() {
        let mut fixture = Fixture::deploy_on(4, &GuardConfig::default());
        let id = fixture.create_boost("0x1", 100, Some(10));
        let claims = fixed_claims(id, &recipients()[..1]);

        let wrong_chain = LocalGuard::from_private_key(KEYS[GUARD]).unwrap().connect(1);
        let request = sign_with(&wrong_chain, &fixture.scheme(), &claims)
            .await
            .remove(0);
        assert_eq!(
            fixture.contract.claim(fixture.owner, id, request),
            Err(BoostError::InvalidSignature)
        );

        let right_chain = LocalGuard::from_private_key(KEYS[GUARD]).unwrap().connect(4);
        let request = sign_with(&right_chain, &fixture.scheme(), &claims)
            .await
            .remove(0);
        assert_eq!(
            fixture.contract.claim(fixture.owner, id, request),
            Ok(amount(10))
        );
    }

    #[tokio::test]
    async fn test_typed_signature_bound_to_contract() {
        let mut fixture = Fixture::deploy();
        let id = fixture.create_boost("0x1", 100, Some(10));
        let claims = fixed_claims(id, &recipients()[..1]);
        let elsewhere = GuardConfig::default().scheme_for(account(8));

        let request = sign_with(&fixture.guard, &elsewhere, &claims)
            .await
            .remove(0);

        assert_eq!(
            fixture.contract.claim(fixture.owner, id, request),
            Err(BoostError::InvalidSignature)
        );
    }

    #[tokio::test]
    async fn test_raw_hash_signature_replays_across_deployments() {
        let mut first = Fixture::deploy_with(&raw_hash_config());
        let id = first.create_boost("0x1", 100, Some(10));
        let recipient = account(RECIPIENTS[0]);
        let signatures = generate_recipient_signatures(&first.guard, id, &[recipient])
            .await
            .unwrap();
        let request = ClaimRequest::new(recipient, None, signatures[0].to_vec());

        first.contract.claim(recipient, id, request.clone()).unwrap();
        assert_eq!(
            first.contract.claim(recipient, id, request.clone()),
            Err(BoostError::RecipientAlreadyClaimed)
        );

        let mut second = Fixture::deploy_on(4, &raw_hash_config());
        second.create_boost("0x1", 100, Some(10));
        assert_eq!(second.contract.claim(recipient, id, request), Ok(amount(10)));
    }

    #[tokio::test]
    async fn test_rejected_signature_aborts_batch() {
        let signer = RejectingSigner::new(2);
        let claims = fixed_claims(BoostId::from_label("0x1"), &recipients());
        let scheme = GuardConfig::default().scheme_for(boost_address());

        let result = generate_signatures(&signer, &scheme, &claims).await;

        assert!(matches!(result, Err(GuardError::SignerRejected(_))));
        assert_eq!(signer.calls.load(Ordering::SeqCst), 3);

        let guard = Guard::new(RejectingSigner::new(0), GuardConfig::default()).unwrap();
        assert!(matches!(
            guard
                .authorize(BoostId::from_label("0x1"), boost_address(), &recipients())
                .await,
            Err(GuardError::SignerRejected(_))
        ));
    }

    #[tokio::test]
    async fn test_chain_required_for_typed_data() {
        init_tracing();
        let unconnected = LocalGuard::from_private_key(KEYS[GUARD]).unwrap();
        let id = BoostId::from_label("0x1");
        let claims = fixed_claims(id, &recipients());
        let scheme = GuardConfig::default().scheme_for(boost_address());

        assert_eq!(
            generate_signatures(&unconnected, &scheme, &claims).await,
            Err(GuardError::ChainUnavailable)
        );
        assert_eq!(
            generate_signatures(&unconnected, &DigestScheme::RawHash, &claims)
                .await
                .map(|signatures| signatures.len()),
            Ok(4)
        );

        let typed = Guard::new(unconnected.clone(), GuardConfig::default()).unwrap();
        assert_eq!(
            typed.authorize(id, boost_address(), &recipients()).await,
            Err(GuardError::ChainUnavailable)
        );

        let raw = Guard::new(unconnected, raw_hash_config()).unwrap();
        let signed = raw
            .authorize(id, boost_address(), &recipients())
            .await
            .unwrap();
        assert_eq!(signed.len(), 4);
        for s in &signed {
            assert_eq!(s.claim.amount, Some(amount(1)));
            let digest = claim_digest(&s.claim, &DigestScheme::RawHash, None).unwrap();
            assert_eq!(
                recover_guard(digest, &s.signature.to_vec()),
                Some(raw.address())
            );
        }
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let fixture = Fixture::deploy();

        let signatures = generate_signatures(&fixture.guard, &fixture.scheme(), &[])
            .await
            .unwrap();

        assert!(signatures.is_empty());
    }

    #[tokio::test]
    async fn test_guard_authorizes_contract_fixed_claims() {
        let config = GuardConfig {
            strategy: StrategyKind::ContractFixed,
            ..Default::default()
        };
        let mut fixture = Fixture::deploy_with(&config);
        let id = fixture.create_boost("0x1", 100, Some(10));
        let guard = Guard::new(signer(GUARD), config).unwrap();

        let signed = guard
            .authorize(id, boost_address(), &recipients())
            .await
            .unwrap();

        assert!(signed.iter().all(|s| s.claim.amount.is_none()));
        let requests = signed.iter().map(ClaimRequest::from).collect();
        assert_eq!(
            fixture.contract.claim_multi(fixture.owner, id, requests),
            Ok(amount(40))
        );
        assert_eq!(fixture.contract.get_boost(id).balance, amount(60));
    }

    #[tokio::test]
    async fn test_guard_authorizes_raw_hash_claims() {
        let config = GuardConfig {
            scheme: SchemeKind::RawHash,
            strategy: StrategyKind::ContractFixed,
            ..Default::default()
        };
        let mut fixture = Fixture::deploy_with(&config);
        let id = fixture.create_boost("0x1", 100, Some(10));
        let guard = Guard::new(signer(GUARD), config).unwrap();

        let signed = guard
            .authorize(id, boost_address(), &recipients()[..2])
            .await
            .unwrap();
        let recipient_signatures =
            generate_recipient_signatures(guard.signer(), id, &recipients()[..2])
                .await
                .unwrap();

        let facade: Vec<Signature> = signed.iter().map(|s| s.signature).collect();
        assert_eq!(facade, recipient_signatures);
        for s in &signed {
            fixture
                .contract
                .claim(s.claim.recipient, id, ClaimRequest::from(s))
                .unwrap();
        }
        assert_eq!(fixture.contract.get_boost(id).balance, amount(80));
    }

    #[test]
    fn test_contract_recomputes_with_own_domain() {
        let contract = LocalBoostContract::deploy(CHAIN_ID, boost_address(), &GuardConfig::default());

        assert_eq!(
            contract.scheme(),
            &GuardConfig::default().scheme_for(boost_address())
        );
        assert!(contract.scheme().requires_chain_id());
    }
}
