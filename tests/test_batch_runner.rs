//! Batch runner behavior: ordered outcomes, per-item failure isolation, and
//! the expiry deadline on submission.

mod common;

use common::{mismatched_account, service_with, test_account, MockProgram, MockRpc};
use pubkey_profile_tools::{run_batch, run_batch_parallel, ProfileToolError};
use solana_sdk::signature::Signature;
use std::sync::Arc;

#[tokio::test]
async fn three_valid_items_confirm_in_order() {
    let rpc = Arc::new(MockRpc::confirming());
    let service = service_with(rpc.clone(), Arc::new(MockProgram::default()));
    let accounts = vec![test_account(1), test_account(2), test_account(3)];

    let outcomes = run_batch(&service, &accounts).await;

    assert_eq!(outcomes.len(), 3);
    for (outcome, account) in outcomes.iter().zip(&accounts) {
        assert_eq!(outcome.username, account.username);
        match &outcome.outcome {
            pubkey_profile_tools::ItemOutcome::Confirmed(signature) => {
                assert_ne!(*signature, Signature::default());
            }
            other => panic!("expected confirmed outcome, got {other:?}"),
        }
    }

    // The whole batch reuses one cached blockhash.
    assert_eq!(rpc.fetches(), 1);
}

#[tokio::test]
async fn key_mismatch_fails_item_but_batch_continues() {
    let service = service_with(Arc::new(MockRpc::confirming()), Arc::new(MockProgram::default()));
    let accounts = vec![test_account(1), mismatched_account(2), test_account(3)];

    let outcomes = run_batch(&service, &accounts).await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].outcome.is_confirmed());
    assert!(matches!(
        outcomes[1].outcome,
        pubkey_profile_tools::ItemOutcome::Failed(ProfileToolError::KeyMismatch { .. })
    ));
    assert!(outcomes[2].outcome.is_confirmed());
}

#[tokio::test]
async fn build_failure_is_isolated_to_its_item() {
    let first = test_account(1);
    let program = MockProgram {
        fail_build_for: Some(first.username.clone()),
        ..MockProgram::default()
    };
    let service = service_with(Arc::new(MockRpc::confirming()), Arc::new(program));
    let accounts = vec![first, test_account(2)];

    let outcomes = run_batch(&service, &accounts).await;

    assert_eq!(outcomes.len(), 2);
    assert!(matches!(
        outcomes[0].outcome,
        pubkey_profile_tools::ItemOutcome::Failed(ProfileToolError::Service(_))
    ));
    assert!(outcomes[1].outcome.is_confirmed());
}

#[tokio::test]
async fn expired_token_yields_expired_outcome_without_hang() {
    // Cluster height is already past the token deadline and the transaction
    // never confirms; the submission must fail on the first poll.
    let service = service_with(Arc::new(MockRpc::expiring()), Arc::new(MockProgram::default()));
    let accounts = vec![test_account(1)];

    let outcomes = run_batch(&service, &accounts).await;

    assert_eq!(outcomes.len(), 1);
    assert!(matches!(
        outcomes[0].outcome,
        pubkey_profile_tools::ItemOutcome::Failed(ProfileToolError::Expired {
            height: 2000,
            last_valid_block_height: 1000,
        })
    ));
}

#[tokio::test]
async fn parallel_batch_preserves_input_order() {
    let service = service_with(Arc::new(MockRpc::confirming()), Arc::new(MockProgram::default()));
    let accounts = vec![test_account(1), test_account(2), test_account(3)];

    let outcomes = run_batch_parallel(&service, &accounts).await;

    assert_eq!(outcomes.len(), 3);
    for (outcome, account) in outcomes.iter().zip(&accounts) {
        assert_eq!(outcome.username, account.username);
        assert!(outcome.outcome.is_confirmed());
    }
}
