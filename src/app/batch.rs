//! Drives profile creation for a batch of generated accounts.
//!
//! One item moves through: keypair check -> transaction build -> authority
//! sign -> fee-payer sign + submit -> confirmed. Any failure ends that item
//! only; the runner records the outcome, prints it with the username, and
//! continues. The result list always has one entry per input, in input order.

use crate::app::profile_service::ProfileService;
use crate::domain::account::GeneratedAccount;
use crate::error::ProfileToolError;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::signature::Signature;
use solana_sdk::signer::Signer;

#[derive(Debug)]
pub enum ItemOutcome {
    Confirmed(Signature),
    Failed(ProfileToolError),
}

impl ItemOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ItemOutcome::Confirmed(_))
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub username: String,
    pub outcome: ItemOutcome,
}

/// Processes `accounts` strictly sequentially: item N+1 does not start until
/// item N's outcome is recorded.
pub async fn run_batch(service: &ProfileService, accounts: &[GeneratedAccount]) -> Vec<BatchOutcome> {
    let total = accounts.len();
    let mut outcomes = Vec::with_capacity(total);
    for (index, account) in accounts.iter().enumerate() {
        let outcome = process_account(service, account, index, total).await;
        outcomes.push(BatchOutcome {
            username: account.username.clone(),
            outcome,
        });
    }
    outcomes
}

/// Opt-in concurrent variant: all items are started at once and may complete
/// in any order, but the returned list is still ordered by input index.
pub async fn run_batch_parallel(
    service: &ProfileService,
    accounts: &[GeneratedAccount],
) -> Vec<BatchOutcome> {
    let total = accounts.len();
    let futures = accounts.iter().enumerate().map(|(index, account)| async move {
        let outcome = process_account(service, account, index, total).await;
        BatchOutcome {
            username: account.username.clone(),
            outcome,
        }
    });
    futures_util::future::join_all(futures).await
}

async fn process_account(
    service: &ProfileService,
    account: &GeneratedAccount,
    index: usize,
    total: usize,
) -> ItemOutcome {
    println!("[{}/{}] Username : {}", index + 1, total, account.username);

    let result = process_account_inner(service, account).await;
    match result {
        Ok(signature) => {
            println!("Done!");
            ItemOutcome::Confirmed(signature)
        }
        Err(e) => {
            println!("Error for {}: {}", account.username, e);
            ItemOutcome::Failed(e)
        }
    }
}

async fn process_account_inner(
    service: &ProfileService,
    account: &GeneratedAccount,
) -> crate::error::Result<Signature> {
    let authority = account.signing_keypair()?;

    let mut transaction = service.create_user_profile(account).await?;

    println!("Signing  : {}", authority.pubkey());
    let recent_blockhash = transaction.message.recent_blockhash;
    transaction.partial_sign(&[&authority], recent_blockhash);

    println!("Confirming...");
    service
        .sign_and_confirm(transaction, CommitmentLevel::Confirmed)
        .await
}
