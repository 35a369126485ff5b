//! Sends a signed transaction and polls for confirmation.
//!
//! Submission is optimistic (no preflight simulation); errors surface either
//! as an outright rejection or as an on-chain error observed while polling.
//! The freshness token's `last_valid_block_height` is the only deadline: once
//! the cluster's block height passes it, confirmation can never arrive and
//! the submission fails as expired instead of blocking forever.

use crate::error::{ProfileToolError, Result};
use crate::infra::solana::rpc::{ChainRpc, RecentBlockhash};
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(400);

pub struct TransactionSubmitter {
    rpc: Arc<dyn ChainRpc>,
    poll_interval: Duration,
}

impl TransactionSubmitter {
    pub fn new(rpc: Arc<dyn ChainRpc>) -> Self {
        Self::with_poll_interval(rpc, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(rpc: Arc<dyn ChainRpc>, poll_interval: Duration) -> Self {
        Self { rpc, poll_interval }
    }

    /// Sends `transaction` and waits until the cluster reports it at
    /// `commitment`, or until the token's deadline passes.
    ///
    /// Not idempotent against resubmission of the same signed bytes; the
    /// cluster de-duplicates by signature.
    pub async fn submit(
        &self,
        transaction: &Transaction,
        token: &RecentBlockhash,
        commitment: CommitmentLevel,
    ) -> Result<Signature> {
        let signature = self
            .rpc
            .send_transaction(transaction)
            .await
            .map_err(|e| ProfileToolError::Submission(e.to_string()))?;

        println!(
            "Signature: {}",
            explorer_url(self.rpc.endpoint(), &format!("tx/{signature}"))
        );

        loop {
            match self
                .rpc
                .signature_status(&signature, commitment)
                .await
                .map_err(ProfileToolError::Rpc)?
            {
                Some(Ok(())) => {
                    println!("Confirmed: {signature}");
                    return Ok(signature);
                }
                Some(Err(err)) => return Err(ProfileToolError::Submission(err)),
                None => {}
            }

            let height = self
                .rpc
                .block_height(commitment)
                .await
                .map_err(ProfileToolError::Rpc)?;
            if height > token.last_valid_block_height {
                return Err(ProfileToolError::Expired {
                    height,
                    last_valid_block_height: token.last_valid_block_height,
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Resolvable explorer link for a cluster path, with the cluster query
/// derived from the RPC endpoint.
pub fn explorer_url(endpoint: &str, path: &str) -> String {
    let cluster = if endpoint.contains("devnet") {
        "?cluster=devnet"
    } else if endpoint.contains("localhost") || endpoint.contains("127.0.0.1") {
        "?cluster=custom"
    } else {
        ""
    };
    format!("https://explorer.solana.com/{path}{cluster}")
}
