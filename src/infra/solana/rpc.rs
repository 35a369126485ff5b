//! The RPC surface these tools consume, behind a trait so tests can run
//! against a mock instead of a cluster.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// A short-lived permission to submit a transaction: the blockhash plus the
/// block height past which the cluster will no longer accept it.
///
/// Cloned (never referenced) into each submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentBlockhash {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Status of a submitted transaction as reported by the cluster:
/// `None` = not yet observed at the requested level, `Some(Ok)` = confirmed,
/// `Some(Err)` = included but failed on-chain.
pub type SignatureStatus = Option<std::result::Result<(), String>>;

#[async_trait]
pub trait ChainRpc: Send + Sync {
    fn endpoint(&self) -> &str;

    async fn latest_blockhash(&self, commitment: CommitmentLevel)
        -> anyhow::Result<RecentBlockhash>;

    /// Sends the raw signed transaction without client-side preflight
    /// simulation. Errors surface at confirmation time or via rejection.
    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature>;

    async fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentLevel,
    ) -> anyhow::Result<SignatureStatus>;

    async fn block_height(&self, commitment: CommitmentLevel) -> anyhow::Result<u64>;

    async fn balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64>;

    /// Raw account data, or None if the account does not exist.
    async fn account_data(&self, pubkey: &Pubkey) -> anyhow::Result<Option<Vec<u8>>>;

    async fn program_accounts(&self, program_id: &Pubkey)
        -> anyhow::Result<Vec<(Pubkey, Vec<u8>)>>;
}

pub struct SolanaRpc {
    client: RpcClient,
    endpoint: String,
}

impl SolanaRpc {
    pub fn new(endpoint: String) -> Self {
        let client = RpcClient::new_with_commitment(endpoint.clone(), CommitmentConfig::confirmed());
        Self { client, endpoint }
    }
}

#[async_trait]
impl ChainRpc for SolanaRpc {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn latest_blockhash(
        &self,
        commitment: CommitmentLevel,
    ) -> anyhow::Result<RecentBlockhash> {
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(CommitmentConfig { commitment })
            .await?;
        Ok(RecentBlockhash {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        let signature = self
            .client
            .send_transaction_with_config(
                transaction,
                RpcSendTransactionConfig {
                    skip_preflight: true,
                    ..RpcSendTransactionConfig::default()
                },
            )
            .await?;
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentLevel,
    ) -> anyhow::Result<SignatureStatus> {
        let status = self
            .client
            .get_signature_status_with_commitment(signature, CommitmentConfig { commitment })
            .await?;
        Ok(status.map(|r| r.map_err(|e| e.to_string())))
    }

    async fn block_height(&self, commitment: CommitmentLevel) -> anyhow::Result<u64> {
        let height = self
            .client
            .get_block_height_with_commitment(CommitmentConfig { commitment })
            .await?;
        Ok(height)
    }

    async fn balance(&self, pubkey: &Pubkey) -> anyhow::Result<u64> {
        Ok(self.client.get_balance(pubkey).await?)
    }

    async fn account_data(&self, pubkey: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, CommitmentConfig::confirmed())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> anyhow::Result<Vec<(Pubkey, Vec<u8>)>> {
        let accounts = self.client.get_program_accounts(program_id).await?;
        Ok(accounts
            .into_iter()
            .map(|(pubkey, account)| (pubkey, account.data))
            .collect())
    }
}
