//! Mock collaborators for exercising the cache, submitter and batch runner
//! without a cluster.

#![allow(dead_code)]

use async_trait::async_trait;
use pubkey_profile_tools::domain::account::{self, GeneratedAccount};
use pubkey_profile_tools::{
    ChainRpc, CreateProfileRequest, IdentityProvider, ProfileProgramClient, ProfileRecord,
    ProfileService, ProfileServiceConfig, RecentBlockhash,
};
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::hash::Hash;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::transaction::Transaction;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct MockRpc {
    pub endpoint: String,
    pub blockhash_fetches: AtomicUsize,
    pub fetch_delay: Duration,
    pub fail_blockhash: AtomicBool,
    pub last_valid_block_height: u64,
    pub current_height: u64,
    pub confirm_immediately: bool,
}

impl MockRpc {
    /// Every submitted transaction confirms on the first status poll.
    pub fn confirming() -> Self {
        Self {
            endpoint: "http://localhost:8899".to_string(),
            blockhash_fetches: AtomicUsize::new(0),
            fetch_delay: Duration::ZERO,
            fail_blockhash: AtomicBool::new(false),
            last_valid_block_height: 1000,
            current_height: 10,
            confirm_immediately: true,
        }
    }

    /// Never confirms, and the cluster height is already past the token
    /// deadline.
    pub fn expiring() -> Self {
        Self {
            current_height: 2000,
            confirm_immediately: false,
            ..Self::confirming()
        }
    }

    pub fn fetches(&self) -> usize {
        self.blockhash_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainRpc for MockRpc {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn latest_blockhash(
        &self,
        _commitment: CommitmentLevel,
    ) -> anyhow::Result<RecentBlockhash> {
        self.blockhash_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fetch_delay > Duration::ZERO {
            tokio::time::sleep(self.fetch_delay).await;
        }
        if self.fail_blockhash.load(Ordering::SeqCst) {
            anyhow::bail!("rpc unavailable");
        }
        Ok(RecentBlockhash {
            blockhash: Hash::new_unique(),
            last_valid_block_height: self.last_valid_block_height,
        })
    }

    async fn send_transaction(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        Ok(transaction.signatures.first().copied().unwrap_or_default())
    }

    async fn signature_status(
        &self,
        _signature: &Signature,
        _commitment: CommitmentLevel,
    ) -> anyhow::Result<Option<Result<(), String>>> {
        if self.confirm_immediately {
            Ok(Some(Ok(())))
        } else {
            Ok(None)
        }
    }

    async fn block_height(&self, _commitment: CommitmentLevel) -> anyhow::Result<u64> {
        Ok(self.current_height)
    }

    async fn balance(&self, _pubkey: &Pubkey) -> anyhow::Result<u64> {
        Ok(1_000_000_000)
    }

    async fn account_data(&self, _pubkey: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn program_accounts(
        &self,
        _program_id: &Pubkey,
    ) -> anyhow::Result<Vec<(Pubkey, Vec<u8>)>> {
        Ok(vec![])
    }
}

#[derive(Default)]
pub struct MockProgram {
    /// Username whose transaction construction should fail.
    pub fail_build_for: Option<String>,
    pub stored_profiles: Vec<ProfileRecord>,
}

#[async_trait]
impl ProfileProgramClient for MockProgram {
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
        recent_blockhash: Hash,
    ) -> anyhow::Result<Transaction> {
        if self.fail_build_for.as_deref() == Some(request.username.as_str()) {
            anyhow::bail!("program unavailable");
        }
        let instruction = Instruction {
            program_id: Pubkey::new_unique(),
            accounts: vec![
                AccountMeta::new(request.fee_payer, true),
                AccountMeta::new_readonly(request.authority, true),
            ],
            data: request.username.as_bytes().to_vec(),
        };
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&request.fee_payer));
        transaction.message.recent_blockhash = recent_blockhash;
        Ok(transaction)
    }

    async fn profiles(&self) -> anyhow::Result<Vec<ProfileRecord>> {
        Ok(self.stored_profiles.clone())
    }

    async fn profile_by_username(&self, username: &str) -> anyhow::Result<Option<ProfileRecord>> {
        Ok(self
            .stored_profiles
            .iter()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn profile_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> anyhow::Result<Option<ProfileRecord>> {
        Ok(self
            .stored_profiles
            .iter()
            .find(|p| {
                p.identities
                    .iter()
                    .any(|i| i.provider == provider && i.provider_id == provider_id)
            })
            .cloned())
    }
}

pub fn test_account(index: usize) -> GeneratedAccount {
    account::generate_account(index, 9000)
}

/// An account whose recorded public key does not match its secret key.
pub fn mismatched_account(index: usize) -> GeneratedAccount {
    let mut account = test_account(index);
    account.public_key = Pubkey::new_unique().to_string();
    account
}

pub fn profile_record(username: &str) -> ProfileRecord {
    ProfileRecord {
        public_key: Pubkey::new_unique(),
        username: username.to_string(),
        avatar_url: String::new(),
        authorities: vec![],
        identities: vec![],
    }
}

pub fn service_with(rpc: Arc<MockRpc>, program: Arc<MockProgram>) -> ProfileService {
    ProfileService::new(ProfileServiceConfig {
        rpc,
        program,
        fee_payer: Keypair::new(),
    })
}
