//! High-level profile operations: transaction construction, fee-payer
//! signing with cached blockhashes, and validated read-side lookups.

use crate::app::blockhash_cache::BlockhashCache;
use crate::app::submitter::TransactionSubmitter;
use crate::domain::account::GeneratedAccount;
use crate::domain::profile::{CreateProfileRequest, ProfileProgramClient, ProfileRecord};
use crate::domain::provider::IdentityProvider;
use crate::domain::validation::{is_valid_username, parse_public_key};
use crate::error::{ProfileToolError, Result};
use crate::infra::solana::rpc::ChainRpc;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

pub struct ProfileServiceConfig {
    pub rpc: Arc<dyn ChainRpc>,
    pub program: Arc<dyn ProfileProgramClient>,
    pub fee_payer: Keypair,
}

pub struct ProfileService {
    program: Arc<dyn ProfileProgramClient>,
    fee_payer: Keypair,
    cache: BlockhashCache,
    submitter: TransactionSubmitter,
}

impl ProfileService {
    pub fn new(config: ProfileServiceConfig) -> Self {
        let cache = BlockhashCache::new(config.rpc.clone());
        let submitter = TransactionSubmitter::new(config.rpc.clone());
        Self {
            program: config.program,
            fee_payer: config.fee_payer,
            cache,
            submitter,
        }
    }

    pub fn fee_payer_pubkey(&self) -> Pubkey {
        self.fee_payer.pubkey()
    }

    /// Builds the unsigned profile-creation transaction for `account`.
    ///
    /// The transaction carries a cached recent blockhash; the authority and
    /// the fee payer sign it afterwards.
    pub async fn create_user_profile(&self, account: &GeneratedAccount) -> Result<Transaction> {
        let authority = parse_public_key(&account.public_key)
            .ok_or_else(|| ProfileToolError::InvalidPublicKey(account.public_key.clone()))?;

        let token = self
            .cache
            .get(CommitmentLevel::Confirmed)
            .await
            .map_err(ProfileToolError::Rpc)?;

        let request = CreateProfileRequest {
            username: account.username.clone(),
            avatar_url: account.avatar_url.clone(),
            fee_payer: self.fee_payer.pubkey(),
            authority,
        };

        self.program
            .create_profile(&request, token.blockhash)
            .await
            .map_err(ProfileToolError::Service)
    }

    /// Signs with the fee payer and submits, waiting for confirmation at
    /// `commitment`.
    pub async fn sign_and_confirm(
        &self,
        mut transaction: Transaction,
        commitment: CommitmentLevel,
    ) -> Result<Signature> {
        println!(" - sign_and_confirm: signing with fee payer");
        let recent_blockhash = transaction.message.recent_blockhash;
        transaction.partial_sign(&[&self.fee_payer], recent_blockhash);

        let token = self
            .cache
            .get(commitment)
            .await
            .map_err(ProfileToolError::Rpc)?;

        self.submitter.submit(&transaction, &token, commitment).await
    }

    /// All profiles, sorted by username.
    pub async fn user_profiles(&self) -> Result<Vec<ProfileRecord>> {
        let mut profiles = self
            .program
            .profiles()
            .await
            .map_err(ProfileToolError::Service)?;
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }

    pub async fn user_profile_by_username(&self, username: &str) -> Result<Option<ProfileRecord>> {
        if !is_valid_username(username) {
            return Err(ProfileToolError::InvalidUsername(username.to_string()));
        }
        self.program
            .profile_by_username(username)
            .await
            .map_err(ProfileToolError::Service)
    }

    pub async fn user_profile_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> Result<Option<ProfileRecord>> {
        provider.validate_id(provider_id)?;
        self.program
            .profile_by_provider(provider, provider_id)
            .await
            .map_err(ProfileToolError::Service)
    }
}
