//! Profile records and the contract of the external profile program.

use crate::domain::provider::IdentityProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// One identity linked to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileIdentity {
    pub provider: IdentityProvider,
    pub provider_id: String,
}

/// An on-chain user profile as read back from the cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub public_key: Pubkey,
    pub username: String,
    pub avatar_url: String,
    pub authorities: Vec<Pubkey>,
    pub identities: Vec<ProfileIdentity>,
}

/// Inputs for building an unsigned profile-creation transaction.
#[derive(Debug, Clone)]
pub struct CreateProfileRequest {
    pub username: String,
    pub avatar_url: String,
    pub fee_payer: Pubkey,
    pub authority: Pubkey,
}

/// Contract of the external profile program, as consumed by these tools.
///
/// The program's validation rules and account schema live on-chain; this
/// trait only covers transaction construction and read-side lookups, so
/// tests can substitute a mock without a cluster.
#[async_trait]
pub trait ProfileProgramClient: Send + Sync {
    /// Builds the unsigned profile-creation transaction. The returned
    /// transaction carries `recent_blockhash` and expects signatures from
    /// both the fee payer and the authority.
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
        recent_blockhash: Hash,
    ) -> anyhow::Result<Transaction>;

    /// Lists every profile account owned by the program.
    async fn profiles(&self) -> anyhow::Result<Vec<ProfileRecord>>;

    async fn profile_by_username(&self, username: &str) -> anyhow::Result<Option<ProfileRecord>>;

    async fn profile_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> anyhow::Result<Option<ProfileRecord>>;
}
