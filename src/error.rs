//! Error taxonomy for the profile tools.
//!
//! Configuration errors are fatal and bubble up to `main`; everything else is
//! per-item (caught at the batch boundary) or surfaced to the immediate
//! caller of a lookup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileToolError {
    /// Missing or malformed startup configuration. Halts the process before
    /// any batch work begins.
    #[error("configuration error: {0}")]
    Config(String),

    /// The locally held secret key does not derive the public key recorded
    /// for the account.
    #[error("keypair mismatch for {username}: {detail}")]
    KeyMismatch { username: String, detail: String },

    /// A profile-service call (transaction construction or lookup) failed.
    #[error("profile service call failed: {0}")]
    Service(anyhow::Error),

    /// The cluster rejected the transaction, either at submission or with an
    /// on-chain error observed during confirmation.
    #[error("transaction rejected: {0}")]
    Submission(String),

    /// Confirmation was not observed before the blockhash deadline passed.
    #[error("transaction expired: block height {height} exceeded last valid height {last_valid_block_height}")]
    Expired {
        height: u64,
        last_valid_block_height: u64,
    },

    /// An RPC round trip failed (blockhash fetch, status poll, height check).
    #[error("rpc request failed: {0}")]
    Rpc(anyhow::Error),

    #[error("invalid username: {0}")]
    InvalidUsername(String),

    #[error("invalid provider: {0}")]
    InvalidProvider(String),

    #[error("invalid provider id for {provider}: {provider_id}")]
    InvalidProviderId {
        provider: String,
        provider_id: String,
    },

    #[error("invalid Solana public key: {0}")]
    InvalidPublicKey(String),
}

pub type Result<T> = std::result::Result<T, ProfileToolError>;
