//! Centralized configuration (environment variables + defaults).
//!
//! Missing required values surface as `ProfileToolError::Config`, which the
//! binaries propagate out of `main` for a non-zero exit before any batch
//! work starts.

use crate::error::{ProfileToolError, Result};
use solana_sdk::signer::keypair::{read_keypair_file, Keypair};

/// Solana RPC endpoint (required).
pub fn rpc_endpoint() -> Result<String> {
    std::env::var("SOLANA_RPC_ENDPOINT")
        .map_err(|_| ProfileToolError::Config("SOLANA_RPC_ENDPOINT must be set".to_string()))
}

/// Profile program id (required).
///
/// Set this to the deployed profile program (e.g. output of `anchor deploy`).
pub fn profile_program_id() -> Result<String> {
    std::env::var("PROFILE_PROGRAM_ID")
        .map_err(|_| ProfileToolError::Config("PROFILE_PROGRAM_ID must be set".to_string()))
}

/// Path to the fee-payer keypair file. Overridable via FEE_PAYER_KEYPAIR.
pub fn fee_payer_path() -> String {
    std::env::var("FEE_PAYER_KEYPAIR").unwrap_or_else(|_| "keypairs/fee-payer.json".to_string())
}

/// Path to the generated accounts file. Overridable via GENERATED_ACCOUNTS.
pub fn generated_accounts_path() -> String {
    std::env::var("GENERATED_ACCOUNTS").unwrap_or_else(|_| "generated.json".to_string())
}

/// Reads the fee-payer keypair from disk (tilde-expanded path).
pub fn load_fee_payer() -> Result<Keypair> {
    let path = shellexpand::tilde(&fee_payer_path()).to_string();
    read_keypair_file(&path)
        .map_err(|e| ProfileToolError::Config(format!("failed to read {path}: {e}")))
}
