//! Registers an on-chain profile for every account in `generated.json`,
//! sequentially, continuing past individual failures.
//!
//! Requires env vars:
//!   SOLANA_RPC_ENDPOINT, PROFILE_PROGRAM_ID
//! And the fee-payer keypair at keypairs/fee-payer.json (or FEE_PAYER_KEYPAIR).

use pubkey_profile_tools::app::batch;
use pubkey_profile_tools::domain::account::GeneratedAccount;
use pubkey_profile_tools::infra::config;
use pubkey_profile_tools::infra::solana::program::PubkeyProfileProgram;
use pubkey_profile_tools::infra::solana::rpc::{ChainRpc, SolanaRpc};
use pubkey_profile_tools::{ProfileService, ProfileServiceConfig, ProfileToolError};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;
use std::str::FromStr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let endpoint = config::rpc_endpoint()?;
    let program_id_str = config::profile_program_id()?;
    let program_id = Pubkey::from_str(&program_id_str).map_err(|e| {
        ProfileToolError::Config(format!("PROFILE_PROGRAM_ID is not a valid pubkey: {e}"))
    })?;
    let fee_payer = config::load_fee_payer()?;

    let rpc: Arc<dyn ChainRpc> = Arc::new(SolanaRpc::new(endpoint.clone()));

    println!("endpoint: {}", endpoint);
    println!("feePayer: {}", fee_payer.pubkey());
    let balance = rpc.balance(&fee_payer.pubkey()).await?;
    println!(
        "balance : {} SOL",
        balance as f64 / LAMPORTS_PER_SOL as f64
    );

    let accounts_path = config::generated_accounts_path();
    let accounts: Vec<GeneratedAccount> =
        serde_json::from_str(&std::fs::read_to_string(&accounts_path).map_err(|e| {
            ProfileToolError::Config(format!("failed to read {accounts_path}: {e}"))
        })?)?;
    println!("accounts: {} generated accounts", accounts.len());

    let program = Arc::new(PubkeyProfileProgram::new(rpc.clone(), program_id));
    let service = ProfileService::new(ProfileServiceConfig {
        rpc,
        program,
        fee_payer,
    });

    let outcomes = batch::run_batch(&service, &accounts).await;

    let confirmed = outcomes.iter().filter(|o| o.outcome.is_confirmed()).count();
    println!("Batch complete: {}/{} confirmed", confirmed, outcomes.len());
    Ok(())
}
