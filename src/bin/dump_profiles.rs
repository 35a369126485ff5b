//! Lists every registered profile and prints one `solana account` dump
//! command per profile for local inspection.

use pubkey_profile_tools::infra::config;
use pubkey_profile_tools::infra::solana::program::PubkeyProfileProgram;
use pubkey_profile_tools::infra::solana::rpc::{ChainRpc, SolanaRpc};
use pubkey_profile_tools::{ProfileService, ProfileServiceConfig, ProfileToolError};
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

    println!("# endpoint: {}", endpoint);
    println!("# feePayer: {}", fee_payer.pubkey());

    let rpc: Arc<dyn ChainRpc> = Arc::new(SolanaRpc::new(endpoint));
    let program = Arc::new(PubkeyProfileProgram::new(rpc.clone(), program_id));
    let service = ProfileService::new(ProfileServiceConfig {
        rpc,
        program,
        fee_payer,
    });

    let profiles = service.user_profiles().await?;
    println!("# profiles: {}", profiles.len());
    for profile in profiles {
        println!(
            "solana account --url localhost {} --output json  > ./accounts/profile-{}.json",
            profile.public_key, profile.username
        );
    }
    Ok(())
}
