//! Prints a JSON array of deterministic synthetic accounts to stdout.
//!
//! Redirect into `generated.json` for use by `create-profiles`:
//!   cargo run --bin generate-accounts > generated.json

use pubkey_profile_tools::domain::account;

fn main() -> anyhow::Result<()> {
    let amount = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("amount must be a number: {e}"))?,
        None => account::DEFAULT_AMOUNT,
    };

    let accounts = account::generate_accounts(amount);
    println!("{}", serde_json::to_string_pretty(&accounts)?);
    Ok(())
}
