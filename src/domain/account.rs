//! Synthetic test accounts: deterministic generation from a numeric seed and
//! the keypair/identity check the batch runner relies on.

use crate::error::ProfileToolError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use solana_sdk::signer::keypair::{keypair_from_seed, Keypair};
use solana_sdk::signer::Signer;

pub const DEFAULT_AMOUNT: usize = 1000;
pub const SEED_OFFSET: u64 = 1000;

const FIRST_NAMES: &[&str] = &[
    "amelia", "arthur", "bella", "caleb", "clara", "daniel", "elena", "felix", "grace", "henry",
    "isla", "jonas", "kara", "liam", "maya", "noah", "olive", "piotr", "quinn", "ruby", "samuel",
    "tessa", "ulrich", "vera", "wes", "xenia", "yusuf", "zoe",
];

const LAST_NAMES: &[&str] = &[
    "abbott", "barton", "calhoun", "dietrich", "emmerich", "fisher", "gleason", "hammes",
    "jacobi", "keeling", "lemke", "mertz", "nader", "okuneva", "pfeffer", "quigley", "reinger",
    "schmidt", "torp", "ullrich", "veum", "walsh", "yundt", "zieme",
];

/// One synthetic identity record, matching the JSON layout of the generated
/// accounts file (`generated.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAccount {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
    pub public_key: String,
    /// The 64-byte secret key, serialized as a JSON array string ("[1,2,..]")
    /// so the file stays compatible with `solana-keygen` style tooling.
    pub secret_key: String,
}

impl GeneratedAccount {
    /// Parses the secret key and verifies it derives the recorded public key.
    ///
    /// A mismatch is a fatal precondition failure for this account only; the
    /// batch runner reports it and moves on.
    pub fn signing_keypair(&self) -> crate::error::Result<Keypair> {
        let bytes: Vec<u8> =
            serde_json::from_str(&self.secret_key).map_err(|e| ProfileToolError::KeyMismatch {
                username: self.username.clone(),
                detail: format!("secret key is not a byte array: {e}"),
            })?;
        let keypair = Keypair::from_bytes(&bytes).map_err(|e| ProfileToolError::KeyMismatch {
            username: self.username.clone(),
            detail: format!("secret key is not a valid keypair: {e}"),
        })?;
        let derived = keypair.pubkey().to_string();
        if derived != self.public_key {
            return Err(ProfileToolError::KeyMismatch {
                username: self.username.clone(),
                detail: format!("derived {derived} but expected {}", self.public_key),
            });
        }
        Ok(keypair)
    }
}

pub fn generate_accounts(amount: usize) -> Vec<GeneratedAccount> {
    (0..amount)
        .map(|index| generate_account(index, SEED_OFFSET))
        .collect()
}

/// Generates one account deterministically from `offset + index`.
///
/// The same seed always yields the same username, display name, avatar URL
/// and keypair.
pub fn generate_account(index: usize, offset: u64) -> GeneratedAccount {
    let seed = offset + index as u64;
    let mut rng = StdRng::seed_from_u64(seed);

    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

    let keypair_seed: [u8; 32] = rng.gen();
    let keypair = keypair_from_seed(&keypair_seed).expect("seed is exactly 32 bytes");

    let mut username = format!("{first}_{last}");
    username.truncate(19);

    let secret_key = keypair
        .to_bytes()
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(",");

    GeneratedAccount {
        username,
        name: format!(
            "{}{} {}{}",
            first[..1].to_uppercase(),
            &first[1..],
            last[..1].to_uppercase(),
            &last[1..]
        ),
        avatar_url: format!("https://api.dicebear.com/9.x/bottts-neutral/svg?seed={seed}"),
        public_key: keypair.pubkey().to_string(),
        secret_key: format!("[{secret_key}]"),
    }
}
