//! Input validation helpers shared across lookups and the batch runner.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// A username is 3..=20 characters, lowercase alphanumeric or underscore.
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 20 {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// True if the string is non-empty and consists purely of ASCII digits.
pub fn is_numeric_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Parses a base58-encoded Solana public key, returning None on any failure.
pub fn parse_public_key(s: &str) -> Option<Pubkey> {
    Pubkey::from_str(s).ok()
}

pub fn is_solana_public_key(s: &str) -> bool {
    parse_public_key(s).is_some()
}
