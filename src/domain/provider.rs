//! Identity providers that can be linked to a profile.

use crate::domain::validation::{is_numeric_string, is_solana_public_key};
use crate::error::ProfileToolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of identity providers the protocol currently supports.
///
/// Each variant carries its own provider-id validation rule: the Solana
/// provider links an on-chain key, every other provider uses a numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityProvider {
    Discord,
    Github,
    Google,
    Solana,
    Twitter,
}

impl IdentityProvider {
    // Add more providers here once the protocol supports them.
    pub const ALL: [IdentityProvider; 5] = [
        IdentityProvider::Discord,
        IdentityProvider::Github,
        IdentityProvider::Google,
        IdentityProvider::Solana,
        IdentityProvider::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityProvider::Discord => "Discord",
            IdentityProvider::Github => "Github",
            IdentityProvider::Google => "Google",
            IdentityProvider::Solana => "Solana",
            IdentityProvider::Twitter => "Twitter",
        }
    }

    /// Checks that `provider_id` is well-formed for this provider.
    pub fn validate_id(&self, provider_id: &str) -> crate::error::Result<()> {
        let ok = match self {
            IdentityProvider::Solana => is_solana_public_key(provider_id),
            _ => is_numeric_string(provider_id),
        };
        if ok {
            Ok(())
        } else {
            Err(ProfileToolError::InvalidProviderId {
                provider: self.as_str().to_string(),
                provider_id: provider_id.to_string(),
            })
        }
    }

    /// Stable byte tag used in on-chain pointer accounts.
    pub fn tag(&self) -> u8 {
        match self {
            IdentityProvider::Discord => 0,
            IdentityProvider::Github => 1,
            IdentityProvider::Google => 2,
            IdentityProvider::Solana => 3,
            IdentityProvider::Twitter => 4,
        }
    }

    pub fn from_tag(tag: u8) -> Option<IdentityProvider> {
        Self::ALL.iter().copied().find(|p| p.tag() == tag)
    }
}

impl fmt::Display for IdentityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityProvider {
    type Err = ProfileToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProfileToolError::InvalidProvider(s.to_string()))
    }
}
