//! Client for the on-chain profile program.
//!
//! The program itself is an external deployment; this module only builds its
//! instructions and decodes its accounts. The byte layouts here must match
//! the structs in the deployed program.

use crate::domain::profile::{
    CreateProfileRequest, ProfileIdentity, ProfileProgramClient, ProfileRecord,
};
use crate::domain::provider::IdentityProvider;
use crate::infra::solana::rpc::ChainRpc;
use async_trait::async_trait;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_sdk::hash::Hash;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

pub const PROFILE_SEED: &[u8] = b"profile";
pub const POINTER_SEED: &[u8] = b"pointer";

// Anchor instruction/account discriminators of the deployed program.
const CREATE_PROFILE_DISCRIMINATOR: [u8; 8] = [225, 205, 234, 143, 17, 186, 50, 220];
const PROFILE_ACCOUNT_DISCRIMINATOR: [u8; 8] = [184, 101, 165, 188, 95, 63, 127, 188];
const POINTER_ACCOUNT_DISCRIMINATOR: [u8; 8] = [31, 119, 180, 46, 9, 77, 205, 34];

pub struct PubkeyProfileProgram {
    rpc: Arc<dyn ChainRpc>,
    program_id: Pubkey,
}

impl PubkeyProfileProgram {
    pub fn new(rpc: Arc<dyn ChainRpc>, program_id: Pubkey) -> Self {
        Self { rpc, program_id }
    }

    /// Profile accounts live at a PDA derived from the username.
    pub fn profile_pda(&self, username: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PROFILE_SEED, username.as_bytes()], &self.program_id)
    }

    /// Pointer accounts map (provider, provider_id) to a profile address.
    pub fn pointer_pda(&self, provider: IdentityProvider, provider_id: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POINTER_SEED, &[provider.tag()], provider_id.as_bytes()],
            &self.program_id,
        )
    }
}

#[async_trait]
impl ProfileProgramClient for PubkeyProfileProgram {
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
        recent_blockhash: Hash,
    ) -> anyhow::Result<Transaction> {
        let (profile_pda, _bump) = self.profile_pda(&request.username);

        let accounts = vec![
            AccountMeta::new(profile_pda, false),
            AccountMeta::new_readonly(request.authority, true),
            AccountMeta::new(request.fee_payer, true),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ];

        let mut data = CREATE_PROFILE_DISCRIMINATOR.to_vec();
        put_str(&mut data, &request.username);
        put_str(&mut data, &request.avatar_url);

        let instruction = Instruction {
            program_id: self.program_id,
            accounts,
            data,
        };

        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&request.fee_payer));
        transaction.message.recent_blockhash = recent_blockhash;
        Ok(transaction)
    }

    async fn profiles(&self) -> anyhow::Result<Vec<ProfileRecord>> {
        let accounts = self.rpc.program_accounts(&self.program_id).await?;
        let mut profiles = Vec::new();
        for (pubkey, data) in accounts {
            // The program also owns pointer accounts; keep only profiles.
            if data.len() < 8 || data[..8] != PROFILE_ACCOUNT_DISCRIMINATOR {
                continue;
            }
            profiles.push(decode_profile_account(pubkey, &data)?);
        }
        Ok(profiles)
    }

    async fn profile_by_username(&self, username: &str) -> anyhow::Result<Option<ProfileRecord>> {
        let (profile_pda, _bump) = self.profile_pda(username);
        match self.rpc.account_data(&profile_pda).await? {
            Some(data) => Ok(Some(decode_profile_account(profile_pda, &data)?)),
            None => Ok(None),
        }
    }

    async fn profile_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> anyhow::Result<Option<ProfileRecord>> {
        let (pointer_pda, _bump) = self.pointer_pda(provider, provider_id);
        let pointer_data = match self.rpc.account_data(&pointer_pda).await? {
            Some(data) => data,
            None => return Ok(None),
        };
        let profile_pubkey = decode_pointer_account(&pointer_data)?;
        match self.rpc.account_data(&profile_pubkey).await? {
            Some(data) => Ok(Some(decode_profile_account(profile_pubkey, &data)?)),
            None => Ok(None),
        }
    }
}

// Borsh-style length-prefixed string encoding used by the program.
fn put_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> anyhow::Result<&'a [u8]> {
        if self.offset + len > self.data.len() {
            return Err(anyhow::anyhow!("account data too short"));
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn read_u8(&mut self) -> anyhow::Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> anyhow::Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_str(&mut self) -> anyhow::Result<String> {
        let len = self.read_u32()? as usize;
        Ok(String::from_utf8(self.take(len)?.to_vec())?)
    }

    fn read_pubkey(&mut self) -> anyhow::Result<Pubkey> {
        let bytes = self.take(32)?;
        let mut raw = [0u8; 32];
        raw.copy_from_slice(bytes);
        Ok(Pubkey::new_from_array(raw))
    }
}

/// Decodes a profile account:
/// 8-byte discriminator + bump + username + avatar_url + authorities + identities.
pub fn decode_profile_account(pubkey: Pubkey, data: &[u8]) -> anyhow::Result<ProfileRecord> {
    if data.len() < 8 || data[..8] != PROFILE_ACCOUNT_DISCRIMINATOR {
        return Err(anyhow::anyhow!(
            "account {pubkey} is not a profile account"
        ));
    }

    let mut reader = Reader { data, offset: 8 };
    let _bump = reader.read_u8()?;
    let username = reader.read_str()?;
    let avatar_url = reader.read_str()?;

    let authority_count = reader.read_u32()? as usize;
    let mut authorities = Vec::with_capacity(authority_count);
    for _ in 0..authority_count {
        authorities.push(reader.read_pubkey()?);
    }

    let identity_count = reader.read_u32()? as usize;
    let mut identities = Vec::with_capacity(identity_count);
    for _ in 0..identity_count {
        let tag = reader.read_u8()?;
        let provider = IdentityProvider::from_tag(tag)
            .ok_or_else(|| anyhow::anyhow!("unknown identity provider tag {tag}"))?;
        let provider_id = reader.read_str()?;
        identities.push(ProfileIdentity {
            provider,
            provider_id,
        });
    }

    Ok(ProfileRecord {
        public_key: pubkey,
        username,
        avatar_url,
        authorities,
        identities,
    })
}

/// Decodes a pointer account: 8-byte discriminator + profile pubkey.
pub fn decode_pointer_account(data: &[u8]) -> anyhow::Result<Pubkey> {
    if data.len() < 8 || data[..8] != POINTER_ACCOUNT_DISCRIMINATOR {
        return Err(anyhow::anyhow!("not a pointer account"));
    }
    let mut reader = Reader { data, offset: 8 };
    reader.read_pubkey()
}

/// Encodes a profile account body (used by tests to build fixture accounts).
pub fn encode_profile_account(
    bump: u8,
    username: &str,
    avatar_url: &str,
    authorities: &[Pubkey],
    identities: &[ProfileIdentity],
) -> Vec<u8> {
    let mut data = PROFILE_ACCOUNT_DISCRIMINATOR.to_vec();
    data.push(bump);
    put_str(&mut data, username);
    put_str(&mut data, avatar_url);
    data.extend_from_slice(&(authorities.len() as u32).to_le_bytes());
    for authority in authorities {
        data.extend_from_slice(authority.as_ref());
    }
    data.extend_from_slice(&(identities.len() as u32).to_le_bytes());
    for identity in identities {
        data.push(identity.provider.tag());
        put_str(&mut data, &identity.provider_id);
    }
    data
}
