//! On-chain profile account decoding against hand-built fixtures.

use pubkey_profile_tools::infra::solana::program::{
    decode_profile_account, encode_profile_account,
};
use pubkey_profile_tools::{IdentityProvider, ProfileIdentity};
use solana_sdk::pubkey::Pubkey;

#[test]
fn decodes_full_profile_account() {
    let authority = Pubkey::new_unique();
    let identities = vec![
        ProfileIdentity {
            provider: IdentityProvider::Github,
            provider_id: "12345".to_string(),
        },
        ProfileIdentity {
            provider: IdentityProvider::Solana,
            provider_id: authority.to_string(),
        },
    ];
    let data = encode_profile_account(
        254,
        "amelia_torp",
        "https://api.dicebear.com/9.x/bottts-neutral/svg?seed=1000",
        &[authority],
        &identities,
    );

    let address = Pubkey::new_unique();
    let profile = decode_profile_account(address, &data).unwrap();

    assert_eq!(profile.public_key, address);
    assert_eq!(profile.username, "amelia_torp");
    assert_eq!(
        profile.avatar_url,
        "https://api.dicebear.com/9.x/bottts-neutral/svg?seed=1000"
    );
    assert_eq!(profile.authorities, vec![authority]);
    assert_eq!(profile.identities, identities);
}

#[test]
fn decodes_profile_without_identities() {
    let data = encode_profile_account(255, "abc", "", &[], &[]);
    let profile = decode_profile_account(Pubkey::new_unique(), &data).unwrap();
    assert_eq!(profile.username, "abc");
    assert!(profile.avatar_url.is_empty());
    assert!(profile.authorities.is_empty());
    assert!(profile.identities.is_empty());
}

#[test]
fn rejects_wrong_discriminator() {
    let mut data = encode_profile_account(255, "abc", "", &[], &[]);
    data[0] ^= 0xff;
    assert!(decode_profile_account(Pubkey::new_unique(), &data).is_err());
}

#[test]
fn rejects_truncated_account() {
    let data = encode_profile_account(255, "amelia_torp", "", &[], &[]);
    assert!(decode_profile_account(Pubkey::new_unique(), &data[..data.len() - 4]).is_err());
}

#[test]
fn rejects_unknown_provider_tag() {
    let identities = vec![ProfileIdentity {
        provider: IdentityProvider::Twitter,
        provider_id: "99".to_string(),
    }];
    let mut data = encode_profile_account(255, "abc", "", &[], &identities);
    // Corrupt the provider tag (first byte after the identity count).
    let tag_offset = data.len() - (1 + 4 + 2);
    data[tag_offset] = 200;
    assert!(decode_profile_account(Pubkey::new_unique(), &data).is_err());
}
