//! Domain types: generated accounts, profiles, identity providers and the
//! validation rules attached to them.

pub mod account;
pub mod profile;
pub mod provider;
pub mod validation;
