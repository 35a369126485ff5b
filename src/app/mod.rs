//! Application services: the blockhash cache, the transaction submitter, the
//! profile service that ties them together, and the batch runner.

pub mod batch;
pub mod blockhash_cache;
pub mod profile_service;
pub mod submitter;
