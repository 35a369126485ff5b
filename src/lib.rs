pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

// Convenience re-exports (keeps call-sites clean)
pub use app::batch::{run_batch, run_batch_parallel, BatchOutcome, ItemOutcome};
pub use app::blockhash_cache::BlockhashCache;
pub use app::profile_service::{ProfileService, ProfileServiceConfig};
pub use app::submitter::TransactionSubmitter;
pub use domain::account::GeneratedAccount;
pub use domain::profile::{CreateProfileRequest, ProfileIdentity, ProfileProgramClient, ProfileRecord};
pub use domain::provider::IdentityProvider;
pub use error::ProfileToolError;
pub use infra::solana::rpc::{ChainRpc, RecentBlockhash, SolanaRpc};
