// Responsible for all communication with the Solana blockchain.

pub mod program;
pub mod rpc;

pub use program::PubkeyProfileProgram;
pub use rpc::{ChainRpc, RecentBlockhash, SolanaRpc};
