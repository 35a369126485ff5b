//! Caches the latest blockhash per commitment level.
//!
//! A blockhash is only a freshness token; refetching it for every transaction
//! in a 1000-item batch would be wasteful. Entries expire after a fixed TTL
//! and are refreshed transparently on access. Concurrent callers for the same
//! level share one in-flight fetch: each level has its own awaitable slot, so
//! waiting on one level never blocks another.

use crate::infra::solana::rpc::{ChainRpc, RecentBlockhash};
use solana_sdk::commitment_config::CommitmentLevel;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_TTL: Duration = Duration::from_secs(30);
pub const MAX_ENTRIES: usize = 1000;

struct CachedBlockhash {
    token: RecentBlockhash,
    fetched_at: Instant,
}

type Slot = Arc<Mutex<Option<CachedBlockhash>>>;

pub struct BlockhashCache {
    rpc: Arc<dyn ChainRpc>,
    ttl: Duration,
    slots: Mutex<HashMap<CommitmentLevel, Slot>>,
}

impl BlockhashCache {
    pub fn new(rpc: Arc<dyn ChainRpc>) -> Self {
        Self::with_ttl(rpc, DEFAULT_TTL)
    }

    pub fn with_ttl(rpc: Arc<dyn ChainRpc>, ttl: Duration) -> Self {
        Self {
            rpc,
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached token for `commitment`, fetching a fresh one if the
    /// entry is absent or older than the TTL.
    ///
    /// Holding the slot lock across the fetch gives single-flight semantics:
    /// concurrent callers for the same level await the fetch in progress and
    /// then read the stored entry. A failed fetch caches nothing.
    pub async fn get(&self, commitment: CommitmentLevel) -> anyhow::Result<RecentBlockhash> {
        let slot = {
            let mut slots = self.slots.lock().await;
            if slots.len() >= MAX_ENTRIES && !slots.contains_key(&commitment) {
                // Safety cap only; unreachable with the closed commitment set.
                slots.clear();
            }
            slots
                .entry(commitment)
                .or_insert_with(|| Arc::new(Mutex::new(None)))
                .clone()
        };

        let mut entry = slot.lock().await;
        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.token.clone());
            }
        }

        println!("Caching latest blockhash");
        let token = self.rpc.latest_blockhash(commitment).await?;
        *entry = Some(CachedBlockhash {
            token: token.clone(),
            fetched_at: Instant::now(),
        });
        Ok(token)
    }
}
