//! Cache diagnostics snapshot.

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a caching proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently held in the cache
    pub entries: usize,
    /// Reads answered from the cache
    pub hits: u64,
    /// Reads that had to reach the backing store
    pub misses: u64,
    /// Whether the backing store has been constructed
    pub connected: bool,
}
