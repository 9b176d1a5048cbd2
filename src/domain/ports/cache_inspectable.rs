//! Diagnostic capability exposed only by caching proxies.

use crate::domain::models::CacheStats;

/// Read-only view into a caching proxy's state.
///
/// Kept separate from [`Database`](super::Database): diagnostics need a
/// concrete proxy handle, never a downcast from the subject trait.
pub trait CacheInspectable {
    /// Number of entries currently cached.
    fn cached_entries(&self) -> usize;

    /// Whether `key` currently has a cached value.
    fn is_cached(&self, key: &str) -> bool;

    /// Whether the backing store has been constructed yet.
    fn is_connected(&self) -> bool;

    /// Serializable snapshot of the counters above.
    fn cache_stats(&self) -> CacheStats;
}
