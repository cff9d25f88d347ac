//! Best-effort key/value caching contract.

use crate::error::CacheResult;

/// Fast, in-memory key/value storage for request-to-request state, such as
/// memoized query results.
///
/// Values are held best-effort: the platform may evict an entry at any time
/// before its time-to-live elapses, and a lookup cannot distinguish "never
/// set" from "evicted"; both return `Ok(None)`. Keys and values are
/// size-limited and TTLs are capped; violations surface as the
/// corresponding [`CacheError`](crate::error::CacheError) variants.
pub trait CachingService: Send + Sync {
    /// Looks up raw bytes.
    fn get_bytes(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Stores raw bytes for at most `ttl_ms` milliseconds. Returns whether
    /// the value was accepted.
    fn set_bytes(&self, key: &str, value: &[u8], ttl_ms: u64) -> CacheResult<bool>;

    /// Looks up a string value.
    fn get_string(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a string value for at most `ttl_ms` milliseconds. Returns
    /// whether the value was accepted.
    fn set_string(&self, key: &str, value: &str, ttl_ms: u64) -> CacheResult<bool>;

    /// Requests deletion of a key. Best-effort and asynchronous: the call
    /// returns once the deletion is queued, and a concurrent lookup may
    /// still observe the value for a short time.
    fn delete_eventually(&self, key: &str) -> CacheResult<()>;
}
