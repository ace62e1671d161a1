//! Monitored rate limiter abstraction

use serde::{Deserialize, Serialize};

/// Read-only gauge snapshot of a rate limiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimiterMetrics {
    /// Permits currently available (negative when permits are reserved ahead)
    pub available_permissions: i64,

    /// Threads currently waiting for a permit
    pub waiting_threads: u64,
}

/// A rate limiter instance observable by the collector
///
/// Gauge reads must be O(1) and non-blocking; the collector performs them on
/// every scrape.
pub trait RateLimiter: Send + Sync {
    /// Stable instance name, used as the `name` label value
    fn name(&self) -> &str;

    /// Current gauge snapshot
    fn metrics(&self) -> LimiterMetrics;
}
