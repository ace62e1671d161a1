//! Limiter registry used as enumeration source

use crate::{Error, RateLimiter, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Source of the current limiter set
///
/// Re-invoked on every collection call; implementations must tolerate
/// concurrent reads.
pub trait LimiterRegistry: Send + Sync {
    /// All limiters currently registered
    fn all_limiters(&self) -> Vec<Arc<dyn RateLimiter>>;
}

/// In-memory registry keyed by limiter name
///
/// Enumerates in name order, so scrape output is deterministic.
pub struct InMemoryRegistry {
    limiters: RwLock<BTreeMap<String, Arc<dyn RateLimiter>>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            limiters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Register a limiter under its name
    pub fn register(&self, limiter: Arc<dyn RateLimiter>) -> Result<()> {
        let name = limiter.name().to_string();
        let mut limiters = self.limiters.write();

        if limiters.contains_key(&name) {
            return Err(Error::DuplicateLimiter(name));
        }

        info!("Registered rate limiter {}", name);
        limiters.insert(name, limiter);
        Ok(())
    }

    /// Register or swap a limiter, returning the previous instance
    pub fn replace(&self, limiter: Arc<dyn RateLimiter>) -> Option<Arc<dyn RateLimiter>> {
        let name = limiter.name().to_string();
        let previous = self.limiters.write().insert(name.clone(), limiter);

        if previous.is_some() {
            warn!("Replaced rate limiter {}", name);
        } else {
            info!("Registered rate limiter {}", name);
        }
        previous
    }

    /// Remove a limiter by name
    pub fn remove(&self, name: &str) -> Option<Arc<dyn RateLimiter>> {
        let removed = self.limiters.write().remove(name);
        if removed.is_some() {
            info!("Removed rate limiter {}", name);
        }
        removed
    }

    /// Look up a limiter by name
    pub fn find(&self, name: &str) -> Option<Arc<dyn RateLimiter>> {
        self.limiters.read().get(name).cloned()
    }

    /// Number of registered limiters
    pub fn len(&self) -> usize {
        self.limiters.read().len()
    }

    /// True when no limiters are registered
    pub fn is_empty(&self) -> bool {
        self.limiters.read().is_empty()
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LimiterRegistry for InMemoryRegistry {
    fn all_limiters(&self) -> Vec<Arc<dyn RateLimiter>> {
        self.limiters.read().values().cloned().collect()
    }
}
