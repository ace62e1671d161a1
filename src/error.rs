//! Error types for the collector

use thiserror::Error;

/// Result type for collector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Collector errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configured metric name rejected by Prometheus
    #[error("Invalid metric name {name:?}: {source}")]
    InvalidMetricName {
        /// Configured name
        name: String,
        /// Underlying rejection
        #[source]
        source: prometheus::Error,
    },

    /// Limiter already registered under this name
    #[error("Limiter already registered: {0}")]
    DuplicateLimiter(String),
}
