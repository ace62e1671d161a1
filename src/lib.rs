//! # Rate Limiter Prometheus Collector
//!
//! Exposes rate limiter gauges as Prometheus metric families:
//! - Pluggable enumeration source (supplier closure or registry)
//! - Two gauge families per scrape: available permissions and waiting threads
//! - Per-instance `name` label, enumeration order preserved
//! - Fresh snapshot on every scrape (no caching between collect calls)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐  collect()  ┌───────────────────────┐
//! │ prometheus::Registry │────────────▶│ RateLimiterCollector  │
//! └──────────────────────┘             └──────────┬────────────┘
//!                                                 │ supplier()
//!                                      ┌──────────▼────────────┐
//!                                      │   LimiterRegistry /   │
//!                                      │ Vec<Arc<RateLimiter>> │
//!                                      └───────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod collector;
pub mod error;
pub mod limiter;
pub mod names;
pub mod registry;

pub use collector::{LimiterSupplier, RateLimiterCollector};
pub use error::{Error, Result};
pub use limiter::{LimiterMetrics, RateLimiter};
pub use names::{MetricNames, MetricNamesBuilder};
pub use registry::{InMemoryRegistry, LimiterRegistry};

/// Default metric name for the available-permissions gauge
pub const DEFAULT_AVAILABLE_PERMISSIONS_METRIC_NAME: &str =
    "resilience4j_ratelimiter_available_permissions";

/// Default metric name for the waiting-threads gauge
pub const DEFAULT_WAITING_THREADS_METRIC_NAME: &str =
    "resilience4j_ratelimiter_waiting_threads";

/// Label dimension distinguishing limiter instances
pub const NAME_LABEL: &str = "name";
