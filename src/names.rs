//! Metric name configuration

use crate::{DEFAULT_AVAILABLE_PERMISSIONS_METRIC_NAME, DEFAULT_WAITING_THREADS_METRIC_NAME};
use serde::{Deserialize, Serialize};

/// Metric names emitted by the collector
///
/// Both names are defaulted; use [`MetricNames::builder`] to rename only the
/// desired metrics. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricNames {
    /// Name of the available-permissions gauge
    #[serde(default = "default_available_permissions")]
    available_permissions: String,

    /// Name of the waiting-threads gauge
    #[serde(default = "default_waiting_threads")]
    waiting_threads: String,
}

fn default_available_permissions() -> String {
    DEFAULT_AVAILABLE_PERMISSIONS_METRIC_NAME.to_string()
}

fn default_waiting_threads() -> String {
    DEFAULT_WAITING_THREADS_METRIC_NAME.to_string()
}

impl Default for MetricNames {
    fn default() -> Self {
        Self {
            available_permissions: default_available_permissions(),
            waiting_threads: default_waiting_threads(),
        }
    }
}

impl MetricNames {
    /// Builder for overriding one or both metric names
    pub fn builder() -> MetricNamesBuilder {
        MetricNamesBuilder::default()
    }

    /// Metric name for the available-permissions gauge
    pub fn available_permissions_metric_name(&self) -> &str {
        &self.available_permissions
    }

    /// Metric name for the waiting-threads gauge
    pub fn waiting_threads_metric_name(&self) -> &str {
        &self.waiting_threads
    }
}

/// Builder for [`MetricNames`]
#[derive(Debug)]
pub struct MetricNamesBuilder {
    names: MetricNames,
}

impl Default for MetricNamesBuilder {
    fn default() -> Self {
        Self {
            names: MetricNames::default(),
        }
    }
}

impl MetricNamesBuilder {
    /// Override the available-permissions metric name
    pub fn available_permissions_metric_name(mut self, name: impl Into<String>) -> Self {
        self.names.available_permissions = name.into();
        self
    }

    /// Override the waiting-threads metric name
    pub fn waiting_threads_metric_name(mut self, name: impl Into<String>) -> Self {
        self.names.waiting_threads = name.into();
        self
    }

    /// Build the immutable name set
    pub fn build(self) -> MetricNames {
        self.names
    }
}
