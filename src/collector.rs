//! Prometheus collector for rate limiter gauges

use crate::{Error, LimiterRegistry, MetricNames, RateLimiter, Result, NAME_LABEL};
use prometheus::core::{Collector, Desc};
use prometheus::proto;
use std::collections::HashMap;
use std::sync::Arc;

const AVAILABLE_PERMISSIONS_HELP: &str = "The number of available permissions";
const WAITING_THREADS_HELP: &str = "The number of waiting threads";

/// Supplier of the current limiter set, re-invoked on every scrape
pub type LimiterSupplier = Box<dyn Fn() -> Vec<Arc<dyn RateLimiter>> + Send + Sync>;

/// Collects rate limiter gauges into two Prometheus metric families
///
/// Immutable after construction. Safe to scrape from any thread as long as
/// the supplier and the limiters' gauge reads are.
pub struct RateLimiterCollector {
    names: MetricNames,
    descs: Vec<Desc>,
    supplier: LimiterSupplier,
}

impl std::fmt::Debug for RateLimiterCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterCollector")
            .field("names", &self.names)
            .field("descs", &self.descs)
            .field("supplier", &"<supplier>")
            .finish()
    }
}

impl RateLimiterCollector {
    /// Create a collector with custom metric names and a limiter supplier
    ///
    /// The supplier is invoked once per [`Collector::collect`] call; its
    /// result is never cached.
    pub fn new<S>(names: MetricNames, supplier: S) -> Result<Self>
    where
        S: Fn() -> Vec<Arc<dyn RateLimiter>> + Send + Sync + 'static,
    {
        let descs = vec![
            gauge_desc(
                names.available_permissions_metric_name(),
                AVAILABLE_PERMISSIONS_HELP,
            )?,
            gauge_desc(names.waiting_threads_metric_name(), WAITING_THREADS_HELP)?,
        ];

        Ok(Self {
            names,
            descs,
            supplier: Box::new(supplier),
        })
    }

    /// Create a collector with default metric names
    pub fn of_supplier<S>(supplier: S) -> Result<Self>
    where
        S: Fn() -> Vec<Arc<dyn RateLimiter>> + Send + Sync + 'static,
    {
        Self::new(MetricNames::default(), supplier)
    }

    /// Create a collector enumerating limiters from a registry
    pub fn of_registry(registry: Arc<dyn LimiterRegistry>) -> Result<Self> {
        Self::new(MetricNames::default(), move || registry.all_limiters())
    }

    /// Create a collector over a fixed set of limiters
    pub fn of_limiters(limiters: Vec<Arc<dyn RateLimiter>>) -> Result<Self> {
        Self::new(MetricNames::default(), move || limiters.clone())
    }

    /// Create a collector for a single limiter
    pub fn of_limiter(limiter: Arc<dyn RateLimiter>) -> Result<Self> {
        Self::of_limiters(vec![limiter])
    }

    /// Configured metric names
    pub fn names(&self) -> &MetricNames {
        &self.names
    }
}

fn gauge_desc(name: &str, help: &str) -> Result<Desc> {
    Desc::new(
        name.to_string(),
        help.to_string(),
        vec![NAME_LABEL.to_string()],
        HashMap::new(),
    )
    .map_err(|source| Error::InvalidMetricName {
        name: name.to_string(),
        source,
    })
}

// Families are assembled from raw proto values: a GaugeVec would key samples
// by label value, losing enumeration order and collapsing duplicate names.
fn gauge_family(name: &str, help: &str, samples: Vec<(String, f64)>) -> proto::MetricFamily {
    let mut family = proto::MetricFamily::default();
    family.set_name(name.to_string());
    family.set_help(help.to_string());
    family.set_field_type(proto::MetricType::GAUGE);

    for (label_value, value) in samples {
        let mut label = proto::LabelPair::default();
        label.set_name(NAME_LABEL.to_string());
        label.set_value(label_value);

        let mut gauge = proto::Gauge::default();
        gauge.set_value(value);

        let mut metric = proto::Metric::default();
        metric.mut_label().push(label);
        metric.set_gauge(gauge);
        family.mut_metric().push(metric);
    }

    family
}

impl Collector for RateLimiterCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.descs.iter().collect()
    }

    fn collect(&self) -> Vec<proto::MetricFamily> {
        let limiters = (self.supplier)();

        let mut available = Vec::with_capacity(limiters.len());
        let mut waiting = Vec::with_capacity(limiters.len());

        for limiter in &limiters {
            // Single snapshot per limiter so both samples come from one read
            let snapshot = limiter.metrics();
            available.push((
                limiter.name().to_string(),
                snapshot.available_permissions as f64,
            ));
            waiting.push((limiter.name().to_string(), snapshot.waiting_threads as f64));
        }

        vec![
            gauge_family(
                self.names.available_permissions_metric_name(),
                AVAILABLE_PERMISSIONS_HELP,
                available,
            ),
            gauge_family(
                self.names.waiting_threads_metric_name(),
                WAITING_THREADS_HELP,
                waiting,
            ),
        ]
    }
}
