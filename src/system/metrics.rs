//! Metrics collection for augmentation runs
//!
//! Prometheus counters and a duration histogram, registered once in a
//! crate-owned registry. Only the pipeline records into them; the engines
//! stay free of side effects.

use crate::core::Result;
use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};
use std::time::Instant;

/// Global metrics registry
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Counters and timings for augmentation runs
pub struct Metrics {
    /// Graphs passed through the pipeline
    pub graphs_processed: IntCounter,
    /// Articulation points found before biconnectivity augmentation
    pub articulation_points: IntCounter,
    /// Bypass edges proposed by the biconnectivity augmenter
    pub bypass_edges: IntCounter,
    /// Fill edges proposed by the triangulation orchestrator
    pub fill_edges: IntCounter,
    /// Wall-clock duration of a full pipeline run in seconds
    pub augmentation_duration: Histogram,
}

impl Metrics {
    /// Create and register a new metrics set
    fn new(registry: &Registry) -> Result<Self> {
        let metrics = Self {
            graphs_processed: IntCounter::new(
                "fa_graphs_processed_total",
                "Total number of graphs augmented",
            )?,
            articulation_points: IntCounter::new(
                "fa_articulation_points_total",
                "Total number of articulation points found",
            )?,
            bypass_edges: IntCounter::new(
                "fa_bypass_edges_total",
                "Total number of bypass edges proposed",
            )?,
            fill_edges: IntCounter::new(
                "fa_fill_edges_total",
                "Total number of chordal fill edges proposed",
            )?,
            augmentation_duration: Histogram::with_opts(
                HistogramOpts::new(
                    "fa_augmentation_duration_seconds",
                    "Duration of augmentation runs in seconds",
                )
                .buckets(vec![0.0001, 0.001, 0.01, 0.1, 1.0, 10.0]),
            )?,
        };

        registry.register(Box::new(metrics.graphs_processed.clone()))?;
        registry.register(Box::new(metrics.articulation_points.clone()))?;
        registry.register(Box::new(metrics.bypass_edges.clone()))?;
        registry.register(Box::new(metrics.fill_edges.clone()))?;
        registry.register(Box::new(metrics.augmentation_duration.clone()))?;
        Ok(metrics)
    }

    /// Get the global metrics instance
    pub fn global() -> &'static Metrics {
        static INSTANCE: Lazy<Metrics> = Lazy::new(|| {
            Metrics::new(&REGISTRY).expect("metric names are static and registered once")
        });
        &INSTANCE
    }
}

/// Timer for measuring operation duration with automatic histogram recording
pub struct Timer {
    start: Instant,
    histogram: Histogram,
}

impl Timer {
    /// Start a new timer
    pub fn start(histogram: Histogram) -> Self {
        Self {
            start: Instant::now(),
            histogram,
        }
    }

    /// Record the elapsed time and consume the timer
    pub fn finish(self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Initialize the metrics registry by creating the global metrics instance
pub fn init_registry() {
    let _ = Metrics::global();
}

/// Registry holding every metric of this crate
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Collect all metrics in the Prometheus text exposition format
pub fn collect_metrics() -> Result<String> {
    let encoder = prometheus::TextEncoder::new();
    let families = registry().gather();
    Ok(encoder.encode_to_string(&families)?)
}
