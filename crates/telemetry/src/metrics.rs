//! Internal metrics collection.
//!
//! Pipeline stages bump process-wide counters; the embedding application
//! reads them back as a serializable snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) -> u64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// Counters for one end-to-end pass of the pipeline.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    /// Sources successfully loaded (pre-check failures excluded)
    pub sources_loaded: Counter,
    /// Raw records parsed out of all sources
    pub records_parsed: Counter,
    /// Records dropped at coercion (malformed, documented data loss)
    pub records_dropped: Counter,
    /// Exact-duplicate rows removed by the normalizer
    pub duplicates_removed: Counter,
    /// Events that made it into the sessionized table
    pub events_sessionized: Counter,
    /// Distinct sessions produced by the last aggregation
    pub sessions_built: Counter,
    /// Processed-table cache hits
    pub cache_hits: Counter,
    /// Processed-table cache misses (full recomputations)
    pub cache_misses: Counter,
}

/// Point-in-time view of the pipeline counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub sources_loaded: u64,
    pub records_parsed: u64,
    pub records_dropped: u64,
    pub duplicates_removed: u64,
    pub events_sessionized: u64,
    pub sessions_built: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl PipelineMetrics {
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sources_loaded: self.sources_loaded.get(),
            records_parsed: self.records_parsed.get(),
            records_dropped: self.records_dropped.get(),
            duplicates_removed: self.duplicates_removed.get(),
            events_sessionized: self.events_sessionized.get(),
            sessions_built: self.sessions_built.get(),
            cache_hits: self.cache_hits.get(),
            cache_misses: self.cache_misses.get(),
        }
    }
}

/// Process-wide pipeline metrics handle.
pub fn metrics() -> &'static PipelineMetrics {
    static METRICS: OnceLock<PipelineMetrics> = OnceLock::new();
    METRICS.get_or_init(PipelineMetrics::default)
}

/// Summary of the last completed pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastRun {
    pub finished_at: DateTime<Utc>,
    pub events: u64,
    pub sessions: u64,
}

fn last_run_slot() -> &'static RwLock<Option<LastRun>> {
    static LAST_RUN: OnceLock<RwLock<Option<LastRun>>> = OnceLock::new();
    LAST_RUN.get_or_init(|| RwLock::new(None))
}

/// Record the completion of a pipeline run.
pub fn record_last_run(events: u64, sessions: u64) {
    *last_run_slot().write() = Some(LastRun {
        finished_at: Utc::now(),
        events,
        sessions,
    });
}

/// The last completed pipeline run, if any.
pub fn last_run() -> Option<LastRun> {
    last_run_slot().read().clone()
}
