//! Internal telemetry for the sessionizer engine.
//!
//! Tracing setup plus in-memory pipeline counters. Counters are process-wide
//! and cheap to bump from any stage; nothing is exported anywhere, the
//! snapshot is for the embedding application to read.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{metrics, last_run, record_last_run, Counter, LastRun, MetricsSnapshot, PipelineMetrics};
pub use tracing_setup::{init_tracing, init_tracing_from_env, TracingConfig};
