//! Batch loading: pre-check, parse, and coerce all sources.

use tracing::{debug, info, warn};

use sessionizer_core::Event;
use telemetry::metrics;

use crate::config::LoadConfig;
use crate::consistency::ConsistencyReport;
use crate::parse::{field_count, parse_source};
use crate::source::Source;

/// Everything the load step hands to the pipeline.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Coerced events from all loaded sources, in source order
    pub events: Vec<Event>,
    /// Field-count report; `None` when the pre-check never completed
    pub consistency: Option<ConsistencyReport>,
    /// Ids of sources that loaded successfully
    pub loaded: Vec<String>,
    /// Human-readable diagnostic for the empty-table outcomes
    pub message: Option<String>,
}

impl LoadOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Load all sources into a single event collection.
///
/// Two independent passes, mirroring the error policy of the contract:
/// the field-count pre-check reads every source and hard-fails the whole
/// load on the first unreadable one; the load pass then parses and coerces
/// per source, skipping unreadable sources and silently dropping records
/// that fail coercion.
///
/// Never returns an error: the worst outcome is an empty table with a
/// diagnostic message.
pub fn load(sources: &[Box<dyn Source>], config: &LoadConfig) -> LoadOutcome {
    if sources.is_empty() {
        info!("no sources to load");
        return LoadOutcome::failed("no sources found");
    }

    // Pass 1: field-count pre-check.
    let mut counts = Vec::with_capacity(sources.len());
    for source in sources {
        match parse_source(source.as_ref(), config.delimiter) {
            Ok(batch) => counts.push((batch.source_id, field_count(&batch.records))),
            Err(e) => {
                warn!(source = source.id(), error = %e, "field-count check failed");
                return LoadOutcome::failed(format!(
                    "field-count check failed for {}: {e}",
                    source.id()
                ));
            }
        }
    }
    let consistency = ConsistencyReport::check(&counts);
    if !consistency.is_consistent() {
        warn!(%consistency, "sources disagree on field count");
    }

    // Pass 2: load. Unreadable sources are skipped, malformed records
    // dropped without a per-record diagnostic.
    let mut events = Vec::new();
    let mut loaded = Vec::new();
    for source in sources {
        let batch = match parse_source(source.as_ref(), config.delimiter) {
            Ok(batch) => batch,
            Err(e) => {
                warn!(source = source.id(), error = %e, "skipping unreadable source");
                continue;
            }
        };

        let mut dropped = 0u64;
        metrics().records_parsed.inc_by(batch.records.len() as u64);
        for record in &batch.records {
            match config.schema.coerce(record) {
                Ok(event) => events.push(event),
                Err(e) => {
                    dropped += 1;
                    debug!(source = %batch.source_id, error = %e, "dropped record");
                }
            }
        }
        metrics().records_dropped.inc_by(dropped);
        metrics().sources_loaded.inc();
        info!(
            source = %batch.source_id,
            records = batch.records.len(),
            dropped,
            "loaded source"
        );
        loaded.push(batch.source_id);
    }

    LoadOutcome {
        events,
        consistency: Some(consistency),
        loaded,
        message: None,
    }
}
