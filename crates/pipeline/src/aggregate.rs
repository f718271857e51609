//! Per-session aggregate derivation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use sessionizer_core::SessionizedEvent;
use telemetry::metrics;

use crate::sessionize::MarkedEvent;

/// Derive session_start/session_end/actual_session_length for every
/// (visitor, site, session_id) group and broadcast them onto each member
/// row. Zero-length (single-event) sessions are kept; no filtering
/// happens after this stage.
pub fn aggregate(marked: Vec<MarkedEvent>) -> Vec<SessionizedEvent> {
    // (min, max) timestamp per session.
    let mut bounds: HashMap<(String, String, u64), (DateTime<Utc>, DateTime<Utc>)> =
        HashMap::with_capacity(marked.len());
    for m in &marked {
        let key = (
            m.event.visitor_id.clone(),
            m.event.site_url.clone(),
            m.session_id,
        );
        let entry = bounds
            .entry(key)
            .or_insert((m.event.timestamp, m.event.timestamp));
        if m.event.timestamp < entry.0 {
            entry.0 = m.event.timestamp;
        }
        if m.event.timestamp > entry.1 {
            entry.1 = m.event.timestamp;
        }
    }

    metrics().sessions_built.inc_by(bounds.len() as u64);
    metrics().events_sessionized.inc_by(marked.len() as u64);

    marked
        .into_iter()
        .map(|m| {
            let key = (
                m.event.visitor_id.clone(),
                m.event.site_url.clone(),
                m.session_id,
            );
            let (start, end) = bounds[&key];
            SessionizedEvent {
                visitor_id: m.event.visitor_id,
                site_url: m.event.site_url,
                page_view_url: m.event.page_view_url,
                timestamp: m.event.timestamp,
                session_id: m.session_id,
                session_start: start,
                session_end: end,
                actual_session_length: (end - start).num_seconds(),
            }
        })
        .collect()
}
