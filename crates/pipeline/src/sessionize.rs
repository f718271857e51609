//! Inactivity-gap session assignment.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use sessionizer_core::{Event, INACTIVITY_GAP_SECS};

/// An event with its assigned session ordinal, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedEvent {
    pub event: Event,
    pub session_id: u64,
}

/// Assign session ids over a normalized, time-ordered event sequence.
///
/// Events are grouped by (visitor_id, site_url) by value; within a group
/// an event opens a new session iff it is the group's first or its gap to
/// the immediately preceding event exceeds [`INACTIVITY_GAP_SECS`].
/// Session ids are the running boundary count per group, starting at 1.
///
/// One pass suffices because the input is globally timestamp-ordered, so
/// each group is encountered in ascending-timestamp order. Input order is
/// preserved in the output. This stage cannot fail on well-typed input.
pub fn sessionize(events: Vec<Event>) -> Vec<MarkedEvent> {
    // Latest (timestamp, session_id) seen per group.
    let mut last: HashMap<(String, String), (DateTime<Utc>, u64)> = HashMap::new();
    let mut marked = Vec::with_capacity(events.len());

    for event in events {
        let key = (event.visitor_id.clone(), event.site_url.clone());
        let session_id = match last.get(&key) {
            Some(&(prev_ts, prev_id)) => {
                let gap = (event.timestamp - prev_ts).num_seconds();
                if gap > INACTIVITY_GAP_SECS {
                    prev_id + 1
                } else {
                    prev_id
                }
            }
            None => 1,
        };
        last.insert(key, (event.timestamp, session_id));
        marked.push(MarkedEvent { event, session_id });
    }

    marked
}
