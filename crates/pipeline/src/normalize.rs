//! Event normalization: duplicate dropping and total ordering.

use sessionizer_core::Event;
use telemetry::metrics;
use tracing::debug;

/// Normalize the merged event set: drop exact-duplicate rows and sort
/// ascending, stable, by (timestamp, visitor_id, site_url, page_view_url).
///
/// The sort key is total over all four fields, so equal rows end up
/// adjacent and output order never depends on source order.
pub fn normalize(mut events: Vec<Event>) -> Vec<Event> {
    let before = events.len();

    events.sort_by(|a, b| {
        (a.timestamp, &a.visitor_id, &a.site_url, &a.page_view_url).cmp(&(
            b.timestamp,
            &b.visitor_id,
            &b.site_url,
            &b.page_view_url,
        ))
    });
    events.dedup();

    let removed = (before - events.len()) as u64;
    if removed > 0 {
        debug!(removed, "removed duplicate rows");
    }
    metrics().duplicates_removed.inc_by(removed);
    events
}
