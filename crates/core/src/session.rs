//! Session model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inactivity gap that splits sessions (30 minutes).
///
/// Two consecutive events of one (visitor, site) group belong to the same
/// session iff they are at most this many seconds apart.
pub const INACTIVITY_GAP_SECS: i64 = 30 * 60;

/// An event annotated with its session assignment and the session's
/// derived timing fields.
///
/// `session_start`/`session_end`/`actual_session_length` are denormalized
/// onto every row of the session for query convenience. All fields are
/// computed once per processing pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionizedEvent {
    pub visitor_id: String,
    pub site_url: String,
    pub page_view_url: String,
    pub timestamp: DateTime<Utc>,
    /// Per-(visitor, site) session ordinal, starting at 1
    pub session_id: u64,
    /// Earliest timestamp in the session
    pub session_start: DateTime<Utc>,
    /// Latest timestamp in the session
    pub session_end: DateTime<Utc>,
    /// `session_end - session_start` in whole seconds (0 for a
    /// single-event session)
    pub actual_session_length: i64,
}

impl SessionizedEvent {
    /// Full session identity of this row.
    pub fn session_key(&self) -> (&str, &str, u64) {
        (&self.visitor_id, &self.site_url, self.session_id)
    }
}
