//! The materialized sessionized table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::SessionizedEvent;

/// The fully processed event set with session ids and derived timing
/// fields attached.
///
/// Rebuilt whole on every processing pass and never mutated afterward, so
/// shared references need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTable {
    rows: Vec<SessionizedEvent>,
}

impl SessionTable {
    pub fn new(rows: Vec<SessionizedEvent>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SessionizedEvent] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionizedEvent> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct (visitor, site, session) triples in the table.
    pub fn distinct_sessions(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.session_key())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Whether any row belongs to this site.
    pub fn has_site(&self, site_url: &str) -> bool {
        self.rows.iter().any(|r| r.site_url == site_url)
    }

    /// Whether any row belongs to this visitor.
    pub fn has_visitor(&self, visitor_id: &str) -> bool {
        self.rows.iter().any(|r| r.visitor_id == visitor_id)
    }
}

impl<'a> IntoIterator for &'a SessionTable {
    type Item = &'a SessionizedEvent;
    type IntoIter = std::slice::Iter<'a, SessionizedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
