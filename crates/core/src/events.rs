//! Event type definitions for the sessionizer engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One delimited line from a source, split into untyped string fields.
///
/// No header rows exist in the input; field meaning comes from the
/// externally supplied [`crate::FieldSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Number of fields in this record.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A single clickstream event.
///
/// Immutable once ingested; the pipeline only ever derives new rows from
/// events, it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Event {
    /// Visitor identifier (opaque string, max 128 chars)
    #[validate(length(min = 1, max = 128))]
    pub visitor_id: String,
    /// Site the event belongs to (categorical value, not a parsed URL)
    #[validate(length(min = 1, max = 2048))]
    pub site_url: String,
    /// Page viewed within the site
    #[validate(length(min = 1, max = 2048))]
    pub page_view_url: String,
    /// Event time, converted from epoch seconds at coercion
    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub fn new(
        visitor_id: impl Into<String>,
        site_url: impl Into<String>,
        page_view_url: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            visitor_id: visitor_id.into(),
            site_url: site_url.into(),
            page_view_url: page_view_url.into(),
            timestamp,
        }
    }
}
