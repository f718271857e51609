//! Field schema and record coercion.
//!
//! Sources carry no header row, so the field layout is declared externally
//! and every record is coerced against it. Coercion failures are
//! record-level drops, not pipeline failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::events::{Event, RawRecord};
use crate::limits::{MAX_EPOCH_SECS, MIN_EPOCH_SECS};

/// Value kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form string (high cardinality, e.g. visitor IDs)
    Text,
    /// Low-cardinality string (site/page URLs)
    Category,
    /// Integer epoch seconds, converted to an absolute timestamp
    EpochSeconds,
}

/// A named, typed field in the record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

/// Ordered field layout of the delimited input records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub fields: Vec<FieldDef>,
}

impl FieldSchema {
    /// The base clickstream layout:
    /// `visitor_id, site_url, page_view_url, timestamp`.
    pub fn clickstream() -> Self {
        Self {
            fields: vec![
                FieldDef {
                    name: "visitor_id".to_string(),
                    kind: FieldKind::Text,
                },
                FieldDef {
                    name: "site_url".to_string(),
                    kind: FieldKind::Category,
                },
                FieldDef {
                    name: "page_view_url".to_string(),
                    kind: FieldKind::Category,
                },
                FieldDef {
                    name: "timestamp".to_string(),
                    kind: FieldKind::EpochSeconds,
                },
            ],
        }
    }

    /// Number of fields a conforming record must have.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| Error::schema(format!("required field {name} missing from schema")))
    }

    fn text_field<'a>(&self, record: &'a RawRecord, name: &str) -> Result<&'a str> {
        let value = record.fields[self.index_of(name)?].as_str();
        if value.is_empty() {
            return Err(Error::malformed(format!("empty {name}")));
        }
        Ok(value)
    }

    /// Coerce a raw record into a typed [`Event`].
    ///
    /// Rejects records with the wrong field count, empty required values,
    /// unparseable or out-of-range timestamps, and validator failures.
    pub fn coerce(&self, record: &RawRecord) -> Result<Event> {
        if record.field_count() != self.field_count() {
            return Err(Error::malformed(format!(
                "expected {} fields, got {}",
                self.field_count(),
                record.field_count()
            )));
        }

        let visitor_id = self.text_field(record, "visitor_id")?;
        let site_url = self.text_field(record, "site_url")?;
        let page_view_url = self.text_field(record, "page_view_url")?;
        let raw_ts = self.text_field(record, "timestamp")?;

        let secs: i64 = raw_ts
            .parse()
            .map_err(|_| Error::malformed(format!("timestamp {raw_ts:?} is not epoch seconds")))?;
        if !(MIN_EPOCH_SECS..=MAX_EPOCH_SECS).contains(&secs) {
            return Err(Error::malformed(format!("timestamp {secs} out of range")));
        }
        let timestamp: DateTime<Utc> = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| Error::malformed(format!("timestamp {secs} not representable")))?;

        let event = Event::new(visitor_id, site_url, page_view_url, timestamp);
        event
            .validate()
            .map_err(|e| Error::malformed(format!("{e}")))?;
        Ok(event)
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::clickstream()
    }
}
