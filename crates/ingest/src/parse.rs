//! Delimited-record parsing.

use tracing::debug;

use sessionizer_core::limits::MAX_RECORD_FIELDS;
use sessionizer_core::{RawRecord, Result};

use crate::source::Source;

/// All records parsed from one source.
#[derive(Debug, Clone)]
pub struct RawBatch {
    pub source_id: String,
    pub records: Vec<RawRecord>,
}

/// Split raw text into records: one per non-empty line, fields split on
/// the delimiter and trimmed. Lines with an absurd field count are
/// dropped here rather than carried to coercion.
pub fn parse_text(text: &str, delimiter: char) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split(delimiter).map(|f| f.trim().to_string()).collect();
        if fields.len() > MAX_RECORD_FIELDS {
            debug!(fields = fields.len(), "dropping corrupt line");
            continue;
        }
        records.push(RawRecord::new(fields));
    }
    records
}

/// Field count of a batch: the first record's count, 0 for an empty batch.
pub fn field_count(records: &[RawRecord]) -> usize {
    records.first().map(RawRecord::field_count).unwrap_or(0)
}

/// Read and parse one source.
pub fn parse_source(source: &dyn Source, delimiter: char) -> Result<RawBatch> {
    let text = source.read()?;
    Ok(RawBatch {
        source_id: source.id().to_string(),
        records: parse_text(&text, delimiter),
    })
}
