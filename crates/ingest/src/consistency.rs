//! Structural-consistency reporting across sources.
//!
//! Advisory only: sources that disagree on field count are still merged;
//! the report exists so the caller can surface the discrepancy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-source field count, reported verbatim on mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFieldCount {
    pub source_id: String,
    pub fields: usize,
}

/// Outcome of the field-count check across all sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyReport {
    /// Every source has the same field count.
    Consistent,
    /// Sources disagree; each listed with its observed count.
    Mismatched(Vec<SourceFieldCount>),
}

impl ConsistencyReport {
    /// Build a report from observed (source id, field count) pairs.
    pub fn check(counts: &[(String, usize)]) -> Self {
        let mut distinct: Vec<usize> = counts.iter().map(|(_, n)| *n).collect();
        distinct.sort_unstable();
        distinct.dedup();

        if distinct.len() <= 1 {
            ConsistencyReport::Consistent
        } else {
            ConsistencyReport::Mismatched(
                counts
                    .iter()
                    .map(|(source_id, fields)| SourceFieldCount {
                        source_id: source_id.clone(),
                        fields: *fields,
                    })
                    .collect(),
            )
        }
    }

    pub fn is_consistent(&self) -> bool {
        matches!(self, ConsistencyReport::Consistent)
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyReport::Consistent => {
                write!(f, "all sources have the same field count")
            }
            ConsistencyReport::Mismatched(counts) => {
                writeln!(f, "sources differ in field count:")?;
                for c in counts {
                    writeln!(f, "{}: {} fields", c.source_id, c.fields)?;
                }
                Ok(())
            }
        }
    }
}
