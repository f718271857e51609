//! Read-only distribution summaries for the presentation layer.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use sessionizer_core::SessionTable;

/// Distribution of `actual_session_length` over distinct sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthSummary {
    /// Distinct sessions in the table
    pub sessions: u64,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: f64,
}

impl LengthSummary {
    fn empty() -> Self {
        Self {
            sessions: 0,
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
        }
    }
}

/// Summarize session lengths across the whole table, one sample per
/// distinct (visitor, site, session) triple.
pub fn length_distribution(table: &SessionTable) -> LengthSummary {
    let mut seen: HashSet<(&str, &str, u64)> = HashSet::new();
    let mut lengths: Vec<i64> = Vec::new();
    for row in table {
        if seen.insert(row.session_key()) {
            lengths.push(row.actual_session_length);
        }
    }
    if lengths.is_empty() {
        return LengthSummary::empty();
    }

    lengths.sort_unstable();
    let n = lengths.len();
    let sum: i64 = lengths.iter().sum();
    let median = if n % 2 == 1 {
        lengths[n / 2] as f64
    } else {
        (lengths[n / 2 - 1] + lengths[n / 2]) as f64 / 2.0
    };

    LengthSummary {
        sessions: n as u64,
        min: lengths[0],
        max: lengths[n - 1],
        mean: sum as f64 / n as f64,
        median,
    }
}

/// Row count per session_id value, ascending by session_id.
///
/// Feeds the sessions-distribution view: how many rows carry session 1,
/// session 2, and so on across all groups.
pub fn session_id_counts(table: &SessionTable) -> Vec<(u64, u64)> {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for row in table {
        *counts.entry(row.session_id).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
