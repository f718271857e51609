//! The five analytical queries.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sessionizer_core::SessionTable;

/// Not-found sentinel, one variant per key kind.
///
/// Checked in argument order for `session_page_sequence`: visitor, then
/// site, then session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum NotFound {
    #[error("visitor ID not found")]
    Visitor,
    #[error("site URL not found")]
    Site,
    #[error("session ID not found")]
    Session,
}

pub type QueryResult<T> = Result<T, NotFound>;

/// One page with its visit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCount {
    pub page_view_url: String,
    pub count: u64,
}

/// One page view within a session's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVisit {
    pub timestamp: DateTime<Utc>,
    pub page_view_url: String,
}

/// Number of sessions recorded for a site: distinct (visitor_id,
/// session_id) pairs among the site's rows.
pub fn num_sessions(table: &SessionTable, site_url: &str) -> QueryResult<u64> {
    let mut sessions: HashSet<(&str, u64)> = HashSet::new();
    let mut found = false;
    for row in table {
        if row.site_url == site_url {
            found = true;
            sessions.insert((&row.visitor_id, row.session_id));
        }
    }
    if !found {
        return Err(NotFound::Site);
    }
    Ok(sessions.len() as u64)
}

/// Median of `actual_session_length` over the site's distinct sessions.
///
/// Each (visitor, site, session) triple contributes its length once. An
/// even count yields the mean of the two middle values.
pub fn median_session_length(table: &SessionTable, site_url: &str) -> QueryResult<f64> {
    let mut seen: HashSet<(&str, u64)> = HashSet::new();
    let mut lengths: Vec<i64> = Vec::new();
    for row in table {
        if row.site_url == site_url && seen.insert((&row.visitor_id, row.session_id)) {
            lengths.push(row.actual_session_length);
        }
    }
    if lengths.is_empty() {
        return Err(NotFound::Site);
    }

    lengths.sort_unstable();
    let mid = lengths.len() / 2;
    let median = if lengths.len() % 2 == 1 {
        lengths[mid] as f64
    } else {
        (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
    };
    Ok(median)
}

/// Number of distinct sites a visitor appears on.
pub fn num_unique_visited_sites(table: &SessionTable, visitor_id: &str) -> QueryResult<u64> {
    let mut sites: HashSet<&str> = HashSet::new();
    let mut found = false;
    for row in table {
        if row.visitor_id == visitor_id {
            found = true;
            sites.insert(&row.site_url);
        }
    }
    if !found {
        return Err(NotFound::Visitor);
    }
    Ok(sites.len() as u64)
}

/// Top 5 pages of a site by visit count, descending.
///
/// Counts accumulate in first-seen table order and the sort is stable, so
/// equal counts rank in first-encountered order.
pub fn most_visited_pages(table: &SessionTable, site_url: &str) -> QueryResult<Vec<PageCount>> {
    let mut order: Vec<PageCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for row in table {
        if row.site_url != site_url {
            continue;
        }
        match index.get(row.page_view_url.as_str()) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(&row.page_view_url, order.len());
                order.push(PageCount {
                    page_view_url: row.page_view_url.clone(),
                    count: 1,
                });
            }
        }
    }
    if order.is_empty() {
        return Err(NotFound::Site);
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(5);
    Ok(order)
}

/// Ordered (timestamp, page) sequence of one session.
///
/// Existence checks run in argument order against the whole table:
/// unknown visitor, then unknown site, then no row matching all three
/// keys.
pub fn session_page_sequence(
    table: &SessionTable,
    visitor_id: &str,
    site_url: &str,
    session_id: u64,
) -> QueryResult<Vec<PageVisit>> {
    if !table.has_visitor(visitor_id) {
        return Err(NotFound::Visitor);
    }
    if !table.has_site(site_url) {
        return Err(NotFound::Site);
    }

    let mut visits: Vec<PageVisit> = table
        .iter()
        .filter(|r| {
            r.visitor_id == visitor_id && r.site_url == site_url && r.session_id == session_id
        })
        .map(|r| PageVisit {
            timestamp: r.timestamp,
            page_view_url: r.page_view_url.clone(),
        })
        .collect();
    if visits.is_empty() {
        return Err(NotFound::Session);
    }

    visits.sort_by_key(|v| v.timestamp);
    Ok(visits)
}
