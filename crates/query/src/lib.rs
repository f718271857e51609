//! Analytical queries over the sessionized table.
//!
//! All queries are pure reads; none mutate the table. A missing key is an
//! explicit [`NotFound`] sentinel, never conflated with a legitimate
//! zero/empty result.

pub mod queries;
pub mod summary;

pub use queries::{
    median_session_length, most_visited_pages, num_sessions, num_unique_visited_sites,
    session_page_sequence, NotFound, PageCount, PageVisit, QueryResult,
};
pub use summary::{length_distribution, session_id_counts, LengthSummary};
