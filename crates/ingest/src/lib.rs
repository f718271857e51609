//! Source loading for the sessionizer engine.
//!
//! Turns a collection of delimited text sources into typed events:
//! 1. Field-count pre-check across all sources (advisory consistency
//!    report; an unreadable source here fails the whole load)
//! 2. Load pass (per-source parse + schema coercion; unreadable sources
//!    are skipped, malformed records dropped)
//!
//! Enumerating sources (directory walking, globbing) belongs to the
//! caller; this crate starts at "here are the sources".

pub mod config;
pub mod consistency;
pub mod load;
pub mod parse;
pub mod source;

pub use config::LoadConfig;
pub use consistency::{ConsistencyReport, SourceFieldCount};
pub use load::{load, LoadOutcome};
pub use parse::{field_count, parse_source, parse_text, RawBatch};
pub use source::{FileSource, MemorySource, Source};
