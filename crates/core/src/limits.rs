//! Field and record limits for the sessionizer engine.
//!
//! The `#[validate]` derive macro requires literal values in attributes,
//! so the length limits are duplicated on `Event`. Keep both in sync when
//! modifying.

/// Visitor identifier max length.
/// UUIDs=36, emails=~50, custom IDs up to 128.
pub const MAX_VISITOR_ID_LEN: usize = 128;

/// Site/page URL max length.
/// Matches common HTTP header limits for URLs.
pub const MAX_URL_LEN: usize = 2048;

/// Maximum fields per delimited record.
///
/// The clickstream schema has 4; anything past this is a corrupt line,
/// not a wide schema, and is dropped at parse time.
pub const MAX_RECORD_FIELDS: usize = 32;

/// Earliest accepted event timestamp (epoch seconds).
///
/// The web did not exist before this; earlier values are coercion noise.
pub const MIN_EPOCH_SECS: i64 = 631_152_000; // 1990-01-01T00:00:00Z

/// Latest accepted event timestamp (epoch seconds).
pub const MAX_EPOCH_SECS: i64 = 4_102_444_800; // 2100-01-01T00:00:00Z
