//! UTC timestamp helpers at second precision.
//!
//! All stored timestamps are UTC, truncated to whole seconds, and rendered
//! in RFC 3339 with a trailing `Z` (e.g. `2025-11-03T10:00:00Z`) so that
//! lexicographic ordering matches chronological ordering and parsing is
//! unambiguous across implementations.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// Returns the current UTC time truncated to whole seconds.
#[must_use]
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Drops the sub-second component of a timestamp.
#[must_use]
pub fn truncate(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

/// Formats a timestamp as RFC 3339 UTC at second precision.
#[must_use]
pub fn format(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses an RFC 3339 timestamp, normalizing any offset to UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|parsed| parsed.with_timezone(&Utc))
}
