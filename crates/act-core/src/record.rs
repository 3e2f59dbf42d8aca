//! Activity records and their open/closed lifecycle state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ValidationError, timestamp};

/// Error returned when closing a record that is already closed.
///
/// Closed is terminal; a record is never reopened.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("record is already closed")]
pub struct AlreadyClosed;

/// A closed record's end marker: end time and derived duration.
///
/// The two values exist only together; an open record has neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closure {
    /// When the activity ended (UTC, whole seconds).
    pub end_time: DateTime<Utc>,
    /// Whole seconds between start and end, never negative.
    pub duration_seconds: i64,
}

/// Lifecycle state of an activity record.
///
/// `Open -> Closed` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Open,
    Closed(Closure),
}

/// One tracked activity.
///
/// Serialization goes through [`RawActivityRecord`], which uses the original
/// wire field names and writes explicit nulls for the end marker of an open
/// record. Deserialization rejects a half-present end marker and a negative
/// duration, so the pair invariant holds for every record in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawActivityRecord", into = "RawActivityRecord")]
pub struct ActivityRecord {
    id: String,
    category: String,
    name: String,
    start_time: DateTime<Utc>,
    state: ActivityState,
}

impl ActivityRecord {
    /// Creates a fresh open record with a whole-second start time.
    ///
    /// Category and name are trimmed but may be empty; the summary buckets
    /// empty categories under [`crate::FALLBACK_CATEGORY`].
    pub fn started(
        id: impl Into<String>,
        category: &str,
        name: &str,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.trim().to_string(),
            name: name.trim().to_string(),
            start_time: timestamp::truncate(start_time),
            state: ActivityState::Open,
        }
    }

    /// Opaque unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the activity started (UTC, whole seconds).
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn state(&self) -> ActivityState {
        self.state
    }

    /// The end marker, if the record is closed.
    pub fn closure(&self) -> Option<Closure> {
        match self.state {
            ActivityState::Open => None,
            ActivityState::Closed(closure) => Some(closure),
        }
    }

    /// Whether the record is still in progress.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ActivityState::Open)
    }

    /// Closes the record, deriving the duration in whole seconds.
    ///
    /// An end time earlier than the start time is clamped to the start time,
    /// so the duration invariant holds even if the clock stepped backwards
    /// between the two calls.
    pub fn close(&mut self, end_time: DateTime<Utc>) -> Result<Closure, AlreadyClosed> {
        if let ActivityState::Closed(_) = self.state {
            return Err(AlreadyClosed);
        }
        let end_time = timestamp::truncate(end_time).max(self.start_time);
        let closure = Closure {
            end_time,
            duration_seconds: end_time.signed_duration_since(self.start_time).num_seconds(),
        };
        self.state = ActivityState::Closed(closure);
        Ok(closure)
    }
}

/// On-disk shape of an activity record.
///
/// Timestamps are stored as strings so the document format stays exactly
/// second-precision RFC 3339 with a `Z` suffix.
#[derive(Serialize, Deserialize)]
struct RawActivityRecord {
    id: String,
    #[serde(rename = "activity_category")]
    category: String,
    #[serde(rename = "activity_name")]
    name: String,
    start_time: String,
    end_time: Option<String>,
    duration_seconds: Option<i64>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    timestamp::parse(value).map_err(|source| ValidationError::Timestamp {
        value: value.to_string(),
        source,
    })
}

impl TryFrom<RawActivityRecord> for ActivityRecord {
    type Error = ValidationError;

    fn try_from(raw: RawActivityRecord) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        let start_time = parse_timestamp(&raw.start_time)?;
        let state = match (raw.end_time, raw.duration_seconds) {
            (None, None) => ActivityState::Open,
            (Some(end_time), Some(duration_seconds)) => {
                if duration_seconds < 0 {
                    return Err(ValidationError::NegativeDuration {
                        value: duration_seconds,
                    });
                }
                ActivityState::Closed(Closure {
                    end_time: parse_timestamp(&end_time)?,
                    duration_seconds,
                })
            }
            _ => return Err(ValidationError::HalfClosed),
        };
        Ok(Self {
            id: raw.id,
            category: raw.category,
            name: raw.name,
            start_time,
            state,
        })
    }
}

impl From<ActivityRecord> for RawActivityRecord {
    fn from(record: ActivityRecord) -> Self {
        let (end_time, duration_seconds) = match record.state {
            ActivityState::Open => (None, None),
            ActivityState::Closed(closure) => (
                Some(timestamp::format(closure.end_time)),
                Some(closure.duration_seconds),
            ),
        };
        Self {
            id: record.id,
            category: record.category,
            name: record.name,
            start_time: timestamp::format(record.start_time),
            end_time,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> DateTime<Utc> {
        timestamp::parse(value).unwrap()
    }

    #[test]
    fn started_trims_and_truncates() {
        let with_nanos = ts("2025-11-03T10:00:00Z") + chrono::Duration::milliseconds(750);
        let record = ActivityRecord::started("rec-1", " Sports ", " Run ", with_nanos);
        assert_eq!(record.category(), "Sports");
        assert_eq!(record.name(), "Run");
        assert_eq!(record.start_time(), ts("2025-11-03T10:00:00Z"));
        assert!(record.is_open());
    }

    #[test]
    fn close_derives_whole_second_duration() {
        let mut record = ActivityRecord::started("rec-1", "sports", "run", ts("2025-11-03T10:00:00Z"));
        let closure = record.close(ts("2025-11-03T11:30:00Z")).unwrap();
        assert_eq!(closure.duration_seconds, 5400);
        assert_eq!(closure.end_time, ts("2025-11-03T11:30:00Z"));
        assert!(!record.is_open());
    }

    #[test]
    fn close_twice_is_rejected() {
        let mut record = ActivityRecord::started("rec-1", "sports", "run", ts("2025-11-03T10:00:00Z"));
        record.close(ts("2025-11-03T10:05:00Z")).unwrap();
        let before = record.clone();
        assert_eq!(record.close(ts("2025-11-03T11:00:00Z")), Err(AlreadyClosed));
        assert_eq!(record, before);
    }

    #[test]
    fn close_clamps_backwards_clock() {
        let mut record = ActivityRecord::started("rec-1", "sports", "run", ts("2025-11-03T10:00:00Z"));
        let closure = record.close(ts("2025-11-03T09:59:00Z")).unwrap();
        assert_eq!(closure.end_time, ts("2025-11-03T10:00:00Z"));
        assert_eq!(closure.duration_seconds, 0);
    }

    #[test]
    fn open_record_serializes_with_nulls() {
        let record = ActivityRecord::started("rec-1", "sports", "run", ts("2025-11-03T10:00:00Z"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "rec-1",
                "activity_category": "sports",
                "activity_name": "run",
                "start_time": "2025-11-03T10:00:00Z",
                "end_time": null,
                "duration_seconds": null,
            })
        );
    }

    #[test]
    fn closed_record_roundtrips() {
        let mut record = ActivityRecord::started("rec-1", "sports", "run", ts("2025-11-03T10:00:00Z"));
        record.close(ts("2025-11-03T12:00:00Z")).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ActivityRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn deserialization_rejects_half_present_pair() {
        let json = serde_json::json!({
            "id": "rec-1",
            "activity_category": "sports",
            "activity_name": "run",
            "start_time": "2025-11-03T10:00:00Z",
            "end_time": "2025-11-03T11:00:00Z",
            "duration_seconds": null,
        });
        let result: Result<ActivityRecord, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_negative_duration() {
        let json = serde_json::json!({
            "id": "rec-1",
            "activity_category": "sports",
            "activity_name": "run",
            "start_time": "2025-11-03T10:00:00Z",
            "end_time": "2025-11-03T09:00:00Z",
            "duration_seconds": -3600,
        });
        let result: Result<ActivityRecord, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_bad_timestamp() {
        let json = serde_json::json!({
            "id": "rec-1",
            "activity_category": "sports",
            "activity_name": "run",
            "start_time": "last tuesday",
            "end_time": null,
            "duration_seconds": null,
        });
        let result: Result<ActivityRecord, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
