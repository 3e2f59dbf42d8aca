//! Summarization: closed records rolled into a date×category table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{ActivityRecord, ActivityState};

/// Bucket used for records with no category.
pub const FALLBACK_CATEGORY: &str = "other";

/// Per-day, per-category duration totals in seconds.
///
/// `dates` lists the distinct days ascending; `data` maps each day to its
/// category totals. A day is the UTC calendar date of a record's start
/// time, so an activity spanning midnight counts entirely toward the day it
/// began.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub dates: Vec<NaiveDate>,
    pub data: BTreeMap<NaiveDate, BTreeMap<String, i64>>,
}

/// Rolls closed records into per-day, per-category totals.
///
/// Open records never contribute, not even partially; a closed record always
/// does, even with a zero duration. No side effects; the caller supplies a
/// consistent snapshot (one `list` result).
#[must_use]
pub fn summarize(records: &[ActivityRecord]) -> Summary {
    let mut data: BTreeMap<NaiveDate, BTreeMap<String, i64>> = BTreeMap::new();
    for record in records {
        let ActivityState::Closed(closure) = record.state() else {
            continue;
        };
        let date = record.start_time().date_naive();
        let category = match record.category().trim() {
            "" => FALLBACK_CATEGORY,
            category => category,
        };
        *data
            .entry(date)
            .or_default()
            .entry(category.to_string())
            .or_insert(0) += closure.duration_seconds;
    }
    let dates = data.keys().copied().collect();
    Summary { dates, data }
}
