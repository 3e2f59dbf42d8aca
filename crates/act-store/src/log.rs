//! The activity lifecycle engine.
//!
//! A record moves `open -> closed` exactly once, and the collection holds at
//! most one open record at any point. Both rules are enforced here, under
//! the activities document lock.

use std::path::Path;

use act_core::record::ActivityRecord;
use act_core::timestamp;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::document::{Document, StoreError};
use crate::fresh_id;

/// Lifecycle failures.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Another activity is still open.
    #[error("activity {id} is already in progress")]
    AlreadyRunning { id: String },
    /// The record was closed before.
    #[error("activity {id} has already ended")]
    AlreadyEnded { id: String },
    /// No record with the given id.
    #[error("activity {id} not found")]
    NotFound { id: String },
    /// The backing document could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Start/end state machine over the activity record collection.
#[derive(Debug)]
pub struct ActivityLog {
    document: Document<ActivityRecord>,
}

impl ActivityLog {
    pub(crate) fn new(document: Document<ActivityRecord>) -> Self {
        Self { document }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        self.document.path()
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> Result<Vec<ActivityRecord>, LifecycleError> {
        Ok(self.document.lock().load()?)
    }

    /// Returns the open record, if any.
    pub fn active(&self) -> Result<Option<ActivityRecord>, LifecycleError> {
        let records = self.document.lock().load()?;
        Ok(records.into_iter().find(ActivityRecord::is_open))
    }

    /// Starts a new activity unless one is already open.
    pub fn start(&self, category: &str, name: &str) -> Result<ActivityRecord, LifecycleError> {
        self.start_at(category, name, timestamp::now())
    }

    /// [`start`](Self::start) with an explicit clock, for deterministic tests.
    pub fn start_at(
        &self,
        category: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<ActivityRecord, LifecycleError> {
        let guard = self.document.lock();
        let mut records = guard.load()?;
        if let Some(open) = records.iter().find(|record| record.is_open()) {
            return Err(LifecycleError::AlreadyRunning {
                id: open.id().to_string(),
            });
        }
        let record = ActivityRecord::started(fresh_id(), category, name, now);
        records.push(record.clone());
        guard.replace(&records)?;
        tracing::debug!(id = record.id(), "activity started");
        Ok(record)
    }

    /// Ends the open activity with the given id.
    pub fn end(&self, id: &str) -> Result<ActivityRecord, LifecycleError> {
        self.end_at(id, timestamp::now())
    }

    /// [`end`](Self::end) with an explicit clock, for deterministic tests.
    pub fn end_at(&self, id: &str, now: DateTime<Utc>) -> Result<ActivityRecord, LifecycleError> {
        let guard = self.document.lock();
        let mut records = guard.load()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| LifecycleError::NotFound { id: id.to_string() })?;
        record
            .close(now)
            .map_err(|_| LifecycleError::AlreadyEnded { id: id.to_string() })?;
        let updated = record.clone();
        guard.replace(&records)?;
        tracing::debug!(id = updated.id(), "activity ended");
        Ok(updated)
    }
}
