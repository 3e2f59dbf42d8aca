//! Storage layer for the activity tracker.
//!
//! Persists the two record collections (activity type definitions and
//! activity records) as whole JSON documents, one file per collection, and
//! hosts the stateful engines built on top of them.
//!
//! # Thread Safety
//!
//! [`Store`] is `Send + Sync`. Each collection is guarded by its own mutex,
//! held for a full read-modify-write cycle, so operations on one collection
//! are strictly serialized while operations on different collections
//! interleave freely. The two locks are never held at the same time.
//!
//! # Durability
//!
//! Every mutation rewrites its collection through a temp-file-then-rename
//! sequence, so a crash mid-write leaves the previous document intact. A
//! document that no longer parses is moved to a `.bak` sibling and treated
//! as empty rather than blocking progress.

mod document;
mod log;
mod registry;

pub use document::{Document, DocumentGuard, StoreError};
pub use log::{ActivityLog, LifecycleError};
pub use registry::{RegistryError, TypeRegistry};

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

const TYPES_DOCUMENT: &str = "activity_types.json";
const ACTIVITIES_DOCUMENT: &str = "activities.json";

/// The two persisted collections under one base directory.
#[derive(Debug)]
pub struct Store {
    types: TypeRegistry,
    activities: ActivityLog,
}

impl Store {
    /// Opens a store rooted at the given directory, creating it if necessary.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|source| StoreError::CreateDir {
            path: base_dir.clone(),
            source,
        })?;
        Ok(Self {
            types: TypeRegistry::new(Document::new(base_dir.join(TYPES_DOCUMENT))),
            activities: ActivityLog::new(Document::new(base_dir.join(ACTIVITIES_DOCUMENT))),
        })
    }

    /// The activity type registry.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The activity lifecycle engine.
    pub fn activities(&self) -> &ActivityLog {
        &self.activities
    }
}

/// Fresh opaque record id.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
