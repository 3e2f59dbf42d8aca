//! Whole-document JSON persistence with per-collection locking.
//!
//! Each [`Document`] owns one on-disk JSON array and the mutex that
//! serializes access to it. Callers lock once and perform a full
//! read-modify-write cycle through the returned guard, so no two cycles for
//! the same collection overlap and a reader never observes a partial write.
//! Documents for different collections are independent; their locks are
//! never held together.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage failures that reach the caller.
///
/// Deserialization failures are deliberately absent: a document that fails
/// to parse is backed up and treated as empty (see [`DocumentGuard::load`]).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the canonical document failed (other than it not existing).
    #[error("failed to read document {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing or renaming the replacement document failed.
    #[error("failed to write document {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Serializing the new sequence failed.
    #[error("failed to serialize document {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Creating the store directory failed.
    #[error("failed to create store directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One persisted collection: a JSON array of `T` at a fixed path.
#[derive(Debug)]
pub struct Document<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Document<T> {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Path of the canonical on-disk document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquires the collection lock for one read-modify-write cycle.
    ///
    /// A poisoned lock is recovered: the authoritative state lives on disk,
    /// so a panicking holder cannot leave it inconsistent.
    pub fn lock(&self) -> DocumentGuard<'_, T> {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        DocumentGuard {
            document: self,
            _guard: guard,
        }
    }
}

/// Exclusive access to one collection for the guard's lifetime.
pub struct DocumentGuard<'a, T> {
    document: &'a Document<T>,
    _guard: MutexGuard<'a, ()>,
}

impl<T> DocumentGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the full sequence.
    ///
    /// A missing document is the collection's initial state and yields an
    /// empty sequence. An unparseable document is moved to a `.bak` sibling
    /// (best-effort) and also yields an empty sequence; corruption never
    /// blocks progress.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let path = self.document.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(error) => {
                let backup = sibling(path, ".bak");
                tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    %error,
                    "document is unreadable, moving it aside and starting empty"
                );
                if let Err(error) = fs::rename(path, &backup) {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "failed to back up unreadable document"
                    );
                }
                Ok(Vec::new())
            }
        }
    }

    /// Atomically replaces the full sequence.
    ///
    /// The new sequence is written to a `.tmp` sibling and renamed over the
    /// canonical path, so a crash mid-write leaves the previous document
    /// intact. An orphaned `.tmp` file is overwritten by the next replace.
    pub fn replace(&self, records: &[T]) -> Result<(), StoreError> {
        let path = self.document.path();
        let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        let staging = sibling(path, ".tmp");
        fs::write(&staging, json).map_err(|source| StoreError::Write {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, path).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Appends a suffix to the full file name
/// (`activities.json` -> `activities.json.bak`).
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
