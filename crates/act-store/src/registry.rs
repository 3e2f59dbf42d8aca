//! CRUD over uniquely-named activity type definitions.

use std::path::Path;

use act_core::{ActivityType, ValidationError};
use thiserror::Error;

use crate::document::{Document, StoreError};
use crate::fresh_id;

/// Registry failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Another type already uses the same category and name.
    #[error("activity type {category}/{name} already exists")]
    Duplicate { category: String, name: String },
    /// No type with the given id.
    #[error("activity type {id} not found")]
    NotFound { id: String },
    /// Category or name failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The backing document could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD over the activity type collection.
///
/// Every operation holds the collection lock for its whole body, so the
/// duplicate scan and the write it guards cannot interleave with another
/// caller's cycle.
#[derive(Debug)]
pub struct TypeRegistry {
    document: Document<ActivityType>,
}

impl TypeRegistry {
    pub(crate) fn new(document: Document<ActivityType>) -> Self {
        Self { document }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        self.document.path()
    }

    /// Returns all types in insertion order.
    pub fn list(&self) -> Result<Vec<ActivityType>, RegistryError> {
        Ok(self.document.lock().load()?)
    }

    /// Adds a new type unless `(category, name)` already exists.
    pub fn create(&self, category: &str, name: &str) -> Result<ActivityType, RegistryError> {
        let guard = self.document.lock();
        let mut types = guard.load()?;
        let created = ActivityType::new(fresh_id(), category, name)?;
        if types.iter().any(|ty| ty.matches(category, name)) {
            return Err(RegistryError::Duplicate {
                category: created.category().to_string(),
                name: created.name().to_string(),
            });
        }
        types.push(created.clone());
        guard.replace(&types)?;
        tracing::debug!(id = created.id(), "activity type created");
        Ok(created)
    }

    /// Renames an existing type in place, keeping its id.
    ///
    /// The duplicate scan excludes the type being updated, so re-saving a
    /// type under its own key (in any casing) succeeds.
    pub fn update(
        &self,
        id: &str,
        category: &str,
        name: &str,
    ) -> Result<ActivityType, RegistryError> {
        let guard = self.document.lock();
        let mut types = guard.load()?;
        let position = types
            .iter()
            .position(|ty| ty.id() == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })?;
        let mut updated = types[position].clone();
        updated.rename(category, name)?;
        let collides = types
            .iter()
            .enumerate()
            .any(|(index, ty)| index != position && ty.matches(category, name));
        if collides {
            return Err(RegistryError::Duplicate {
                category: updated.category().to_string(),
                name: updated.name().to_string(),
            });
        }
        types[position] = updated.clone();
        guard.replace(&types)?;
        tracing::debug!(id = updated.id(), "activity type updated");
        Ok(updated)
    }

    /// Removes a type by id.
    pub fn delete(&self, id: &str) -> Result<(), RegistryError> {
        let guard = self.document.lock();
        let mut types = guard.load()?;
        let before = types.len();
        types.retain(|ty| ty.id() != id);
        if types.len() == before {
            return Err(RegistryError::NotFound { id: id.to_string() });
        }
        guard.replace(&types)?;
        tracing::debug!(id, "activity type deleted");
        Ok(())
    }
}
