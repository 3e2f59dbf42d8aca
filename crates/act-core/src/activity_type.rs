//! Activity type definitions.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A user-defined kind of activity, unique by `(category, name)`.
///
/// Uniqueness is compared on trimmed, lowercased values; the stored fields
/// keep the caller's casing. Construction trims both fields and rejects
/// empty values, and deserialization applies the same rules through the raw
/// mirror type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawActivityType", into = "RawActivityType")]
pub struct ActivityType {
    id: String,
    category: String,
    name: String,
}

impl ActivityType {
    /// Creates a type after trimming and validating all fields.
    pub fn new(
        id: impl Into<String>,
        category: &str,
        name: &str,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::Empty {
                field: "activity category",
            });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "activity name",
            });
        }
        Ok(Self {
            id,
            category: category.to_string(),
            name: name.to_string(),
        })
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

    /// Whether this type collides with the given key under the uniqueness
    /// rule (trimmed, case-insensitive on both fields).
    #[must_use]
    pub fn matches(&self, category: &str, name: &str) -> bool {
        lookup_key(&self.category) == lookup_key(category)
            && lookup_key(&self.name) == lookup_key(name)
    }

    /// Replaces category and name in place, preserving the id.
    pub fn rename(&mut self, category: &str, name: &str) -> Result<(), ValidationError> {
        *self = Self::new(self.id.clone(), category, name)?;
        Ok(())
    }
}

/// Normalized comparison key.
fn lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// On-disk shape of an activity type, with the original wire field names.
#[derive(Serialize, Deserialize)]
struct RawActivityType {
    id: String,
    #[serde(rename = "activity_category")]
    category: String,
    #[serde(rename = "activity_name")]
    name: String,
}

impl TryFrom<RawActivityType> for ActivityType {
    type Error = ValidationError;

    fn try_from(raw: RawActivityType) -> Result<Self, Self::Error> {
        Self::new(raw.id, &raw.category, &raw.name)
    }
}

impl From<ActivityType> for RawActivityType {
    fn from(ty: ActivityType) -> Self {
        Self {
            id: ty.id,
            category: ty.category,
            name: ty.name,
        }
    }
}
