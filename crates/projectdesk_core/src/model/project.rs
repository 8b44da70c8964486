//! Project domain model.
//!
//! # Invariants
//! - `id` is stable and sufficient to resolve a detail view.
//! - `name` is non-empty after trimming and at most `PROJECT_NAME_MAX_CHARS`.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Maximum project name length in characters.
pub const PROJECT_NAME_MAX_CHARS: usize = 200;

/// A named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Free text; empty when not provided.
    #[serde(default)]
    pub description: String,
    /// Optional icon token rendered by clients.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Project {
    /// Creates a project with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            icon: None,
        }
    }

    /// Creates a project with a caller-provided ID.
    ///
    /// Rejects the nil UUID, since routes key detail views by this value.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            icon: None,
        })
    }

    /// Validates identity and field constraints.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ModelValidationError::EmptyField("name"));
        }
        if name.chars().count() > PROJECT_NAME_MAX_CHARS {
            return Err(ModelValidationError::FieldTooLong {
                field: "name",
                max_chars: PROJECT_NAME_MAX_CHARS,
            });
        }
        Ok(())
    }
}
