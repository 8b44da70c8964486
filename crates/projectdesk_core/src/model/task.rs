//! Project task domain model.

use super::project::ProjectId;
use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Unit of work owned by one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl ProjectTask {
    /// Creates an open task for `project_id` with a generated ID.
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            title: title.into(),
            is_completed: false,
        }
    }

    /// Validates identity and title.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        if self.project_id.is_nil() {
            return Err(ModelValidationError::NilProjectId);
        }
        if self.title.trim().is_empty() {
            return Err(ModelValidationError::EmptyField("title"));
        }
        Ok(())
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
