//! Task use-case service.

use crate::model::project::ProjectId;
use crate::model::task::{ProjectTask, TaskId};
use crate::repo::project_repo::{RepoError, RepoResult};
use crate::repo::task_repo::TaskRepository;

/// Partial task update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an open task to a project.
    ///
    /// Returns `NotFound(project_id)` when the project does not exist.
    pub fn add_task(&self, project_id: ProjectId, title: &str) -> RepoResult<ProjectTask> {
        let task = ProjectTask::new(project_id, title.trim());
        self.repo.create_task(&task)?;
        Ok(task)
    }

    /// Applies a partial update and returns the stored task.
    pub fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<ProjectTask> {
        let mut task = self.repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;
        if let Some(title) = patch.title.as_deref() {
            task.title = title.trim().to_string();
        }
        if let Some(is_completed) = patch.is_completed {
            task.is_completed = is_completed;
        }
        self.repo.update_task(&task)?;
        Ok(task)
    }

    pub fn set_completed(&self, id: TaskId, is_completed: bool) -> RepoResult<ProjectTask> {
        self.update_task(
            id,
            &TaskPatch {
                title: None,
                is_completed: Some(is_completed),
            },
        )
    }

    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<ProjectTask>> {
        self.repo.get_task(id)
    }

    pub fn list_tasks(&self, project_id: ProjectId) -> RepoResult<Vec<ProjectTask>> {
        self.repo.list_tasks(project_id)
    }

    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }
}
