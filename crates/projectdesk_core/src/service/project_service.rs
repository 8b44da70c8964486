//! Project use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Paged list limits are normalized: default 50, clamped to 200.
//! - `list_all_projects` is unpaged.

use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::{ProjectListQuery, ProjectRepository, RepoError, RepoResult};

pub const PROJECT_LIST_DEFAULT_LIMIT: u32 = 50;
pub const PROJECT_LIST_LIMIT_MAX: u32 = 200;

/// Caller-provided project fields for create and full update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ProjectDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn apply_to(&self, project: &mut Project) {
        project.name = self.name.trim().to_string();
        project.description = self
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        project.icon = self
            .icon
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
    }
}

/// Use-case service wrapper for project CRUD.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a project and returns the stored record.
    pub fn create_project(&self, draft: &ProjectDraft) -> RepoResult<Project> {
        let mut project = Project::new(String::new());
        draft.apply_to(&mut project);
        self.repo.create_project(&project)?;
        Ok(project)
    }

    /// Replaces all editable fields of an existing project.
    pub fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> RepoResult<Project> {
        let mut project = self.repo.get_project(id)?.ok_or(RepoError::NotFound(id))?;
        draft.apply_to(&mut project);
        self.repo.update_project(&project)?;
        Ok(project)
    }

    pub fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        self.repo.get_project(id)
    }

    /// Lists projects by name with normalized pagination.
    pub fn list_projects(&self, limit: Option<u32>, offset: u32) -> RepoResult<Vec<Project>> {
        let query = ProjectListQuery {
            limit: Some(normalize_project_limit(limit)),
            offset,
        };
        self.repo.list_projects(&query)
    }

    /// Lists every stored project by name, without pagination.
    pub fn list_all_projects(&self) -> RepoResult<Vec<Project>> {
        self.repo.list_projects(&ProjectListQuery {
            limit: None,
            offset: 0,
        })
    }

    /// Deletes a project together with its tasks.
    pub fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        self.repo.delete_project(id)
    }
}

/// Normalizes a caller-provided list limit.
pub fn normalize_project_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => PROJECT_LIST_DEFAULT_LIMIT,
        Some(value) if value > PROJECT_LIST_LIMIT_MAX => PROJECT_LIST_LIMIT_MAX,
        Some(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_project_limit, PROJECT_LIST_DEFAULT_LIMIT, PROJECT_LIST_LIMIT_MAX};

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(normalize_project_limit(None), PROJECT_LIST_DEFAULT_LIMIT);
        assert_eq!(normalize_project_limit(Some(0)), PROJECT_LIST_DEFAULT_LIMIT);
        assert_eq!(normalize_project_limit(Some(7)), 7);
        assert_eq!(normalize_project_limit(Some(10_000)), PROJECT_LIST_LIMIT_MAX);
    }
}
