//! Project list page model.
//!
//! # Responsibility
//! - Replace the held project list whenever the page appears.
//! - Expose busy/error state as explicit transitions:
//!   `Idle -> Loading -> Loaded | Failed`.
//! - Route to the detail view or the creation flow.
//!
//! # Invariants
//! - `is_busy()` is true exactly while a load is outstanding.
//! - Completions carrying a stale `LoadTicket` are dropped.
//! - A failed load keeps the previously loaded projects.

use crate::model::project::{Project, ProjectId};
use crate::page::main_page::PageLifecycle;
use crate::page::navigation::{Navigator, Route};
use crate::repo::project_repo::{ProjectRepository, RepoResult};
use crate::service::project_service::ProjectService;
use log::{debug, warn};

/// Collaborator that fetches the projects shown by the list page.
pub trait ProjectSource {
    fn fetch_projects(&self) -> RepoResult<Vec<Project>>;
}

impl<R: ProjectRepository> ProjectSource for ProjectService<R> {
    fn fetch_projects(&self) -> RepoResult<Vec<Project>> {
        self.list_all_projects()
    }
}

/// Load lifecycle of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Identifies one load started by an appearing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Result of handing a completion to the state container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

/// Source-independent state of the project list page.
#[derive(Debug, Clone)]
pub struct ProjectListState {
    projects: Vec<Project>,
    state: LoadState,
    latest_ticket: u64,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListState {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            state: LoadState::Idle,
            latest_ticket: 0,
        }
    }

    /// Handles the page-appearing event and starts a new load.
    ///
    /// Any outstanding load is superseded by the returned ticket.
    pub fn appearing(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.state = LoadState::Loading;
        debug!(
            "event=project_list_load module=page status=start ticket={}",
            self.latest_ticket
        );
        LoadTicket(self.latest_ticket)
    }

    /// Applies the result of the load identified by `ticket`.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: RepoResult<Vec<Project>>,
    ) -> LoadOutcome {
        if ticket.0 != self.latest_ticket || self.state != LoadState::Loading {
            debug!(
                "event=project_list_load module=page status=stale ticket={} latest={}",
                ticket.0, self.latest_ticket
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(projects) => {
                debug!(
                    "event=project_list_load module=page status=ok ticket={} count={}",
                    ticket.0,
                    projects.len()
                );
                self.projects = projects;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                warn!(
                    "event=project_list_load module=page status=error ticket={} error={}",
                    ticket.0, err
                );
                self.state = LoadState::Failed(err.to_string());
            }
        }
        LoadOutcome::Applied
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a held project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

/// Page model for the project list, bound to a `ProjectSource`.
pub struct ProjectListPageModel<S: ProjectSource> {
    source: S,
    state: ProjectListState,
}

impl<S: ProjectSource> ProjectListPageModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ProjectListState::new(),
        }
    }

    /// Runs one full load cycle against the bound source.
    pub fn refresh(&mut self) -> &LoadState {
        let ticket = self.state.appearing();
        let result = self.source.fetch_projects();
        self.state.complete_load(ticket, result);
        self.state.state()
    }

    /// Opens the detail view of `project`.
    pub fn navigate_to_project(&self, project: &Project, navigator: &mut impl Navigator) {
        navigator.navigate(Route::ProjectDetail(project.id));
    }

    /// Opens the creation flow.
    pub fn add_project(&self, navigator: &mut impl Navigator) {
        navigator.navigate(Route::NewProject);
    }

    pub fn state(&self) -> &ProjectListState {
        &self.state
    }
}

impl<S: ProjectSource> PageLifecycle for ProjectListPageModel<S> {
    fn on_appearing(&mut self) {
        self.refresh();
    }
}
