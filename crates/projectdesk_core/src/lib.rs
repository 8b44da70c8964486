//! Core domain logic for ProjectDesk.
//! This crate is the single source of truth for business invariants shared
//! by the HTTP API, the mobile bridge and the CLI.

pub mod db;
pub mod facility;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;

pub use facility::context::{
    try_use_facility, use_facility, FacilityContext, FacilityContextError, FacilityProvider,
    FacilitySource, MockFacilitySource,
};
pub use facility::format::{
    facility_theme, format_facility_address, format_facility_contact, FacilityTheme,
    FormattedAddress, FormattedContact,
};
pub use logging::{
    default_log_level, init_logging, init_logging_with_sink, init_stderr_logging, logging_status,
    LogSink,
};
pub use model::facility::{
    mock_facility, Facility, FacilityAddress, FacilityContact, FacilitySettings,
};
pub use model::project::{Project, ProjectId};
pub use model::task::{ProjectTask, TaskId};
pub use model::ModelValidationError;
pub use page::main_page::{MainPage, PageLifecycle};
pub use page::navigation::{parse_route, Navigator, Route, RouteParseError};
pub use page::project_list::{
    LoadOutcome, LoadState, LoadTicket, ProjectListPageModel, ProjectListState, ProjectSource,
};
pub use repo::project_repo::{
    ProjectListQuery, ProjectRepository, RepoError, RepoResult, SqliteProjectRepository,
};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use service::project_service::{ProjectDraft, ProjectService};
pub use service::task_service::{TaskPatch, TaskService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
