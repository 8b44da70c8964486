//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the project list page model and project/task commands to Dart.
//! - Keep error semantics simple for UI integration: `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The project list lock is never held while the database is queried.

use log::warn;
use projectdesk_core::db::open_db;
use projectdesk_core::{
    core_version as core_version_inner, facility_theme, format_facility_address,
    format_facility_contact, init_logging as init_logging_inner, ping as ping_inner,
    FacilityProvider, LoadState, Navigator, Project, ProjectDraft, ProjectListState,
    ProjectService, ProjectSource, RepoResult, Route, SqliteProjectRepository,
    SqliteTaskRepository, TaskService,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const MOBILE_DB_FILE_NAME: &str = "projectdesk_mobile.sqlite3";
static MOBILE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static PROJECT_LIST: OnceLock<Mutex<ProjectListState>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

impl From<&Project> for ProjectItem {
    fn from(value: &Project) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            description: value.description.clone(),
            icon: value.icon.clone(),
        }
    }
}

/// Snapshot of the project list page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListView {
    /// One of `idle|loading|loaded|failed`.
    pub state: String,
    pub is_busy: bool,
    pub error: Option<String>,
    pub items: Vec<ProjectItem>,
}

impl From<&ProjectListState> for ProjectListView {
    fn from(value: &ProjectListState) -> Self {
        let state = match value.state() {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed(_) => "failed",
        };
        Self {
            state: state.to_string(),
            is_busy: value.is_busy(),
            error: value.error().map(str::to_string),
            items: value.projects().iter().map(ProjectItem::from).collect(),
        }
    }
}

/// Navigation command result; `route` is a shell URI such as `project?id=...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResponse {
    pub ok: bool,
    pub route: Option<String>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created or updated record id.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Facility display strings for the branding header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityViewResponse {
    pub name: String,
    pub address_full: String,
    pub address_short: String,
    pub phone: String,
    pub email_link: String,
    pub website_link: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub theme: String,
}

/// Handles the list page's appearing event: reloads projects from storage.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - A load superseded by a newer appearing event does not overwrite it.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list_appearing() -> ProjectListView {
    let ticket = lock_project_list().appearing();
    let result = with_connection(|conn| {
        ProjectService::new(SqliteProjectRepository::new(conn)).fetch_projects()
    });

    let mut state = lock_project_list();
    state.complete_load(ticket, result);
    ProjectListView::from(&*state)
}

/// Returns the current list snapshot without reloading.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list_state() -> ProjectListView {
    ProjectListView::from(&*lock_project_list())
}

/// Navigation command for tapping a project row.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list_select(project_id: String) -> NavigationResponse {
    let Ok(id) = Uuid::parse_str(project_id.trim()) else {
        return navigation_failure(format!("invalid project id: {project_id}"));
    };

    let state = lock_project_list();
    match state.project(id) {
        Some(project) => {
            let mut navigator = CapturedRoute::default();
            navigator.navigate(Route::ProjectDetail(project.id));
            navigator.into_response()
        }
        None => navigation_failure(format!("project not in list: {id}")),
    }
}

/// Navigation command for the add-project button.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list_add() -> NavigationResponse {
    let mut navigator = CapturedRoute::default();
    navigator.navigate(Route::NewProject);
    navigator.into_response()
}

/// Creates a project from the creation flow.
#[flutter_rust_bridge::frb(sync)]
pub fn project_create(name: String, description: Option<String>) -> ActionResponse {
    let draft = ProjectDraft {
        name,
        description,
        icon: None,
    };
    let result = with_connection(|conn| {
        ProjectService::new(SqliteProjectRepository::new(conn)).create_project(&draft)
    });
    match result {
        Ok(project) => ActionResponse::success("Project created.", project.id.to_string()),
        Err(err) => ActionResponse::failure(format!("project_create failed: {err}")),
    }
}

/// Adds a task to a project.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(project_id: String, title: String) -> ActionResponse {
    let Ok(project_id) = Uuid::parse_str(project_id.trim()) else {
        return ActionResponse::failure(format!("invalid project id: {project_id}"));
    };
    let result = with_connection(|conn| {
        TaskService::new(SqliteTaskRepository::new(conn)).add_task(project_id, &title)
    });
    match result {
        Ok(task) => ActionResponse::success("Task created.", task.id.to_string()),
        Err(err) => ActionResponse::failure(format!("task_create failed: {err}")),
    }
}

/// Marks a task completed or open.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_completed(task_id: String, is_completed: bool) -> ActionResponse {
    let Ok(task_id) = Uuid::parse_str(task_id.trim()) else {
        return ActionResponse::failure(format!("invalid task id: {task_id}"));
    };
    let result = with_connection(|conn| {
        TaskService::new(SqliteTaskRepository::new(conn)).set_completed(task_id, is_completed)
    });
    match result {
        Ok(task) => ActionResponse::success("Task updated.", task.id.to_string()),
        Err(err) => ActionResponse::failure(format!("task_set_completed failed: {err}")),
    }
}

/// Returns branding strings derived from the mock facility.
#[flutter_rust_bridge::frb(sync)]
pub fn facility_view() -> Option<FacilityViewResponse> {
    FacilityProvider::mock().scope(|context| {
        let facility = context.facility.as_ref()?;
        let address = format_facility_address(facility);
        let contact = format_facility_contact(facility);
        let theme = facility_theme(facility);
        Some(FacilityViewResponse {
            name: facility.name.clone(),
            address_full: address.full,
            address_short: address.short,
            phone: contact.phone,
            email_link: contact.email_link,
            website_link: contact.website_link,
            primary_color: theme.primary_color,
            secondary_color: theme.secondary_color,
            theme: theme.theme,
        })
    })
}

#[derive(Default)]
struct CapturedRoute(Option<Route>);

impl Navigator for CapturedRoute {
    fn navigate(&mut self, route: Route) {
        self.0 = Some(route);
    }
}

impl CapturedRoute {
    fn into_response(self) -> NavigationResponse {
        match self.0 {
            Some(route) => NavigationResponse {
                ok: true,
                route: Some(route.to_uri()),
                message: String::new(),
            },
            None => navigation_failure("no route produced"),
        }
    }
}

fn navigation_failure(message: impl Into<String>) -> NavigationResponse {
    NavigationResponse {
        ok: false,
        route: None,
        message: message.into(),
    }
}

fn lock_project_list() -> MutexGuard<'static, ProjectListState> {
    let list = PROJECT_LIST.get_or_init(|| Mutex::new(ProjectListState::new()));
    list.lock().unwrap_or_else(|poisoned| {
        warn!("event=project_list_lock module=ffi status=recovered");
        poisoned.into_inner()
    })
}

fn resolve_mobile_db_path() -> PathBuf {
    MOBILE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("PROJECTDESK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(MOBILE_DB_FILE_NAME)
        })
        .clone()
}

fn with_connection<T>(f: impl FnOnce(&Connection) -> RepoResult<T>) -> RepoResult<T> {
    let conn = open_db(resolve_mobile_db_path())?;
    f(&conn)
}

#[cfg(test)]
mod tests {
    use super::{
        facility_view, project_create, project_list_add, project_list_appearing,
        project_list_select, project_list_state, task_create, task_set_completed,
        ProjectListView,
    };
    use projectdesk_core::{Project, ProjectListState};
    use std::sync::OnceLock;
    use tempfile::TempDir;

    static TEST_DB_DIR: OnceLock<TempDir> = OnceLock::new();

    fn use_temp_db() {
        TEST_DB_DIR.get_or_init(|| {
            let dir = tempfile::tempdir().expect("temp dir should be created");
            std::env::set_var("PROJECTDESK_DB_PATH", dir.path().join("ffi.sqlite3"));
            dir
        });
    }

    #[test]
    fn add_command_routes_to_creation_flow() {
        let response = project_list_add();
        assert!(response.ok);
        assert_eq!(response.route.as_deref(), Some("project"));
    }

    #[test]
    fn select_rejects_malformed_ids() {
        let response = project_list_select("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid project id"));
    }

    #[test]
    fn list_view_reports_state_names() {
        let mut state = ProjectListState::new();
        assert_eq!(ProjectListView::from(&state).state, "idle");

        let ticket = state.appearing();
        let view = ProjectListView::from(&state);
        assert_eq!(view.state, "loading");
        assert!(view.is_busy);

        state.complete_load(ticket, Ok(vec![Project::new("Garden")]));
        let view = ProjectListView::from(&state);
        assert_eq!(view.state, "loaded");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Garden");
    }

    #[test]
    fn facility_view_uses_formatted_strings() {
        let view = facility_view().expect("mock facility should be present");
        assert_eq!(view.address_full, "1 Main St, Springfield, IL 62704");
        assert_eq!(view.address_short, "Springfield, IL");
        assert!(view.email_link.starts_with("mailto:"));
    }

    #[test]
    fn appearing_loads_created_project_and_select_routes_to_it() {
        use_temp_db();
        let created = project_create("Orchard".to_string(), Some("trees".to_string()));
        assert!(created.ok, "{}", created.message);
        let project_id = created.id.expect("created project id");

        let view = project_list_appearing();
        assert_eq!(view.state, "loaded");
        assert!(!view.is_busy);
        assert_eq!(view.error, None);
        let item = view
            .items
            .iter()
            .find(|item| item.id == project_id)
            .expect("created project should be listed");
        assert_eq!(item.name, "Orchard");
        assert_eq!(item.description, "trees");
        assert_eq!(project_list_state(), view);

        let response = project_list_select(project_id.clone());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.route, Some(format!("project?id={project_id}")));
    }

    #[test]
    fn task_commands_persist_through_database() {
        use_temp_db();
        let project = project_create("Shed".to_string(), None);
        let project_id = project.id.expect("created project id");

        let task = task_create(project_id, "Paint door".to_string());
        assert!(task.ok, "{}", task.message);
        let task_id = task.id.expect("created task id");

        let completed = task_set_completed(task_id.clone(), true);
        assert!(completed.ok, "{}", completed.message);
        assert_eq!(completed.id, Some(task_id.clone()));

        let reopened = task_set_completed(task_id, false);
        assert!(reopened.ok, "{}", reopened.message);
    }

    #[test]
    fn commands_report_failures_without_panicking() {
        use_temp_db();
        let blank = project_create("   ".to_string(), None);
        assert!(!blank.ok);
        assert!(blank.message.starts_with("project_create failed"));

        let orphan = task_create(uuid::Uuid::new_v4().to_string(), "Lost".to_string());
        assert!(!orphan.ok);
        assert!(orphan.message.starts_with("task_create failed"));

        let bad_id = task_set_completed("nope".to_string(), true);
        assert!(!bad_id.ok);
        assert!(bad_id.message.contains("invalid task id"));
    }
}
