//! String-templated navigation routes.
//!
//! Routes use one query parameter: `project?id={id}` opens a detail view and
//! bare `project` opens the creation flow.

use crate::model::project::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PROJECT_ROUTE: &str = "project";
const PROJECT_ID_PARAM: &str = "id";

/// Navigation target understood by the mobile shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Detail view of one project.
    ProjectDetail(ProjectId),
    /// Creation flow for a new project.
    NewProject,
}

impl Route {
    /// Renders the route in shell URI form.
    pub fn to_uri(&self) -> String {
        match self {
            Self::ProjectDetail(id) => format!("{PROJECT_ROUTE}?{PROJECT_ID_PARAM}={id}"),
            Self::NewProject => PROJECT_ROUTE.to_string(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Route parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    UnknownRoute(String),
    UnknownParameter(String),
    InvalidProjectId(String),
}

impl Display for RouteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoute(value) => write!(f, "unknown route: {value}"),
            Self::UnknownParameter(value) => write!(f, "unknown route parameter: {value}"),
            Self::InvalidProjectId(value) => write!(f, "invalid project id: {value}"),
        }
    }
}

impl Error for RouteParseError {}

/// Parses a shell URI back into a route.
pub fn parse_route(uri: &str) -> Result<Route, RouteParseError> {
    let trimmed = uri.trim().trim_start_matches('/');
    let (path, query) = match trimmed.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (trimmed, None),
    };
    if path != PROJECT_ROUTE {
        return Err(RouteParseError::UnknownRoute(path.to_string()));
    }

    let Some(query) = query.filter(|value| !value.is_empty()) else {
        return Ok(Route::NewProject);
    };
    let (key, value) = query.split_once('=').unwrap_or((query, ""));
    if key != PROJECT_ID_PARAM {
        return Err(RouteParseError::UnknownParameter(key.to_string()));
    }
    let id = Uuid::parse_str(value)
        .ok()
        .filter(|id| !id.is_nil())
        .ok_or_else(|| RouteParseError::InvalidProjectId(value.to_string()))?;
    Ok(Route::ProjectDetail(id))
}

/// Shell collaborator that performs navigation.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Records routes in order; used where the shell polls for the next route.
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}
