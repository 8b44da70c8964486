//! Route table and request logging.

mod facility;
mod health;
mod projects;
mod tasks;

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, put};
use axum::Router;
use log::info;
use std::time::Instant;
use uuid::Uuid;

pub use facility::FacilityView;
pub use health::HealthResponse;
pub use projects::{ListParams, ProjectBody};
pub use tasks::{CreateTaskBody, UpdateTaskBody};

/// Builds the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/projects/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/api/projects/:id/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route(
            "/api/tasks/:id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/api/facility", get(facility::get_facility))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!(
        "event=http_request module=api status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}

/// Parses a path segment as a non-nil UUID.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|id| !id.is_nil())
        .ok_or_else(|| ApiError::BadRequest(format!("invalid id: {raw}")))
}
