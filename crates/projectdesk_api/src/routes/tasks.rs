use super::parse_id;
use crate::error::{ApiError, ApiResponse};
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectdesk_core::{ProjectTask, SqliteTaskRepository, TaskPatch, TaskService};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ProjectTask>>>, ApiError> {
    let project_id = parse_id(&raw_id)?;
    let tasks = state
        .with_conn(move |conn| {
            let service = TaskService::new(SqliteTaskRepository::new(conn));
            Ok(service.list_tasks(project_id)?)
        })
        .await?;
    Ok(Json(ApiResponse::success(tasks)))
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectTask>>), ApiError> {
    let project_id = parse_id(&raw_id)?;
    let task = state
        .with_conn(move |conn| {
            let service = TaskService::new(SqliteTaskRepository::new(conn));
            Ok(service.add_task(project_id, &body.title)?)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(task))))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<ApiResponse<ProjectTask>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let patch = TaskPatch {
        title: body.title,
        is_completed: body.is_completed,
    };
    let task = state
        .with_conn(move |conn| {
            let service = TaskService::new(SqliteTaskRepository::new(conn));
            Ok(service.update_task(id, &patch)?)
        })
        .await?;
    Ok(Json(ApiResponse::success(task)))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state
        .with_conn(move |conn| {
            let service = TaskService::new(SqliteTaskRepository::new(conn));
            Ok(service.delete_task(id)?)
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
