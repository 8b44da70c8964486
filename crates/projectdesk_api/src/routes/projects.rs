use super::parse_id;
use crate::error::{ApiError, ApiResponse};
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectdesk_core::{Project, ProjectDraft, ProjectService, SqliteProjectRepository};
use serde::Deserialize;

/// Create/replace payload for a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<ProjectBody> for ProjectDraft {
    fn from(value: ProjectBody) -> Self {
        Self {
            name: value.name,
            description: value.description,
            icon: value.icon,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: u32,
}

pub(super) async fn list_projects(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state
        .with_conn(move |conn| {
            let service = ProjectService::new(SqliteProjectRepository::new(conn));
            Ok(service.list_projects(params.limit, params.offset)?)
        })
        .await?;
    Ok(Json(ApiResponse::success(projects)))
}

pub(super) async fn create_project(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProjectBody>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    let draft = ProjectDraft::from(body);
    let project = state
        .with_conn(move |conn| {
            let service = ProjectService::new(SqliteProjectRepository::new(conn));
            Ok(service.create_project(&draft)?)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(project))))
}

pub(super) async fn get_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let project = state
        .with_conn(move |conn| {
            let service = ProjectService::new(SqliteProjectRepository::new(conn));
            service
                .get_project(id)?
                .ok_or_else(|| ApiError::NotFound(format!("project not found: {id}")))
        })
        .await?;
    Ok(Json(ApiResponse::success(project)))
}

pub(super) async fn update_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<ProjectBody>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let draft = ProjectDraft::from(body);
    let project = state
        .with_conn(move |conn| {
            let service = ProjectService::new(SqliteProjectRepository::new(conn));
            Ok(service.update_project(id, &draft)?)
        })
        .await?;
    Ok(Json(ApiResponse::success(project)))
}

pub(super) async fn delete_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state
        .with_conn(move |conn| {
            let service = ProjectService::new(SqliteProjectRepository::new(conn));
            Ok(service.delete_project(id)?)
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
