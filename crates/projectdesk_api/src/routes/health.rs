use axum::Json;
use projectdesk_core::{core_version, ping};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: ping().to_string(),
        version: core_version().to_string(),
    })
}
