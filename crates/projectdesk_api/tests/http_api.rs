use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use projectdesk_api::routes::HealthResponse;
use projectdesk_api::{router, ApiResponse, AppState};
use projectdesk_core::db::open_db_in_memory;
use projectdesk_core::{Project, ProjectTask};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    router(AppState::new(open_db_in_memory().unwrap()))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ApiResponse<T> {
    serde_json::from_slice(bytes).unwrap()
}

async fn create_project(app: &Router, name: &str) -> Project {
    let (status, bytes) = send(app, "POST", "/api/projects", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    decode::<Project>(&bytes).data.unwrap()
}

#[tokio::test]
async fn health_reports_pong_and_version() {
    let app = app();
    let (status, bytes) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "pong");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn project_create_get_list_update_delete_flow() {
    let app = app();
    let created = create_project(&app, "Garden").await;
    assert_eq!(created.name, "Garden");

    let (status, bytes) = send(&app, "GET", &format!("/api/projects/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decode::<Project>(&bytes).data.unwrap(), created);

    create_project(&app, "Attic").await;
    let (status, bytes) = send(&app, "GET", "/api/projects?limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let names = decode::<Vec<Project>>(&bytes)
        .data
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Attic", "Garden"]);

    let (status, bytes) = send(
        &app,
        "PUT",
        &format!("/api/projects/{}", created.id),
        Some(json!({ "name": "Garden 2026", "description": "beds" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = decode::<Project>(&bytes).data.unwrap();
    assert_eq!(updated.name, "Garden 2026");
    assert_eq!(updated.description, "beds");

    let (status, _) = send(&app, "DELETE", &format!("/api/projects/{}", created.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, bytes) = send(&app, "GET", &format!("/api/projects/{}", created.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let envelope = decode::<Project>(&bytes);
    assert!(!envelope.success);
    assert!(envelope.message.is_some());
}

#[tokio::test]
async fn invalid_input_maps_to_bad_request() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/projects", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/projects/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undecodable_requests_map_to_bad_request_envelope() {
    let app = app();
    let project = create_project(&app, "Porch").await;

    let cases = [
        ("POST", "/api/projects".to_string(), Some(json!({ "title": "x" }))),
        ("GET", "/api/projects?limit=abc".to_string(), None),
        (
            "PUT",
            format!("/api/projects/{}", project.id),
            Some(json!({ "name": 7 })),
        ),
        (
            "POST",
            format!("/api/projects/{}/tasks", project.id),
            Some(json!({})),
        ),
    ];

    for (method, uri, body) in cases {
        let (status, bytes) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        let envelope = decode::<Value>(&bytes);
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert!(!envelope.message.unwrap().is_empty());
    }
}

#[tokio::test]
async fn missing_records_map_to_not_found() {
    let app = app();
    let missing = Uuid::new_v4();

    let (status, _) = send(&app, "DELETE", &format!("/api/projects/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/api/projects/{missing}/tasks"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/tasks/{missing}"),
        Some(json!({ "is_completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn task_flow_under_project() {
    let app = app();
    let project = create_project(&app, "Kitchen").await;
    let tasks_uri = format!("/api/projects/{}/tasks", project.id);

    let (status, bytes) = send(&app, "POST", &tasks_uri, Some(json!({ "title": "Measure" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let task = decode::<ProjectTask>(&bytes).data.unwrap();
    assert_eq!(task.project_id, project.id);
    assert!(!task.is_completed);

    let (status, bytes) = send(
        &app,
        "PUT",
        &format!("/api/tasks/{}", task.id),
        Some(json!({ "is_completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let completed = decode::<ProjectTask>(&bytes).data.unwrap();
    assert!(completed.is_completed);
    assert_eq!(completed.title, "Measure");

    let (status, bytes) = send(&app, "GET", &tasks_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decode::<Vec<ProjectTask>>(&bytes).data.unwrap(), vec![completed]);

    let (status, _) = send(&app, "DELETE", &format!("/api/tasks/{}", task.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, bytes) = send(&app, "GET", &tasks_uri, None).await;
    assert!(decode::<Vec<ProjectTask>>(&bytes).data.unwrap().is_empty());
}

#[tokio::test]
async fn facility_endpoint_serves_formatted_mock() {
    let app = app();
    let (status, bytes) = send(&app, "GET", "/api/facility", None).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(envelope["success"], true);
    let data = &envelope["data"];
    assert_eq!(data["address"]["full"], "1 Main St, Springfield, IL 62704");
    assert_eq!(data["address"]["short"], "Springfield, IL");
    assert_eq!(data["contact"]["phone"], "555-1234");
    assert!(data["contact"]["emailLink"]
        .as_str()
        .unwrap()
        .starts_with("mailto:"));
    assert_eq!(data["facility"]["settings"]["theme"], "light");
}
