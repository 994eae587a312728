//! HTTP surface integration tests
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`.
//! Run: cargo test -p hrms-server --test http_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hrms_server::core::build_app;
use hrms_server::db::init_schema;
use hrms_server::{Config, ServerState};
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    init_schema(&db).await.unwrap();

    let state = ServerState {
        config: Config::from_env(),
        db,
    };
    build_app().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ada() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@x.com",
        "phone": "555",
        "position": "Engineer",
        "experience": 3,
        "resume": "https://files.example.com/resumes/ada.pdf"
    })
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn candidate_create_update_and_promote_flow() {
    let app = test_app().await;

    // Create
    let (status, body) = send(&app, "POST", "/api/candidates", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    let candidate_id = body["candidate"]["id"].as_str().unwrap().to_string();

    // Ordinary status update: 200 + candidate
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/candidates/{candidate_id}"),
        Some(json!({"status": "Scheduled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidate"]["status"], "Scheduled");
    assert!(body["employee"].is_null());

    // Promotion: 201 + employee
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/candidates/{candidate_id}"),
        Some(json!({"status": "Selected"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["candidate"].is_null());
    assert_eq!(body["employee"]["employeeId"], "EMP0001");
    assert_eq!(body["employee"]["email"], "ada@x.com");
    assert_eq!(body["employee"]["status"], "active");
    assert_eq!(
        body["employee"]["resume"],
        "https://files.example.com/resumes/ada.pdf"
    );

    // The candidate is gone
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/candidates/{candidate_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // ...and shows up in the directory
    let (status, body) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn validation_errors_map_to_bad_request() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/api/candidates", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    let candidate_id = body["candidate"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/candidates/{candidate_id}"),
        Some(json!({"name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    // Bad email on creation
    let mut invalid = ada();
    invalid["email"] = json!("not-an-email");
    invalid["name"] = json!("Someone Else");
    let (status, body) = send(&app, "POST", "/api/candidates", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn duplicate_email_maps_to_conflict() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/api/candidates", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/candidates", Some(ada())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn missing_candidate_maps_to_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/candidates/candidate:doesnotexist",
        Some(json!({"status": "Scheduled"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}
