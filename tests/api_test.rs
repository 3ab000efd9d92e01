//! Integration tests for API endpoints.
//!
//! These tests drive the full router with a mocked repository, so the
//! real validation, service and error-mapping layers are exercised
//! without a database connection.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use chrono::{NaiveDate, Utc};
use mockall::predicate::eq;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_api::api::{create_router, AppState};
use user_api::domain::{age_on, User};
use user_api::errors::AppError;
use user_api::infra::repositories::MockUserRepository;
use user_api::infra::Database;
use user_api::services::UserManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn stub_database() -> Arc<Database> {
    // Default connection is disconnected; fine for routes that never
    // touch the database, and the health probe reports it as unhealthy
    Arc::new(Database::from_connection(DatabaseConnection::default()))
}

/// Build a router whose service layer sits on top of the given mock repository
fn test_app(repo: MockUserRepository) -> axum::Router {
    let service = Arc::new(UserManager::new(Arc::new(repo)));
    let state = AppState::new(service, stub_database());
    create_router(state)
}

fn sample_user(id: i64) -> User {
    User {
        id,
        name: "Alice".to_string(),
        dob: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_201_with_age() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .returning(|name, dob| Ok(User { id: 1, name, dob }));

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "dob": "1990-05-20"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["dob"], "1990-05-20");

    let expected_age = age_on(
        NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        Utc::now().date_naive(),
    );
    assert_eq!(body["age"], expected_age);
}

#[tokio::test]
async fn test_create_user_malformed_dob_is_400() {
    let repo = MockUserRepository::new();

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "dob": "20-05-1990"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "dob must be in YYYY-MM-DD format");
}

#[tokio::test]
async fn test_create_user_blank_name_is_400() {
    let repo = MockUserRepository::new();

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "   ", "dob": "1990-05-20"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "name required");
}

#[tokio::test]
async fn test_create_user_future_dob_is_400_and_skips_repository() {
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let future = Utc::now()
        .date_naive()
        .checked_add_days(chrono::Days::new(30))
        .unwrap();

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "dob": future.format("%Y-%m-%d").to_string()}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "date of birth cannot be in the future"
    );
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_user_returns_200() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(1i64))
        .returning(|id| Ok(Some(sample_user(id))));

    let app = test_app(repo);
    let response = app.oneshot(get_request("/users/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
}

#[tokio::test]
async fn test_get_user_unknown_id_is_404() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let app = test_app(repo);
    let response = app.oneshot(get_request("/users/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_non_numeric_id_is_400() {
    let repo = MockUserRepository::new();

    let app = test_app(repo);
    let response = app.oneshot(get_request("/users/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "invalid user id");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user_returns_200() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|id, name, dob| Ok(User { id, name, dob }));

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/1",
            json!({"name": "Renamed", "dob": "1985-11-02"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["dob"], "1985-11-02");
}

#[tokio::test]
async fn test_update_user_missing_id_is_404() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|_, _, _| Err(AppError::NotFound));

    let app = test_app(repo);
    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/999",
            json!({"name": "Renamed", "dob": "1985-11-02"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user_returns_204_without_body() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(1i64)).returning(|_| Ok(()));

    let app = test_app(repo);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_user_missing_id_is_404() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let app = test_app(repo);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_uses_default_pagination() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .with(eq(10u64), eq(0u64))
        .returning(|_, _| Ok(vec![sample_user(1), sample_user(2)]));

    let app = test_app(repo);
    let response = app.oneshot(get_request("/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_sanitizes_out_of_range_pagination() {
    // page=0 floors to 1 and limit=500 caps at 100, giving offset 0
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .with(eq(100u64), eq(0u64))
        .returning(|_, _| Ok(vec![]));

    let app = test_app(repo);
    let response = app
        .oneshot(get_request("/users?page=0&limit=500"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_users_computes_offset_from_page() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .with(eq(20u64), eq(40u64))
        .returning(|_, _| Ok(vec![]));

    let app = test_app(repo);
    let response = app
        .oneshot(get_request("/users?page=3&limit=20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Middleware & Health
// =============================================================================

#[tokio::test]
async fn test_responses_carry_request_id_header() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(sample_user(id))));

    let app = test_app(repo);
    let response = app.oneshot(get_request("/users/1")).await.unwrap();

    let header = response.headers().get("x-request-id");
    assert!(header.is_some());
    assert!(!header.unwrap().to_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let connection = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let service = Arc::new(UserManager::new(Arc::new(MockUserRepository::new())));
    let state = AppState::new(service, Arc::new(Database::from_connection(connection)));
    let app = create_router(state);

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_reports_degraded_database() {
    // A disconnected backend fails the ping
    let service = Arc::new(UserManager::new(Arc::new(MockUserRepository::new())));
    let state = AppState::new(service, stub_database());
    let app = create_router(state);

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
}
