//! Integration tests for API endpoints.
//!
//! These tests drive the router with a mock user service, so no database is
//! required.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Utc;
use mockall::predicate::eq;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

use api_lib::routes::create_router;
use api_lib::state::AppState;
use common::AppError;
use domain::{NewUser, User, UserChanges};
use user_service_lib::infra::Database;
use user_service_lib::service::MockUserService;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_user(id: i64) -> User {
    let now = Utc::now();
    User {
        id,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn app(service: MockUserService) -> Router {
    app_with_db(
        service,
        Database::from_connection(DatabaseConnection::Disconnected),
    )
}

fn app_with_db(service: MockUserService, database: Database) -> Router {
    create_router(AppState::new(Arc::new(service), database))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn error_code(response: Response) -> String {
    body_json(response).await["error"]["code"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_created() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .with(eq(NewUser::new("John Doe", "john@example.com")))
        .times(1)
        .returning(|_| Ok(test_user(1)));

    let response = app(service)
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"John Doe","email":"john@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@example.com");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_user_invalid_json() {
    let mut service = MockUserService::new();
    service.expect_create_user().never();

    let response = app(service)
        .oneshot(json_request("POST", "/users", "invalid json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_user_missing_field_reaches_validation() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .withf(|new_user| new_user.email.is_empty())
        .returning(|_| Err(AppError::invalid_input("Name and email are required")));

    let response = app(service)
        .oneshot(json_request("POST", "/users", r#"{"name":"John Doe"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "Name and email are required");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .returning(|_| Err(AppError::InvalidEmail));

    let response = app(service)
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"John Doe","email":"john"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_code(response).await, "INVALID_EMAIL");
}

#[tokio::test]
async fn test_create_user_storage_fault_is_hidden() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .returning(|_| Err(AppError::from(DbErr::Custom("relation users does not exist".to_string()))));

    let response = app(service)
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"John Doe","email":"john@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "STORAGE_FAULT");
    assert_eq!(body["error"]["message"], "A database error occurred");
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_user_existing() {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .with(eq(1))
        .returning(|id| Ok(test_user(id)));

    let response = app(service)
        .oneshot(empty_request("GET", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@example.com");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let mut service = MockUserService::new();
    service.expect_get_user().never();

    let response = app(service)
        .oneshot(empty_request("GET", "/users/invalid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "INVALID_INPUT");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .with(eq(999))
        .returning(|_| Err(AppError::UserNotFound));

    let response = app(service)
        .oneshot(empty_request("GET", "/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(response).await, "USER_NOT_FOUND");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user_merges_fields() {
    let mut service = MockUserService::new();
    service
        .expect_update_user()
        .with(eq(UserChanges::new(1).with_email("john.updated@example.com")))
        .returning(|changes| {
            Ok(User {
                email: changes.email.unwrap_or_default(),
                ..test_user(changes.id)
            })
        });

    let response = app(service)
        .oneshot(json_request(
            "PUT",
            "/users/1",
            r#"{"email":"john.updated@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john.updated@example.com");
}

#[tokio::test]
async fn test_update_user_invalid_json() {
    let mut service = MockUserService::new();
    service.expect_update_user().never();

    let response = app(service)
        .oneshot(json_request("PUT", "/users/1", "invalid json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut service = MockUserService::new();
    service
        .expect_update_user()
        .returning(|_| Err(AppError::UserNotFound));

    let response = app(service)
        .oneshot(json_request(
            "PUT",
            "/users/999",
            &json!({"name": "John Doe", "email": "john@example.com"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_zero_id_is_invalid_input() {
    let mut service = MockUserService::new();
    service
        .expect_update_user()
        .withf(|changes| changes.id == 0)
        .returning(|_| Err(AppError::invalid_input("User ID is required")));

    let response = app(service)
        .oneshot(json_request("PUT", "/users/0", r#"{"name":"Jane"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "INVALID_INPUT");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user_no_content() {
    let mut service = MockUserService::new();
    service
        .expect_delete_user()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(()));

    let response = app(service)
        .oneshot(empty_request("DELETE", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut service = MockUserService::new();
    service
        .expect_delete_user()
        .returning(|_| Err(AppError::UserNotFound));

    let response = app(service)
        .oneshot(empty_request("DELETE", "/users/5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let response = app(MockUserService::new())
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "unavailable");
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let connection = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let response = app_with_db(MockUserService::new(), Database::from_connection(connection))
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let response = app(MockUserService::new())
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/users"].is_object());
    assert!(body["paths"]["/users/{id}"].is_object());
    assert_eq!(
        body["components"]["schemas"]["User"]["properties"]["name"]["example"],
        "John Doe"
    );
}
