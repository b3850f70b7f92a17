//! Integration tests for API endpoints.
//!
//! The router runs against the in-memory repository, so no database is
//! needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{DbErr, RuntimeErr};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_api::api::{create_router, AppState};
use user_api::domain::User;
use user_api::errors::{AppError, AppResult};
use user_api::infra::{InMemoryUserStore, UserRepository};

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(repo: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::with_repository(repo))
}

fn empty_app() -> Router {
    app_with(Arc::new(InMemoryUserStore::new()))
}

async fn populated_app() -> Router {
    let store = InMemoryUserStore::new();
    for name in ["John", "Jane", "Jack"] {
        store
            .save(
                name.to_string(),
                "Doe".to_string(),
                format!("{}@doe.com", name.to_lowercase()),
            )
            .await
            .unwrap();
    }
    app_with(Arc::new(store))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_empty_table() {
    let app = empty_app();

    let response = send(&app, get("/users")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"result":null,"count":0}"#);
}

#[tokio::test]
async fn test_index_user() {
    let app = populated_app().await;

    let response = send(&app, get("/users")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["result"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Single record
// =============================================================================

#[tokio::test]
async fn test_non_existing_user() {
    let app = empty_app();

    let response = send(&app, get("/user/1")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, r#"{"message":"User not found."}"#);
}

#[tokio::test]
async fn test_get_user() {
    let app = populated_app().await;

    let response = send(&app, get("/user/1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let user: User = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(user, User::new(1, "John", "Doe", "john@doe.com"));
}

#[tokio::test]
async fn test_unparseable_id_is_not_found() {
    let app = populated_app().await;

    for uri in ["/user/abc", "/user/2147483648", "/user/1.5"] {
        let response = send(&app, get(uri)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(response).await, r#"{"message":"User not found."}"#);
    }
}

#[tokio::test]
async fn test_writes_to_unparseable_id_are_noops() {
    let app = populated_app().await;

    let response = send(&app, form("PATCH", "/user/abc", "name=Ghost")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record updated successfully."}"#
    );

    let response = send(&app, delete("/user/abc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record deleted successfully."}"#
    );

    let body = body_json(send(&app, get("/users")).await).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["result"][0]["name"], "John");
}

// =============================================================================
// Writes
// =============================================================================

#[tokio::test]
async fn test_add_user() {
    let app = empty_app();

    let response = send(
        &app,
        form("POST", "/user", "name=John&surname=Doe&email=john%40doe.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record created successfully."}"#
    );

    let body = body_json(send(&app, get("/users")).await).await;
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["result"][0],
        json!({"id": 1, "name": "John", "surname": "Doe", "email": "john@doe.com"})
    );
}

#[tokio::test]
async fn test_add_user_with_missing_fields_stores_empty_strings() {
    let app = empty_app();

    let response = send(&app, form("POST", "/user", "name=Solo")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let user: User = serde_json::from_str(&body_text(send(&app, get("/user/1")).await).await).unwrap();
    assert_eq!(user, User::new(1, "Solo", "", ""));
}

#[tokio::test]
async fn test_add_user_from_multipart_form() {
    let app = empty_app();

    let body = concat!(
        "--boundary\r\n",
        "Content-Disposition: form-data; name=\"name\"\r\n\r\n",
        "John\r\n",
        "--boundary\r\n",
        "Content-Disposition: form-data; name=\"surname\"\r\n\r\n",
        "Doe\r\n",
        "--boundary\r\n",
        "Content-Disposition: form-data; name=\"email\"\r\n\r\n",
        "john@doe.com\r\n",
        "--boundary--\r\n",
    );
    let request = Request::builder()
        .method("POST")
        .uri("/user")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=boundary")
        .body(Body::from(body))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record created successfully."}"#
    );

    let user: User = serde_json::from_str(&body_text(send(&app, get("/user/1")).await).await).unwrap();
    assert_eq!(user, User::new(1, "John", "Doe", "john@doe.com"));
}

#[tokio::test]
async fn test_edit_without_body_blanks_fields() {
    let app = populated_app().await;

    let request = Request::builder()
        .method("PATCH")
        .uri("/user/1")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record updated successfully."}"#
    );

    let user: User = serde_json::from_str(&body_text(send(&app, get("/user/1")).await).await).unwrap();
    assert_eq!(user, User::new(1, "", "", ""));
}

#[tokio::test]
async fn test_edit_user() {
    let app = populated_app().await;

    let response = send(
        &app,
        form("PATCH", "/user/2", "name=Janet&surname=Roe&email=janet%40roe.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record updated successfully."}"#
    );

    let user: User = serde_json::from_str(&body_text(send(&app, get("/user/2")).await).await).unwrap();
    assert_eq!(user, User::new(2, "Janet", "Roe", "janet@roe.com"));
}

#[tokio::test]
async fn test_edit_missing_user_still_succeeds() {
    let app = empty_app();

    let response = send(&app, form("PATCH", "/user/9", "name=Ghost")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(send(&app, get("/users")).await).await["count"], 0);
}

#[tokio::test]
async fn test_remove_user() {
    let app = populated_app().await;

    let response = send(&app, delete("/user/3")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"message":"Record deleted successfully."}"#
    );

    let response = send(&app, get("/user/3")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(send(&app, get("/users")).await).await["count"], 2);
}

// =============================================================================
// Error surfacing
// =============================================================================

/// Repository whose every call fails the way a broken database would.
struct FailingRepository {
    connection_lost: bool,
}

impl FailingRepository {
    fn error(&self) -> AppError {
        if self.connection_lost {
            AppError::from(DbErr::Conn(RuntimeErr::Internal("connection refused".into())))
        } else {
            AppError::from(DbErr::Exec(RuntimeErr::Internal("no such table".into())))
        }
    }
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_by_id(&self, _id: i32) -> AppResult<User> {
        Err(self.error())
    }

    async fn save(&self, _name: String, _surname: String, _email: String) -> AppResult<()> {
        Err(self.error())
    }

    async fn update(&self, _id: i32, _name: String, _surname: String, _email: String) -> AppResult<()> {
        Err(self.error())
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Err(self.error())
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        Err(self.error())
    }
}

#[tokio::test]
async fn test_query_errors_are_500() {
    let app = app_with(Arc::new(FailingRepository { connection_lost: false }));

    let response = send(&app, form("POST", "/user", "name=John")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(body.contains("message"));
    assert!(!body.contains("no such table"));

    let response = send(&app, get("/users")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_connection_errors_are_503() {
    let app = app_with(Arc::new(FailingRepository { connection_lost: true }));

    let response = send(&app, delete("/user/1")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = send(&app, get("/user/1")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// Supporting endpoints
// =============================================================================

#[tokio::test]
async fn test_health_without_database() {
    let app = empty_app();

    let response = send(&app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let app = empty_app();

    let response = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"].get("/users").is_some());
    assert!(doc["paths"].get("/user/{id}").is_some());
}
