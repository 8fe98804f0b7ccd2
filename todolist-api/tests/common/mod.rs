/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (migrations + seed rows)
/// - Router construction
/// - Request/response helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use todolist_api::app::{build_router, AppState};
use todolist_api::config::Config;
use todolist_shared::db::migrations::{ensure_database_exists, run_migrations};
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context against the configured database
    ///
    /// Runs migrations, which create the schema and the seed rows the
    /// tests assert against (users Maria/John/Shane, tasks 1-6).
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        ensure_database_exists(&config.database.url).await?;

        let db = PgPool::connect(&config.database.url).await?;
        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a GET request and returns status and parsed JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().call(request).await.unwrap();
        parse_response(response).await
    }

    /// Sends a PUT request with a JSON body and returns status and parsed
    /// JSON body
    pub async fn put_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().call(request).await.unwrap();
        parse_response(response).await
    }
}

/// Collects a response body and parses it as JSON
async fn parse_response(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into()));

    (status, json)
}
