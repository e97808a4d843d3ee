//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use roster_core::UserStore;
use roster_server::{api, handler::UserRequestHandler, state::AppState};
use roster_storage::SqliteUserStorage;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// A router over a fresh file-backed database
pub struct TestApp {
    pub router: Router,
    pub store: UserStore,
    pub handler: Arc<UserRequestHandler>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = roster_storage::create_pool(&db_url, 1).await?;
        roster_storage::run_migrations(&pool).await?;

        let store = UserStore::new(Arc::new(SqliteUserStorage::new(pool)));
        let handler = Arc::new(UserRequestHandler::new(store.clone()));
        let router = api::router(AppState::new(Arc::clone(&handler)));

        Ok(Self {
            router,
            store,
            handler,
            _temp_dir: temp_dir,
        })
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (u16, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        into_json(self.send(request).await).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (u16, serde_json::Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        into_json(self.send(request).await).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> (u16, serde_json::Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        into_json(self.send(request).await).await
    }
}

pub async fn into_json(response: Response<Body>) -> (u16, serde_json::Value) {
    let status = response.status().as_u16();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// Test user fixtures
pub mod fixtures {
    pub const ADA_NAME: &str = "Ada Lovelace";
    pub const ADA_EMAIL: &str = "ada@example.com";
    pub const ADA_PASSWORD: &str = "analytical-engine";
}
