//! Common test utilities for datashelf-server integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use datashelf_core::{DatasetStore, Orient};
use datashelf_server::{router, AppState};

/// Books fixture from the two-book scenario.
pub const BOOKS_CSV: &str = "title,authors,average_rating\nA,X,5\nB,Y,3\n";

/// Creates a data directory holding `books_c.csv`.
pub fn books_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("books_c.csv"), BOOKS_CSV)
        .expect("Failed to write books fixture");
    temp_dir
}

/// Helper to create test app with all routes
pub fn create_test_app(temp_dir: &TempDir) -> Router {
    create_test_app_with_orient(temp_dir, Orient::Records)
}

/// Same as [`create_test_app`] with another default orient.
pub fn create_test_app_with_orient(temp_dir: &TempDir, default_orient: Orient) -> Router {
    let state = Arc::new(AppState {
        store: DatasetStore::new(temp_dir.path()),
        books: "books_c.csv".to_string(),
        default_orient,
        greeting: "welcomeeee".to_string(),
    });
    router(state)
}

/// Sends a GET request and decodes the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}
