#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_for_each)]
//! DataShelf Server - REST API library for DataShelf datasets.
//!
//! This module provides the HTTP handlers, the route table and the OpenAPI
//! description of the DataShelf REST API.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive documentation at:
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod error;
mod handlers;
mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use datashelf_core::{DatasetStore, Orient, ShelfConfig};

pub use error::ApiError;
pub use types::*;

// Re-export handlers for routing
pub use handlers::{
    books_by_author, get_data, get_data_equal, health_check, list_books, top_rating_books,
    welcome,
};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// DataShelf API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DataShelf API",
        version = "0.1.0",
        description = "Read-only JSON access to CSV datasets with single-column equality filters."
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and greeting"),
        (name = "books", description = "Fixed queries over the books dataset"),
        (name = "data", description = "Queries over any dataset")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::welcome,
        handlers::books::list_books,
        handlers::books::top_rating_books,
        handlers::books::books_by_author,
        handlers::data::get_data,
        handlers::data::get_data_equal
    ),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
///
/// Holds configuration only. Datasets are read from disk on every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset resolution and loading.
    pub store: DatasetStore,
    /// Dataset served by the book endpoints.
    pub books: String,
    /// Layout used when a request does not pick one.
    pub default_orient: Orient,
    /// Body of `POST /`.
    pub greeting: String,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset section is invalid.
    pub fn from_config(config: &ShelfConfig) -> datashelf_core::Result<Self> {
        Ok(Self {
            store: DatasetStore::from_config(&config.dataset)?,
            books: config.dataset.books.clone(),
            default_orient: config.dataset.default_orient,
            greeting: config.server.greeting.clone(),
        })
    }
}

/// Builds the API route table.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(welcome))
        .route("/health", get(health_check))
        .route("/ambil_buku", get(list_books))
        .route("/top_rating_book", get(top_rating_books))
        .route("/get_author/{name}", get(books_by_author))
        .route("/data/get/{data_name}", get(get_data))
        .route(
            "/data/get/equal/{data_name}/{column}/{value}",
            get(get_data_equal),
        )
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use datashelf_core::Error;

    #[test]
    fn test_openapi_spec_generation() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(!json.is_empty(), "OpenAPI spec should not be empty");
        assert!(json.contains("DataShelf API"), "Should contain API title");
        assert!(json.contains("0.1.0"), "Should contain version");
    }

    #[test]
    fn test_openapi_has_all_endpoints() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("/health"), "Should document /health");
        assert!(json.contains("/ambil_buku"), "Should document /ambil_buku");
        assert!(
            json.contains("/top_rating_book"),
            "Should document /top_rating_book"
        );
        assert!(
            json.contains("/get_author/{name}"),
            "Should document /get_author"
        );
        assert!(
            json.contains("/data/get/{data_name}"),
            "Should document /data/get"
        );
        assert!(
            json.contains("/data/get/equal/{data_name}/{column}/{value}"),
            "Should document /data/get/equal"
        );
    }

    #[test]
    fn test_openapi_documents_orient_param() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("\"orient\""), "Should document orient");
        assert!(json.contains("ErrorResponse"), "Should have ErrorResponse");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse {
            error: "Test error".to_string(),
            code: "SHELF-008".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(json.contains("\"code\":\"SHELF-008\""));
    }

    #[test]
    fn test_api_error_status_mapping() {
        let cases = [
            (Error::DatasetNotFound("a".into()), StatusCode::NOT_FOUND),
            (Error::InvalidDatasetName("..".into()), StatusCode::BAD_REQUEST),
            (
                Error::ColumnNotFound {
                    dataset: "a".into(),
                    column: "b".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (Error::InvalidOrient("x".into()), StatusCode::BAD_REQUEST),
            (Error::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                Error::Parse {
                    dataset: "a".into(),
                    message: "m".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::Config("bad".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn test_app_state_from_config() {
        let mut config = ShelfConfig::default();
        config.dataset.data_dir = "/srv/shelf".to_string();
        config.dataset.default_orient = Orient::Columns;

        let state = AppState::from_config(&config).expect("state");

        assert_eq!(state.store.data_dir(), std::path::Path::new("/srv/shelf"));
        assert_eq!(state.books, "books_c.csv");
        assert_eq!(state.default_orient, Orient::Columns);
        assert_eq!(state.greeting, "welcomeeee");
    }
}
