//! Fixed queries over the configured books dataset.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use datashelf_core::{Filter, QueryResult};

use super::run_query;
use crate::error::ApiError;
use crate::types::{ErrorResponse, OrientParams};
use crate::AppState;

/// Return every book.
#[utoipa::path(
    get,
    path = "/ambil_buku",
    tag = "books",
    params(OrientParams),
    responses(
        (status = 200, description = "All rows of the books dataset", body = Object),
        (status = 400, description = "Invalid orient or query string", body = ErrorResponse),
        (status = 404, description = "Books dataset missing", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OrientParams>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError> {
    let Query(params) = query?;
    let books = state.books.clone();
    run_query(state, books, None, params).await
}

/// Return books with `average_rating == 5`.
#[utoipa::path(
    get,
    path = "/top_rating_book",
    tag = "books",
    params(OrientParams),
    responses(
        (status = 200, description = "Books rated 5", body = Object),
        (status = 400, description = "Books dataset has no average_rating column", body = ErrorResponse),
        (status = 404, description = "Books dataset missing", body = ErrorResponse)
    )
)]
pub async fn top_rating_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OrientParams>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError> {
    let Query(params) = query?;
    let books = state.books.clone();
    run_query(state, books, Some(Filter::top_rated()), params).await
}

/// Return books whose `authors` value is exactly `name`.
#[utoipa::path(
    get,
    path = "/get_author/{name}",
    tag = "books",
    params(
        ("name" = String, Path, description = "Exact authors value"),
        OrientParams
    ),
    responses(
        (status = 200, description = "Books by the author", body = Object),
        (status = 400, description = "Undecodable name or books dataset has no authors column", body = ErrorResponse),
        (status = 404, description = "Books dataset missing", body = ErrorResponse)
    )
)]
pub async fn books_by_author(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<OrientParams>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError> {
    let Path(name) = path?;
    let Query(params) = query?;
    let books = state.books.clone();
    run_query(state, books, Some(Filter::by_author(name)), params).await
}
