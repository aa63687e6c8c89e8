//! Queries over any dataset in the data directory.

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

/// Return every row of a dataset.
#[utoipa::path(
    get,
    path = "/data/get/{data_name}",
    tag = "data",
    params(
        ("data_name" = String, Path, description = "Dataset file name, e.g. books_c.csv"),
        OrientParams
    ),
    responses(
        (status = 200, description = "All rows", body = Object),
        (status = 400, description = "Invalid dataset name or orient", body = ErrorResponse),
        (status = 404, description = "Dataset not found", body = ErrorResponse),
        (status = 500, description = "Dataset is not valid delimited text", body = ErrorResponse)
    )
)]
pub async fn get_data(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<OrientParams>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError> {
    let Path(data_name) = path?;
    let Query(params) = query?;
    run_query(state, data_name, None, params).await
}

/// Return the rows of a dataset where `column == value`.
#[utoipa::path(
    get,
    path = "/data/get/equal/{data_name}/{column}/{value}",
    tag = "data",
    params(
        ("data_name" = String, Path, description = "Dataset file name"),
        ("column" = String, Path, description = "Column to compare"),
        ("value" = String, Path, description = "Target value, coerced to the column type"),
        OrientParams
    ),
    responses(
        (status = 200, description = "Matching rows", body = Object),
        (status = 400, description = "Invalid dataset name, unknown column or orient", body = ErrorResponse),
        (status = 404, description = "Dataset not found", body = ErrorResponse),
        (status = 500, description = "Dataset is not valid delimited text", body = ErrorResponse)
    )
)]
pub async fn get_data_equal(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String, String)>, PathRejection>,
    query: Result<Query<OrientParams>, QueryRejection>,
) -> Result<Json<QueryResult>, ApiError> {
    let Path((data_name, column, value)) = path?;
    let Query(params) = query?;
    run_query(state, data_name, Some(Filter::equal(column, value)), params).await
}
