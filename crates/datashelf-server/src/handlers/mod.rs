//! HTTP handlers for the DataShelf REST API.
//!
//! This module organizes handlers by domain:
//! - `health`: Health check and greeting
//! - `books`: Fixed queries over the configured books dataset
//! - `data`: Queries over any dataset in the data directory
//!
//! Every data handler is an adapter over [`run_query`].

pub mod books;
pub mod data;
pub mod health;

pub use books::{books_by_author, list_books, top_rating_books};
pub use data::{get_data, get_data_equal};
pub use health::{health_check, welcome};

use axum::Json;
use std::sync::Arc;

use datashelf_core::{Error, Filter, Orient, QueryResult};

use crate::error::ApiError;
use crate::types::OrientParams;
use crate::AppState;

/// Loads `dataset`, applies `filter` and wraps the rows for serialization.
///
/// File reading and filtering are blocking, so they run on the blocking pool.
pub(crate) async fn run_query(
    state: Arc<AppState>,
    dataset: String,
    filter: Option<Filter>,
    params: OrientParams,
) -> Result<Json<QueryResult>, ApiError> {
    let orient = match params.orient.as_deref() {
        Some(raw) => raw.parse::<Orient>()?,
        None => state.default_orient,
    };

    let rows = tokio::task::spawn_blocking(move || state.store.query(&dataset, filter.as_ref()))
        .await
        .map_err(|e| Error::Internal(format!("query task failed: {e}")))??;

    Ok(Json(QueryResult::new(rows, orient)))
}
