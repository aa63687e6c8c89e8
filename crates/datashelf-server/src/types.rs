//! Request/Response types for the DataShelf REST API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "[SHELF-001] Dataset 'books_x.csv' not found")]
    pub error: String,
    /// Stable error code.
    #[schema(example = "SHELF-001")]
    pub code: String,
}

/// Query parameters shared by every data endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrientParams {
    /// Response layout: `records` (array of rows) or `columns`
    /// (column -> row index -> value). Defaults to the server setting.
    #[param(example = "records")]
    pub orient: Option<String>,
}
