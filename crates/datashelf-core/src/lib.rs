//! # `DataShelf` Core
//!
//! Loads tabular datasets from delimited-text files and filters them by
//! single-column equality.
//!
//! ## Features
//!
//! - **Sanitized resolution**: dataset identifiers are plain file names
//!   inside one data directory
//! - **Typed load**: every column gets an explicit inferred [`ColumnType`]
//! - **Equality filter**: target values are coerced to the column type
//! - **Stable output**: row-array or column-oriented JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datashelf_core::{DatasetStore, Filter, Orient, QueryResult};
//!
//! let store = DatasetStore::new("./data");
//!
//! let books = store.query("books_c.csv", Some(&Filter::top_rated()))?;
//! let body = QueryResult::new(books, Orient::Records).to_json_string()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // i64 -> f64 for numeric comparison

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod output;
#[cfg(test)]
mod output_tests;
pub mod store;
pub mod value;

pub use config::{
    ConfigError, DatasetConfig, LoggingConfig, ServerConfig, ShelfConfig, DEFAULT_CONFIG_FILE,
};
pub use dataset::{Column, Dataset, Row, Schema};
pub use error::{Error, Result};
pub use filter::Filter;
pub use output::{Orient, QueryResult};
pub use store::{validate_identifier, DatasetStore};
pub use value::{Cell, ColumnType};
