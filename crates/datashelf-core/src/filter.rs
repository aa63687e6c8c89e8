//! Single-column equality filtering.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use datashelf_core::Filter;
//!
//! let by_column = Filter::equal("language_code", "eng");
//! let top_rated = Filter::top_rated();
//! let by_author = Filter::by_author("Douglas Adams");
//!
//! let dataset = by_author.apply(dataset)?;
//! ```
//!
//! The target always arrives as text and is coerced to the inferred type of
//! the filtered column. A target that cannot be coerced matches nothing.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::value::{parse_bool, parse_finite, Cell, ColumnType};

/// Column used by [`Filter::top_rated`].
pub const RATING_COLUMN: &str = "average_rating";

/// Rating kept by [`Filter::top_rated`].
pub const TOP_RATING: &str = "5";

/// Column used by [`Filter::by_author`].
pub const AUTHOR_COLUMN: &str = "authors";

/// Equality predicate on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Column to compare.
    pub column: String,
    /// Target value, as received from the caller.
    pub value: String,
}

impl Filter {
    /// Keeps rows where `column == value`.
    #[must_use]
    pub fn equal(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Keeps rows where `average_rating == 5`.
    #[must_use]
    pub fn top_rated() -> Self {
        Self::equal(RATING_COLUMN, TOP_RATING)
    }

    /// Keeps rows where `authors` is exactly `name`.
    #[must_use]
    pub fn by_author(name: impl Into<String>) -> Self {
        Self::equal(AUTHOR_COLUMN, name)
    }

    /// Applies the filter, keeping matching rows in source order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnNotFound`] if the dataset has no such column.
    pub fn apply(&self, mut dataset: Dataset) -> Result<Dataset> {
        let (position, column_type) = {
            let schema = dataset.schema();
            let position =
                schema
                    .index_of(&self.column)
                    .ok_or_else(|| Error::ColumnNotFound {
                        dataset: dataset.name().to_string(),
                        column: self.column.clone(),
                    })?;
            (position, schema.columns()[position].column_type)
        };

        let target = Target::coerce(&self.value, column_type);
        if matches!(target, Target::Unmatchable) {
            tracing::debug!(
                dataset = dataset.name(),
                column = %self.column,
                column_type = %column_type,
                value = %self.value,
                "Filter value does not fit column type, no row can match"
            );
        }

        let before = dataset.len();
        dataset.retain_rows(|row| row.get(position).is_some_and(|cell| target.matches(cell)));

        tracing::debug!(
            dataset = dataset.name(),
            column = %self.column,
            kept = dataset.len(),
            scanned = before,
            "Filter applied"
        );
        Ok(dataset)
    }
}

/// Filter target coerced to a column type.
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Number { value: f64, exact: Option<i64> },
    Bool(bool),
    Text(String),
    Unmatchable,
}

impl Target {
    fn coerce(raw: &str, column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Boolean => parse_bool(raw.trim()).map_or(Self::Unmatchable, Self::Bool),
            ColumnType::String => Self::Text(raw.to_string()),
            numeric if numeric.is_numeric() => {
                let trimmed = raw.trim();
                parse_finite(trimmed).map_or(Self::Unmatchable, |value| Self::Number {
                    value,
                    exact: trimmed.parse().ok().or_else(|| integral(value)),
                })
            }
            _ => Self::Unmatchable,
        }
    }

    #[allow(clippy::float_cmp)]
    fn matches(&self, cell: &Cell) -> bool {
        match (self, cell) {
            (Self::Number { exact, .. }, Cell::Int(i)) => exact.is_some_and(|t| t == *i),
            (Self::Number { value, .. }, Cell::Float(f)) => f == value,
            (Self::Bool(t), Cell::Bool(b)) => t == b,
            (Self::Text(t), Cell::Str(s)) => t == s,
            _ => false,
        }
    }
}

/// Integer value of a float with no fractional part, if it fits in `i64`.
///
/// Integer cells compare against this, never against a rounded `f64`, so
/// `"3.0"` matches `3` while `"9007199254740992.0"` does not match
/// `9007199254740993`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}
