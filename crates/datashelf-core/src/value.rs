//! Scalar cell values and per-column type inference.
//!
//! A column's type is decided once, at load time, from every non-missing cell
//! in the column:
//!
//! | Cells                               | Type      |
//! |-------------------------------------|-----------|
//! | all missing                         | `Null`    |
//! | all parse as `i64`                  | `Integer` |
//! | all parse as finite `f64`           | `Float`   |
//! | all `true` / `false` (any case)     | `Boolean` |
//! | anything else                       | `String`  |

use serde::{Deserialize, Serialize, Serializer};

/// Raw cell texts treated as missing values.
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if the raw cell text denotes a missing value.
#[must_use]
pub fn is_missing(raw: &str) -> bool {
    NA_MARKERS.contains(&raw.trim())
}

/// Inferred type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Every cell is missing.
    Null,
    /// `true` / `false`.
    Boolean,
    /// 64-bit signed integers.
    Integer,
    /// Finite 64-bit floats.
    Float,
    /// Free text.
    String,
}

impl ColumnType {
    /// Infers the column type from its raw cell texts.
    #[must_use]
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = false;
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;

        for raw in cells {
            if is_missing(raw) {
                continue;
            }
            seen = true;
            let trimmed = raw.trim();
            if all_int && trimmed.parse::<i64>().is_err() {
                all_int = false;
            }
            if all_float && parse_finite(trimmed).is_none() {
                all_float = false;
            }
            if all_bool && parse_bool(trimmed).is_none() {
                all_bool = false;
            }
            if !(all_int || all_float || all_bool) {
                return Self::String;
            }
        }

        if !seen {
            Self::Null
        } else if all_int {
            Self::Integer
        } else if all_float {
            Self::Float
        } else if all_bool {
            Self::Boolean
        } else {
            Self::String
        }
    }

    /// Returns true for `Integer` and `Float`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Lowercase name, as used in schemas and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value, kept exactly as it appeared in the file.
    Str(String),
}

impl Cell {
    /// Converts raw cell text into a cell of the given column type.
    ///
    /// Missing markers always become [`Cell::Null`]. Text that does not fit
    /// the column type falls back to [`Cell::Str`].
    #[must_use]
    pub fn parse(raw: &str, column_type: ColumnType) -> Self {
        if is_missing(raw) {
            return Self::Null;
        }
        let trimmed = raw.trim();
        let parsed = match column_type {
            ColumnType::Null => None,
            ColumnType::Integer => trimmed.parse().ok().map(Self::Int),
            ColumnType::Float => parse_finite(trimmed).map(Self::Float),
            ColumnType::Boolean => parse_bool(trimmed).map(Self::Bool),
            ColumnType::String => None,
        };
        parsed.unwrap_or_else(|| Self::Str(raw.to_string()))
    }

    /// Returns true for [`Cell::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text view of the cell, if it holds a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// Parses a finite float. `inf` and `NaN` spellings are rejected.
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Parses `true` / `false` in any letter case.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
