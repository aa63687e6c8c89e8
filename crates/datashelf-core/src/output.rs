//! JSON shapes for query results.
//!
//! - [`Orient::Records`]: `[{"title": "A", "average_rating": 5}, ...]`
//! - [`Orient::Columns`]: `{"title": {"0": "A"}, "average_rating": {"0": 5}}`
//!
//! In the column shape rows are keyed by their position in the source file,
//! so a filtered result keeps its original row numbers. Column order always
//! follows the file. An empty result keeps its shape: `[]`, or one empty
//! object per column.

use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::dataset::{Dataset, Row, Schema};
use crate::error::{Error, Result};

/// Layout of a serialized result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orient {
    /// Array of row objects.
    #[default]
    Records,
    /// Object of column name to `{row index: value}`.
    Columns,
}

impl Orient {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Columns => "columns",
        }
    }
}

impl FromStr for Orient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "records" => Ok(Self::Records),
            "columns" => Ok(Self::Columns),
            _ => Err(Error::InvalidOrient(s.to_string())),
        }
    }
}

impl std::fmt::Display for Orient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query result paired with the layout it serializes to.
#[derive(Debug, Clone)]
pub struct QueryResult {
    dataset: Dataset,
    orient: Orient,
}

impl QueryResult {
    /// Wraps a dataset for serialization.
    #[must_use]
    pub fn new(dataset: Dataset, orient: Orient) -> Self {
        Self { dataset, orient }
    }

    /// Serializes to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Internal(e.to_string()))
    }
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let schema = self.dataset.schema();
        let rows = self.dataset.rows();
        match self.orient {
            Orient::Records => {
                let mut seq = serializer.serialize_seq(Some(rows.len()))?;
                for row in rows {
                    seq.serialize_element(&RecordView { schema, row })?;
                }
                seq.end()
            }
            Orient::Columns => {
                let mut map = serializer.serialize_map(Some(schema.len()))?;
                for (position, column) in schema.columns().iter().enumerate() {
                    map.serialize_entry(&column.name, &ColumnView { rows, position })?;
                }
                map.end()
            }
        }
    }
}

struct RecordView<'a> {
    schema: &'a Schema,
    row: &'a Row,
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.len()))?;
        for (column, cell) in self.schema.columns().iter().zip(self.row.cells()) {
            map.serialize_entry(&column.name, cell)?;
        }
        map.end()
    }
}

struct ColumnView<'a> {
    rows: &'a [Row],
    position: usize,
}

impl Serialize for ColumnView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in self.rows {
            if let Some(cell) = row.get(self.position) {
                map.serialize_entry(&row.index().to_string(), cell)?;
            }
        }
        map.end()
    }
}
