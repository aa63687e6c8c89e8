//! In-memory datasets loaded from delimited text.
//!
//! A [`Dataset`] is an explicit [`Schema`] (column names and inferred
//! [`ColumnType`]s) plus the ordered rows of the source file. Each [`Row`]
//! remembers its position in the file so filtering never renumbers rows.
//!
//! Loading rules:
//! - The first record is the header. Blank header cells become
//!   `Unnamed: <pos>` and duplicates become `name.1`, `name.2`, ...
//! - Every record must have exactly as many fields as the header. Ragged
//!   rows are rejected with [`Error::Parse`].
//! - Non UTF-8 content is rejected with [`Error::Parse`].
//! - A header with no records is a valid, empty dataset.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::{Cell, ColumnType};

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header line, after normalization.
    pub name: String,
    /// Type inferred from the column's cells.
    pub column_type: ColumnType,
}

/// Ordered column list of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates a schema from its columns.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in file order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Position of the named column.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One record of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: usize,
    cells: Vec<Cell>,
}

impl Row {
    /// Creates a row at the given source position.
    #[must_use]
    pub fn new(index: usize, cells: Vec<Cell>) -> Self {
        Self { index, cells }
    }

    /// 0-based position of the record in the source file, header excluded.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Cells in schema order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at the given column position.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}

/// A fully loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    /// Assembles a dataset from parts.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            schema,
            rows,
        }
    }

    /// Reads delimited text and infers the column types.
    ///
    /// `name` is only used to label errors and logs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input has no header, holds a record
    /// whose field count differs from the header, or is not valid UTF-8.
    /// Returns [`Error::Io`] if reading fails.
    pub fn from_reader<R: Read>(name: &str, reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let header = csv_reader
            .headers()
            .map_err(|e| Error::from_csv(name, e))?
            .clone();
        if header.is_empty() {
            return Err(Error::Parse {
                dataset: name.to_string(),
                message: "no columns to parse from file".to_string(),
            });
        }
        let names = normalize_headers(header.iter());

        let records = csv_reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::from_csv(name, e))?;

        let columns: Vec<Column> = names
            .into_iter()
            .enumerate()
            .map(|(pos, name)| Column {
                name,
                column_type: ColumnType::infer(records.iter().filter_map(|r| r.get(pos))),
            })
            .collect();

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let cells = columns
                    .iter()
                    .zip(record.iter())
                    .map(|(column, raw)| Cell::parse(raw, column.column_type))
                    .collect();
                Row::new(index, cells)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            dataset = name,
            rows = rows.len(),
            columns = columns.len(),
            "Dataset parsed"
        );

        Ok(Self::new(name, Schema::new(columns), rows))
    }

    /// Dataset identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inferred schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only the rows for which `keep` returns true, in order.
    pub fn retain_rows<F>(&mut self, keep: F)
    where
        F: FnMut(&Row) -> bool,
    {
        self.rows.retain(keep);
    }
}

/// Names blank header cells `Unnamed: <pos>` and suffixes repeated names
/// with `.1`, `.2`, ... so every column name is unique.
#[must_use]
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (pos, cell) in raw.into_iter().enumerate() {
        let base = if cell.trim().is_empty() {
            format!("Unnamed: {pos}")
        } else {
            cell.to_string()
        };

        let name = if used.contains(&base) {
            let mut n = counts.get(&base).copied().unwrap_or(1);
            let mut candidate = format!("{base}.{n}");
            while used.contains(&candidate) {
                n += 1;
                candidate = format!("{base}.{n}");
            }
            counts.insert(base, n + 1);
            candidate
        } else {
            base
        };

        used.insert(name.clone());
        names.push(name);
    }
    names
}
