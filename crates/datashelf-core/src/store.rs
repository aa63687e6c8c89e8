//! Dataset resolution and the single query operation.
//!
//! A dataset identifier is a bare file name inside the configured data
//! directory. Identifiers carrying separators, parent segments or anything
//! else that is not a plain file name are rejected before touching the
//! file system, so resolution cannot leave the data directory.
//!
//! Nothing is cached: every call reads the file again.

use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use crate::config::DatasetConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::filter::Filter;

/// Read-only access to the datasets of one data directory.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    data_dir: PathBuf,
    delimiter: u8,
}

impl DatasetStore {
    /// Creates a store over `data_dir` reading comma-separated files.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            delimiter: b',',
        }
    }

    /// Builds a store from the `[dataset]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the delimiter is not a single ASCII byte.
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        Ok(Self::new(&config.data_dir).with_delimiter(config.delimiter_byte()?))
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Data directory this store reads from.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Maps a dataset identifier to its file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatasetName`] if the identifier is not a plain
    /// file name.
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf> {
        validate_identifier(identifier)?;
        Ok(self.data_dir.join(identifier))
    }

    /// Loads a dataset by identifier.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDatasetName`] for identifiers that are not plain file names
    /// - [`Error::DatasetNotFound`] if no regular file has that name
    /// - [`Error::Parse`] if the file is not valid delimited text
    /// - [`Error::Io`] if the file cannot be read
    pub fn load(&self, identifier: &str) -> Result<Dataset> {
        let path = self.resolve(identifier)?;

        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::DatasetNotFound(identifier.to_string()))
            }
            Err(e) => return Err(Error::Io(e)),
        };
        if !metadata.is_file() {
            return Err(Error::DatasetNotFound(identifier.to_string()));
        }

        let file = File::open(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::DatasetNotFound(identifier.to_string()),
            _ => Error::Io(e),
        })?;

        Dataset::from_reader(identifier, BufReader::new(file), self.delimiter)
    }

    /// Loads a dataset and applies an optional equality filter.
    ///
    /// Every data endpoint is a thin adapter over this call.
    ///
    /// # Errors
    ///
    /// Any error of [`DatasetStore::load`], plus [`Error::ColumnNotFound`]
    /// when the filter names an unknown column.
    pub fn query(&self, identifier: &str, filter: Option<&Filter>) -> Result<Dataset> {
        let dataset = self.load(identifier)?;
        match filter {
            Some(filter) => filter.apply(dataset),
            None => Ok(dataset),
        }
    }
}

/// Checks that a dataset identifier is a plain file name.
///
/// # Errors
///
/// Returns [`Error::InvalidDatasetName`] for empty names, names containing
/// `/`, `\` or NUL, `.` and `..`, and anything that does not parse as a
/// single normal path component.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let plain = !identifier.is_empty()
        && !identifier.contains(['/', '\\', '\0'])
        && identifier != "."
        && identifier != ".."
        && matches!(
            Path::new(identifier).components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );

    if plain {
        Ok(())
    } else {
        tracing::warn!(identifier, "Rejected dataset identifier");
        Err(Error::InvalidDatasetName(identifier.to_string()))
    }
}
