//! Errors raised while loading a flavour table.

use camino::Utf8PathBuf;
use dramwise_core::DatasetError;
use thiserror::Error;

/// Errors returned by [`CsvDatasetLoader`](crate::CsvDatasetLoader).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("failed to open flavour table at {path}")]
    Open {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The delimited text could not be read.
    #[error("failed to read flavour table")]
    Csv {
        /// Underlying parse error.
        #[source]
        source: csv::Error,
    },
    /// The header row lacked a required column.
    #[error("flavour table has no '{column}' column")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },
    /// The rows did not form a valid dataset.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}
