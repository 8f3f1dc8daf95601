//! Error types emitted by the dramwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dramwise_core::RecommendError;
use dramwise_data::LoadError;
use thiserror::Error;

/// Errors emitted by the dramwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The recommendation count resolved to zero.
    #[error("{field} must be at least 1")]
    ZeroCount {
        /// Long flag name.
        field: &'static str,
    },
    /// The field delimiter is not a single ASCII character.
    #[error("{field} must be a single ASCII character, found {value:?}")]
    InvalidDelimiter {
        /// Long flag name.
        field: &'static str,
        /// Rejected character.
        value: char,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the flavour table failed.
    #[error("failed to load flavour table from {path:?}: {source}")]
    Load {
        /// Path of the table.
        path: Utf8PathBuf,
        /// Underlying loader error.
        #[source]
        source: LoadError,
    },
    /// The liked distilleries were rejected.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising the recommendations failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
