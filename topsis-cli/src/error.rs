//! Error types emitted by the TOPSIS CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use topsis_core::TopsisError;
use topsis_io::TableError;

/// Errors emitted by the TOPSIS CLI.
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
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A weight or impact list could not be parsed.
    #[error("invalid --{field} list: {source}")]
    InvalidList {
        /// Long flag name of the option.
        field: &'static str,
        /// Parse failure from the engine's input types.
        #[source]
        source: TopsisError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The input holds more alternatives than the configured cap.
    #[error("input has {count} alternatives but at most {max} are allowed")]
    TooManyAlternatives {
        /// Alternatives in the input.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Reading the decision table or writing the result failed.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The engine rejected the inputs.
    #[error("evaluation failed: {0}")]
    Engine(#[from] TopsisError),
}
