//! Error types emitted by the tour CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tour_core::{GraphError, SolveError};
use tour_data::TableError;

/// Errors emitted by the tour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// One of the input tables could not be read.
    #[error("failed to load tour tables: {0}")]
    LoadTables(#[from] TableError),
    /// The tables do not describe a valid graph.
    #[error("failed to build the landmark graph: {0}")]
    BuildGraph(#[from] GraphError),
    /// Reading the expected landmark count from the prompt failed.
    #[error("failed to read the expected landmark count: {0}")]
    ReadLandmarkCount(#[source] std::io::Error),
    /// The prompt answer is not a whole number.
    #[error("expected a whole number of landmarks, found {input:?}")]
    InvalidLandmarkCount {
        /// Trimmed answer given at the prompt.
        input: String,
    },
    /// The graph does not hold the number of landmarks the user expects.
    #[error("mismatch in number of landmarks: expected {expected} but found {found}")]
    LandmarkCountMismatch {
        /// Count supplied by the user.
        expected: usize,
        /// Distinct landmarks in the graph.
        found: usize,
    },
    /// The solver rejected the graph.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver failure.
        source: SolveError,
    },
    /// Serializing the tour failed.
    #[error("failed to serialize the tour: {0}")]
    SerialiseTour(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
