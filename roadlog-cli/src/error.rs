//! Error types emitted by the roadlog CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roadlog_core::{InvalidInputError, LogError, PlanError};
use thiserror::Error;

/// Errors emitted by the roadlog CLI.
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
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The start hour is not an hour of the day.
    #[error("start hour {hour} must be between 0 and 23")]
    InvalidStartHour {
        /// Hour supplied by the caller.
        hour: u32,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
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
    /// Opening the trip request file failed.
    #[error("failed to open trip request at {path:?}: {source}")]
    OpenTripRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Trip request JSON could not be decoded.
    #[error("failed to parse trip request JSON at {path:?}: {source}")]
    ParseTripRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The trip request is incomplete or out of range.
    #[error("trip request in {path:?} failed validation: {source}")]
    InvalidTripRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: InvalidInputError,
    },
    /// The planner could not simulate the trip.
    #[error("failed to plan trip from {path:?}: {source}")]
    Plan {
        /// Request path.
        path: Utf8PathBuf,
        /// Planner failure.
        #[source]
        source: PlanError,
    },
    /// Partitioning the plan into daily logs failed.
    #[error("failed to build daily logs: {0}")]
    BuildLogs(#[source] LogError),
    /// Serialising the planned trip failed.
    #[error("failed to serialise trip output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the trip output failed.
    #[error("failed to write trip output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
