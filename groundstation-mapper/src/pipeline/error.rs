//! Fatal pipeline errors.

use crate::directory::DirectoryError;
use crate::maps::MapError;

/// Errors that abort a pipeline run. A run that fails produces no output.
///
/// Per-station geocode and marker failures are not represented here; they
/// are logged and counted in the run's output instead.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The station list could not be fetched
    #[error("failed to fetch stations: {0}")]
    Directory(#[from] DirectoryError),

    /// The map could not be created
    #[error("failed to create map: {0}")]
    MapCreate(#[source] MapError),

    /// A station could not be serialized
    #[error("failed to serialize station {station}: {message}")]
    Serialize { station: String, message: String },
}
