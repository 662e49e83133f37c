//! Station directory error types.

/// Errors that can occur when fetching the station list.
///
/// All of these are fatal for a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The service could not be reached (connection, TLS, timeout)
    #[error("directory service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The service answered with a fault status
    #[error("directory service fault {status}: {message}")]
    Fault { status: u16, message: String },

    /// The payload could not be decoded into station records
    #[error("directory schema error: {message}")]
    Schema { message: String },
}
