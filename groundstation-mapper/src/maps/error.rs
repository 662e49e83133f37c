//! Map service error types.

/// Errors from the map publishing service.
///
/// Fatal when creating the map, per-station when creating a marker.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected
    #[error("unauthorized: check MAPS_API_TOKEN")]
    Unauthorized,

    /// The configured token cannot be sent as a header
    #[error("invalid API token format")]
    InvalidToken,

    /// The service rejected the request
    #[error("map service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
