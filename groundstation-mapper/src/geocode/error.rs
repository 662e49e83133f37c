//! Geocoder error types.

use std::time::Duration;

/// Errors from a single reverse-geocode request.
///
/// These are per-station: the pipeline logs them and carries on without a
/// country code for the affected station.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (connection, TLS, body read)
    #[error("geocode network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Geocoder returned a non-success status
    #[error("geocode API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The request URL could not be built from the coordinates
    #[error("malformed geocode URL {url}: {message}")]
    MalformedUrl { url: String, message: String },

    /// The request did not complete before its deadline
    #[error("geocode request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },
}
