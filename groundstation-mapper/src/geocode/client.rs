//! Reverse-geocoding HTTP client.

use reqwest::Url;
use tracing::trace;

use crate::domain::format_coordinate;

use super::error::GeocodeError;

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the geocode client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the geocoder (the `/geocode/json` path is appended)
    pub base_url: String,
    /// Optional API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a config pointing at the production geocoder, without a key.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for reverse geocoding coordinates.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    /// Create a new geocode client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Build the request URL for a coordinate pair.
    ///
    /// The query has the form `latlng={lat},{lng}&sensor=false`, followed by
    /// `key=...` when an API key is configured.
    pub fn request_url(&self, latitude: f64, longitude: f64) -> Result<Url, GeocodeError> {
        let raw = format!(
            "{}/geocode/json?latlng={},{}&sensor=false",
            self.base_url,
            format_coordinate(latitude),
            format_coordinate(longitude)
        );

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeocodeError::MalformedUrl {
                url: raw,
                message: "coordinates must be finite".to_string(),
            });
        }

        let mut url = Url::parse(&raw).map_err(|e| GeocodeError::MalformedUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }

        Ok(url)
    }

    /// Reverse geocode a coordinate pair, returning the raw response body.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        let url = self.request_url(latitude, longitude)?;
        trace!(%latitude, %longitude, "Sending geocode request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
