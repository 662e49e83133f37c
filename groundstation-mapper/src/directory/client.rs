//! Satellite Situation Center ground station directory client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::StationRecord;

use super::convert::convert_stations;
use super::error::DirectoryError;
use super::types::GroundStationsResponse;

/// Default base URL for the SSC REST web services.
const DEFAULT_BASE_URL: &str = "https://sscweb.gsfc.nasa.gov/WS/sscr/2";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL for the directory service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectoryConfig {
    /// Create a config pointing at the production SSC service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// User agent identifying this tool and the host platform.
pub fn user_agent() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_NAME"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Client for the ground station directory.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new directory client.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let agent = HeaderValue::from_str(&user_agent()).map_err(|e| DirectoryError::Schema {
            message: format!("invalid user agent: {e}"),
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every ground station known to the directory.
    ///
    /// Stations are returned in directory order. No retries are attempted.
    pub async fn fetch_all(&self) -> Result<Vec<StationRecord>, DirectoryError> {
        let url = format!("{}/groundStations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Fault {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let response: GroundStationsResponse =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Schema {
                message: e.to_string(),
            })?;

        convert_stations(response.ground_station).map_err(|e| DirectoryError::Schema {
            message: e.to_string(),
        })
    }
}
