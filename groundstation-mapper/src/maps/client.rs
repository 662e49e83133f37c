//! Map publishing client.
//!
//! Creates one map per run and posts one KML placemark per station to it.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{CountryCode, MapDetails, MapHandle, MarkerFeature, marker_title};

use super::error::MapError;
use super::kml::station_placemark;
use super::types::{
    AuthorDto, CreateFeatureRequest, CreateMapRequest, FeatureCreatedResponse, MapCreatedResponse,
};

/// Default host for flag icons (16px famfamfam set).
const DEFAULT_ICON_BASE_URL: &str = "http://icons.iconarchive.com/icons/famfamfam/flag/16";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the map publisher.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// Base URL of the map service
    pub base_url: String,
    /// Bearer token for the map service
    pub api_token: String,
    /// Base URL for flag icons; `/{code}-icon.png` is appended
    pub icon_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config for the given service and token.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom icon host.
    pub fn with_icon_base_url(mut self, url: impl Into<String>) -> Self {
        self.icon_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the hosted map service.
#[derive(Debug, Clone)]
pub struct MapPublisher {
    http: reqwest::Client,
    base_url: String,
    icon_base_url: String,
}

impl MapPublisher {
    /// Create a new map publisher.
    pub fn new(config: MapsConfig) -> Result<Self, MapError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| MapError::InvalidToken)?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            icon_base_url: config.icon_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Flag icon URL for a country.
    pub fn icon_url(&self, code: &CountryCode) -> String {
        format!("{}/{}-icon.png", self.icon_base_url, code.to_lowercase())
    }

    /// Create the map that will hold this run's markers.
    pub async fn create_map(&self, details: &MapDetails) -> Result<MapHandle, MapError> {
        let url = format!("{}/maps", self.base_url);
        let request = CreateMapRequest {
            title: &details.title,
            summary: &details.summary,
            author: AuthorDto {
                name: &details.author_name,
                email: &details.author_email,
            },
        };

        let created: MapCreatedResponse = self.post_json(&url, &request).await?;
        let features_url = created
            .features_url
            .unwrap_or_else(|| format!("{}/maps/{}/features", self.base_url, created.id));

        Ok(MapHandle {
            id: created.id,
            features_url,
        })
    }

    /// Publish a station marker on the map.
    pub async fn create_marker(
        &self,
        map: &MapHandle,
        code: &CountryCode,
        latitude: f64,
        longitude: f64,
    ) -> Result<MarkerFeature, MapError> {
        let title = marker_title(code);
        let kml = station_placemark(code, &self.icon_url(code), latitude, longitude);
        let request = CreateFeatureRequest {
            title: &title,
            kml: &kml,
        };

        let created: FeatureCreatedResponse = self.post_json(&map.features_url, &request).await?;
        debug!(map = %map.id, feature = %created.id, code = %code, "Created marker");

        Ok(MarkerFeature {
            id: created.id,
            map_id: map.id.clone(),
            code: *code,
            title,
        })
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, MapError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MapError::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MapError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MapError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MapsConfig::new("http://maps.local", "token");
        assert_eq!(config.icon_base_url, DEFAULT_ICON_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn icon_url_is_lowercased() {
        let publisher = MapPublisher::new(MapsConfig::new("http://maps.local", "token")).unwrap();
        let code = CountryCode::parse("US").unwrap();
        assert_eq!(
            publisher.icon_url(&code),
            "http://icons.iconarchive.com/icons/famfamfam/flag/16/us-icon.png"
        );
    }

    #[test]
    fn icon_url_custom_host() {
        let config = MapsConfig::new("http://maps.local", "token").with_icon_base_url("https://flags.example/");
        let publisher = MapPublisher::new(config).unwrap();
        let code = CountryCode::parse("GB").unwrap();
        assert_eq!(publisher.icon_url(&code), "https://flags.example/gb-icon.png");
    }

    #[test]
    fn rejects_unprintable_token() {
        let result = MapPublisher::new(MapsConfig::new("http://maps.local", "bad\ntoken"));
        assert!(matches!(result, Err(MapError::InvalidToken)));
    }
}
