//! Application configuration from environment variables.
//!
//! Credentials are always injected from the environment; nothing secret
//! lives in source.

use std::time::Duration;

use crate::directory::DirectoryConfig;
use crate::domain::MapDetails;
use crate::geocode::GeocodeConfig;
use crate::maps::MapsConfig;
use crate::pipeline::PipelineConfig;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable has an unusable value
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Everything needed to build the clients and run the pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: DirectoryConfig,
    pub geocode: GeocodeConfig,
    pub maps: MapsConfig,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mut directory = DirectoryConfig::new();
        if let Some(url) = get("DIRECTORY_BASE_URL") {
            directory = directory.with_base_url(url);
        }

        let mut geocode = GeocodeConfig::new();
        if let Some(url) = get("GEOCODE_BASE_URL") {
            geocode = geocode.with_base_url(url);
        }
        if let Some(key) = get("GEOCODE_API_KEY") {
            geocode = geocode.with_api_key(key);
        }

        let mut maps = MapsConfig::new(require("MAPS_BASE_URL")?, require("MAPS_API_TOKEN")?);
        if let Some(url) = get("MAP_ICON_BASE_URL") {
            maps = maps.with_icon_base_url(url);
        }

        let details = MapDetails::new(require("MAP_AUTHOR_NAME")?, require("MAP_AUTHOR_EMAIL")?);
        let mut pipeline = PipelineConfig::new(details);

        if let Some(value) = get("GEOCODE_MAX_CONCURRENT") {
            let n = parse_positive("GEOCODE_MAX_CONCURRENT", &value)?;
            pipeline = pipeline.with_max_concurrent(n as usize);
        }
        if let Some(value) = get("GEOCODE_TIMEOUT_SECS") {
            let secs = parse_positive("GEOCODE_TIMEOUT_SECS", &value)?;
            pipeline = pipeline.with_geocode_timeout(Duration::from_secs(secs));
            geocode = geocode.with_timeout(secs);
        }

        Ok(Self {
            directory,
            geocode,
            maps,
            pipeline,
        })
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be greater than zero",
        }),
        Ok(n) => Ok(n),
        Err(_) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "not a whole number",
        }),
    }
}
