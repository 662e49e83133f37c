//! Hosted map resources.

use super::CountryCode;

/// Default title for the published map.
pub const DEFAULT_MAP_TITLE: &str = "Ground Stations Map";

/// Default summary for the published map.
pub const DEFAULT_MAP_SUMMARY: &str = "Shows locations of NASA's satellite ground stations";

/// Descriptive metadata for the map created by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDetails {
    pub title: String,
    pub summary: String,
    pub author_name: String,
    pub author_email: String,
}

impl MapDetails {
    /// Create map details with the default title and summary.
    pub fn new(author_name: impl Into<String>, author_email: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_MAP_TITLE.to_string(),
            summary: DEFAULT_MAP_SUMMARY.to_string(),
            author_name: author_name.into(),
            author_email: author_email.into(),
        }
    }

    /// Set a custom title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// Reference to a map created on the map service.
///
/// One handle exists per pipeline run; every marker of the run belongs to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHandle {
    /// Service-assigned map identifier.
    pub id: String,
    /// URL that accepts new features for this map.
    pub features_url: String,
}

/// A marker published on a map. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFeature {
    pub id: String,
    pub map_id: String,
    pub code: CountryCode,
    pub title: String,
}

/// Marker title for a station in the given country.
pub fn marker_title(code: &CountryCode) -> String {
    format!("{} Marker", code.as_str())
}
