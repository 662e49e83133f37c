//! Map service request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /maps`.
#[derive(Debug, Serialize)]
pub struct CreateMapRequest<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub author: AuthorDto<'a>,
}

/// Map author.
#[derive(Debug, Serialize)]
pub struct AuthorDto<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Response to a created map.
#[derive(Debug, Deserialize)]
pub struct MapCreatedResponse {
    pub id: String,
    /// Where features for this map are posted, if the service says so.
    #[serde(default)]
    pub features_url: Option<String>,
}

/// Body of a feature insert.
#[derive(Debug, Serialize)]
pub struct CreateFeatureRequest<'a> {
    pub title: &'a str,
    pub kml: &'a str,
}

/// Response to a created feature.
#[derive(Debug, Deserialize)]
pub struct FeatureCreatedResponse {
    pub id: String,
}
