//! Wire types for the station directory.
//!
//! The directory answers `GET /groundStations` with PascalCase JSON:
//!
//! ```json
//! {"GroundStation": [
//!   {"Id": "WPS", "Name": "Wallops Island",
//!    "Location": {"Latitude": 37.94, "Longitude": -75.46}}
//! ]}
//! ```
//!
//! Station fields beyond `Id`, `Name` and `Location` are kept verbatim.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level response from the ground stations endpoint.
#[derive(Debug, Deserialize)]
pub struct GroundStationsResponse {
    #[serde(rename = "GroundStation")]
    pub ground_station: Vec<GroundStationDto>,
}

/// One station as described by the directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroundStationDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: LocationDto,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Geographic position of a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
}
