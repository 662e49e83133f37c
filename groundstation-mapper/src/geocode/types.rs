//! Geocoder response types.
//!
//! Only the parts needed to find a country are modelled; everything else in
//! the response is ignored.

use serde::Deserialize;

/// Reverse-geocode response body.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One candidate address for the coordinates.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    /// Components ordered from most to least specific.
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// A single named part of an address (street, locality, country...).
#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component identifies a country.
    pub fn is_country(&self) -> bool {
        self.types.iter().any(|t| t == "country")
    }
}
