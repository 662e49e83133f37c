//! Country code extraction from reverse-geocode responses.
//!
//! Responses are decoded as JSON and the address components are walked from
//! least to most specific until a country-level component is found. Bodies
//! that are not valid JSON fall back to scanning for the last `short_name`
//! field, which in geocoder output belongs to the coarsest component.

use crate::domain::CountryCode;

use super::types::GeocodeResponse;

/// Field marker used by the text fallback.
const SHORT_NAME_MARKER: &str = "short_name";

/// Extract the country code from a reverse-geocode response body.
///
/// Returns `None` when the response has no country-level component, the
/// code is not two uppercase letters, or (for non-JSON bodies) no complete
/// `short_name` value is present.
pub fn extract_country_code(response: &str) -> Option<CountryCode> {
    match serde_json::from_str::<GeocodeResponse>(response) {
        Ok(parsed) => country_from_components(&parsed),
        Err(_) => scan_last_short_name(response),
    }
}

/// Find the country in a decoded response.
///
/// Results and their components are searched in reverse so the least
/// specific entry wins, mirroring the geocoder's ordering.
pub fn country_from_components(response: &GeocodeResponse) -> Option<CountryCode> {
    response
        .results
        .iter()
        .rev()
        .flat_map(|result| result.address_components.iter().rev())
        .find(|component| component.is_country())
        .and_then(|component| CountryCode::parse(&component.short_name).ok())
}

/// Read the value of the last `short_name` field in raw text.
///
/// Skips the closing quote, colon, whitespace and opening quote that
/// separate the marker from its value, then reads exactly two characters.
pub fn scan_last_short_name(text: &str) -> Option<CountryCode> {
    let start = text.rfind(SHORT_NAME_MARKER)? + SHORT_NAME_MARKER.len();
    let value = text[start..].trim_start_matches(|c: char| c == '"' || c == ':' || c.is_whitespace());
    let code = value.get(..2)?;
    CountryCode::parse(code).ok()
}
