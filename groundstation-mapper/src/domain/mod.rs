//! Domain types for the ground station mapper.
//!
//! Station records, country codes and map resources. Validated types
//! enforce their invariants at construction time.

mod country;
mod map;
mod station;

pub use country::{CountryCode, InvalidCountryCode};
pub use map::{
    DEFAULT_MAP_SUMMARY, DEFAULT_MAP_TITLE, MapDetails, MapHandle, MarkerFeature, marker_title,
};
pub use station::{RESERVED_FIELDS, StationRecord, format_coordinate};
