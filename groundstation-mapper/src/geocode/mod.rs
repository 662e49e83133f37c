//! Reverse geocoding.
//!
//! Turns station coordinates into a country code: the client fetches the
//! raw geocoder response, the parser pulls the country-level
//! `short_name` out of it.

mod client;
mod error;
mod parser;
mod types;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
pub use parser::{country_from_components, extract_country_code, scan_last_short_name};
pub use types::{AddressComponent, GeocodeResponse, GeocodeResult};
