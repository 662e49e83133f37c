//! Hosted map publishing.
//!
//! A run creates a single map and adds one flag marker per station whose
//! country could be determined. Marker inserts are independent of each
//! other; a failed insert never blocks the next one.

mod client;
mod error;
mod kml;
mod types;

pub use client::{MapPublisher, MapsConfig};
pub use error::MapError;
pub use kml::{MARKER_DESCRIPTION, escape_xml, station_placemark};
