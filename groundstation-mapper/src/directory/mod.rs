//! Ground station directory client.
//!
//! Fetches the list of ground stations (identity plus coordinates) from the
//! NASA Satellite Situation Center web services. The station list is the
//! input of every pipeline run; any failure here aborts the run.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectoryClient, DirectoryConfig, user_agent};
pub use convert::ConversionError;
pub use error::DirectoryError;
pub use types::{GroundStationDto, GroundStationsResponse, LocationDto};
