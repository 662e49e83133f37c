//! Station mapping pipeline.
//!
//! Ties the directory, geocoder and map publisher together:
//! fetch → geocode (concurrently) → parse → publish → serialize.
//!
//! The pipeline is generic over its collaborators so it can be exercised
//! with in-memory fakes.

mod config;
mod error;
mod provider;
mod runner;


pub use config::{DEFAULT_GEOCODE_TIMEOUT, DEFAULT_MAX_CONCURRENT, PipelineConfig};
pub use error::PipelineError;
pub use provider::{Geocoder, MapSink, StationSource};
pub use runner::{Pipeline, PipelineOutput};
