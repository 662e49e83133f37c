//! Ground station mapper.
//!
//! Fetches NASA ground stations from the Satellite Situation Center,
//! reverse geocodes each station to find its country, publishes a flag
//! marker per station on a hosted map, and returns every station as a
//! JSON record.

pub mod config;
pub mod directory;
pub mod domain;
pub mod geocode;
pub mod maps;
pub mod pipeline;
