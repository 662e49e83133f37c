//! Collaborator traits for the pipeline.
//!
//! These abstractions let the pipeline run against the real HTTP clients or
//! against in-memory fakes in tests.

use std::future::Future;

use crate::directory::{DirectoryClient, DirectoryError};
use crate::domain::{CountryCode, MapDetails, MapHandle, MarkerFeature, StationRecord};
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::maps::{MapError, MapPublisher};

/// Source of the station list.
pub trait StationSource {
    /// Fetch every station, in directory order.
    fn fetch_all_stations(&self) -> impl Future<Output = Result<Vec<StationRecord>, DirectoryError>> + Send;
}

/// Reverse geocoder returning raw response text.
pub trait Geocoder {
    fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<String, GeocodeError>> + Send;
}

/// Destination for the run's map and markers.
pub trait MapSink {
    /// Create the map for this run.
    fn create_map(&self, details: &MapDetails) -> impl Future<Output = Result<MapHandle, MapError>> + Send;

    /// Add a station marker to the map.
    fn create_marker(
        &self,
        map: &MapHandle,
        code: &CountryCode,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<MarkerFeature, MapError>> + Send;
}

impl StationSource for DirectoryClient {
    async fn fetch_all_stations(&self) -> Result<Vec<StationRecord>, DirectoryError> {
        self.fetch_all().await
    }
}

impl Geocoder for GeocodeClient {
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        GeocodeClient::reverse_geocode(self, latitude, longitude).await
    }
}

impl MapSink for MapPublisher {
    async fn create_map(&self, details: &MapDetails) -> Result<MapHandle, MapError> {
        MapPublisher::create_map(self, details).await
    }

    async fn create_marker(
        &self,
        map: &MapHandle,
        code: &CountryCode,
        latitude: f64,
        longitude: f64,
    ) -> Result<MarkerFeature, MapError> {
        MapPublisher::create_marker(self, map, code, latitude, longitude).await
    }
}
