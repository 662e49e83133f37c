//! The station mapping pipeline.
//!
//! A run moves through fixed stages: fetch the station list, geocode every
//! station concurrently, create the map, then walk the stations in order to
//! publish markers and serialize records. Only the fetch and map creation
//! can fail the run; every other failure is confined to one station.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{MarkerFeature, StationRecord};
use crate::geocode::{GeocodeError, extract_country_code};

use super::config::PipelineConfig;
use super::error::PipelineError;
use super::provider::{Geocoder, MapSink, StationSource};

/// Result of a successful run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// One JSON record per fetched station, in fetch order.
    pub records: Vec<String>,
    /// Markers published on the run's map.
    pub markers: Vec<MarkerFeature>,
    /// Stations whose geocode request failed or timed out.
    pub geocode_failures: usize,
    /// Stations geocoded successfully but without a country code.
    pub unresolved: usize,
    /// Stations whose marker could not be published.
    pub marker_failures: usize,
}

impl PipelineOutput {
    fn with_capacity(stations: usize) -> Self {
        Self {
            records: Vec::with_capacity(stations),
            ..Self::default()
        }
    }

    /// Consume the output, keeping only the JSON records.
    pub fn into_records(self) -> Vec<String> {
        self.records
    }
}

/// Station mapping pipeline.
pub struct Pipeline<S, G, M> {
    source: S,
    geocoder: G,
    maps: M,
    config: PipelineConfig,
}

impl<S, G, M> Pipeline<S, G, M>
where
    S: StationSource,
    G: Geocoder,
    M: MapSink,
{
    /// Create a new pipeline.
    pub fn new(source: S, geocoder: G, maps: M, config: PipelineConfig) -> Self {
        Self {
            source,
            geocoder,
            maps,
            config,
        }
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline once.
    ///
    /// On success the output holds exactly one record per fetched station,
    /// in fetch order, however many geocode or marker calls failed.
    pub async fn run(&self) -> Result<PipelineOutput, PipelineError> {
        let stations = self.source.fetch_all_stations().await?;
        info!(count = stations.len(), "Fetched ground stations");

        let responses = self.geocode_all(&stations).await;

        let map = self
            .maps
            .create_map(&self.config.map)
            .await
            .map_err(PipelineError::MapCreate)?;
        info!(map = %map.id, title = %self.config.map.title, "Created map");

        let mut output = PipelineOutput::with_capacity(stations.len());

        for (station, response) in stations.iter().zip(responses) {
            match response {
                Ok(body) => match extract_country_code(&body) {
                    Some(code) => {
                        match self
                            .maps
                            .create_marker(&map, &code, station.latitude, station.longitude)
                            .await
                        {
                            Ok(marker) => output.markers.push(marker),
                            Err(e) => {
                                warn!(
                                    station = %station.id,
                                    code = %code,
                                    error = %e,
                                    "Failed to create marker, skipping"
                                );
                                output.marker_failures += 1;
                            }
                        }
                    }
                    None => {
                        debug!(station = %station.id, "No country code in geocode response");
                        output.unresolved += 1;
                    }
                },
                Err(e) => {
                    warn!(station = %station.id, error = %e, "Geocode failed, no marker");
                    output.geocode_failures += 1;
                }
            }

            output.records.push(serialize(station)?);
        }

        info!(
            records = output.records.len(),
            markers = output.markers.len(),
            geocode_failures = output.geocode_failures,
            unresolved = output.unresolved,
            marker_failures = output.marker_failures,
            "Pipeline complete"
        );

        Ok(output)
    }

    /// Geocode every station with bounded concurrency.
    ///
    /// Results come back in station order regardless of completion order.
    async fn geocode_all(&self, stations: &[StationRecord]) -> Vec<Result<String, GeocodeError>> {
        let workers = self.config.workers_for(stations.len());
        let deadline = self.config.geocode_timeout;
        debug!(stations = stations.len(), workers, "Dispatching geocode requests");

        stream::iter(stations)
            .map(|station| async move {
                let request = self
                    .geocoder
                    .reverse_geocode(station.latitude, station.longitude);
                match tokio::time::timeout(deadline, request).await {
                    Ok(result) => result,
                    Err(_) => Err(GeocodeError::Timeout { after: deadline }),
                }
            })
            .buffered(workers)
            .collect()
            .await
    }
}

fn serialize(station: &StationRecord) -> Result<String, PipelineError> {
    station.to_json().map_err(|e| PipelineError::Serialize {
        station: station.id.clone(),
        message: e.to_string(),
    })
}
