//! Pipeline configuration.

use std::time::Duration;

use crate::domain::MapDetails;

/// Default maximum number of geocode requests in flight.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Default deadline for a single geocode request.
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration parameters for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum number of geocode requests in flight at once.
    /// Never more than the number of stations; zero is treated as one.
    pub max_concurrent: usize,

    /// Deadline for each geocode request. A request that misses it counts
    /// as a failed geocode for its station only.
    pub geocode_timeout: Duration,

    /// Metadata for the map created by the run.
    pub map: MapDetails,
}

impl PipelineConfig {
    /// Create a configuration with default limits.
    pub fn new(map: MapDetails) -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
            map,
        }
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the per-request geocode deadline.
    pub fn with_geocode_timeout(mut self, timeout: Duration) -> Self {
        self.geocode_timeout = timeout;
        self
    }

    /// Effective number of workers for a batch of `stations`.
    pub fn workers_for(&self, stations: usize) -> usize {
        self.max_concurrent.min(stations).max(1)
    }
}
