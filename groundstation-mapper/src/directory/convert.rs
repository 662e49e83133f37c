//! Conversion from directory DTOs to station records.
//!
//! A station that cannot be converted invalidates the whole response:
//! every fetched station must appear in the output, so there is no
//! skip-and-continue path here.

use crate::domain::{RESERVED_FIELDS, StationRecord};

use super::types::GroundStationDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Station has an empty identifier
    #[error("station at position {0} has an empty id")]
    EmptyId(usize),

    /// Coordinate is NaN or infinite
    #[error("station {id}: {field} is not a finite number")]
    NonFinite { id: String, field: &'static str },

    /// Latitude outside [-90, 90]
    #[error("station {id}: latitude {latitude} out of range")]
    LatitudeOutOfRange { id: String, latitude: f64 },
}

/// Convert all stations, preserving directory order.
pub fn convert_stations(dtos: Vec<GroundStationDto>) -> Result<Vec<StationRecord>, ConversionError> {
    dtos.into_iter()
        .enumerate()
        .map(|(position, dto)| convert_station(position, dto))
        .collect()
}

/// Convert a single station.
pub fn convert_station(position: usize, dto: GroundStationDto) -> Result<StationRecord, ConversionError> {
    let id = dto.id.trim().to_string();
    if id.is_empty() {
        return Err(ConversionError::EmptyId(position));
    }

    let latitude = dto.location.latitude;
    let longitude = dto.location.longitude;

    if !latitude.is_finite() {
        return Err(ConversionError::NonFinite {
            id,
            field: "latitude",
        });
    }
    if !longitude.is_finite() {
        return Err(ConversionError::NonFinite {
            id,
            field: "longitude",
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ConversionError::LatitudeOutOfRange { id, latitude });
    }

    let mut extra = dto.extra;
    extra.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));

    Ok(StationRecord {
        id,
        name: dto.name,
        latitude,
        longitude,
        extra,
    })
}
