//! Ground station records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names owned by [`StationRecord`] itself.
///
/// Descriptive fields with these names are dropped so the flattened JSON
/// never contains duplicate keys.
pub const RESERVED_FIELDS: [&str; 4] = ["id", "name", "latitude", "longitude"];

/// A ground station as returned by the station directory.
///
/// Immutable once fetched. Serializes to a flat JSON object: the four core
/// fields followed by any additional descriptive fields from the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Directory identifier (e.g. `"WPS"`).
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Additional descriptive fields returned by the directory.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StationRecord {
    /// Create a record with no additional fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            extra: Map::new(),
        }
    }

    /// Attach a descriptive field. Reserved field names are ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_FIELDS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Serialize the record as a single-line JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Format a coordinate as a decimal float.
///
/// Always includes a fractional part and never uses exponent notation, so
/// `34.0` renders as `"34.0"` and `1e-7` as `"0.0000001"`.
pub fn format_coordinate(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}
