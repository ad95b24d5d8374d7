//! Core data models for Meteopoint
//!
//! This module contains the data types used throughout the aggregation
//! pipeline: the selected coordinate, normalized time-series records, the
//! derived alert block, and the final aggregate payload handed to consumers.

pub mod alerts;
pub mod codes;
pub mod fetch;
pub mod geocoding;
pub mod place;
pub mod query;
pub mod series;
pub mod timezone;

pub use fetch::{FetchError, Fetcher};
pub use geocoding::GeocodingClient;
pub use place::{all_places, default_place, get_place_by_id};
pub use timezone::SourceZone;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A geographic point selected for one aggregation request
///
/// Immutable once selected: the assembler only reads it. The display name and
/// region are free-form and purely informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90..90)
    pub latitude: f64,
    /// Longitude in degrees (-180..180)
    pub longitude: f64,
    /// Human-readable place name
    pub name: String,
    /// Administrative region the place belongs to
    pub region: String,
}

impl Coordinate {
    /// Creates a coordinate with a display name and region
    pub fn new(
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            region: region.into(),
        }
    }
}

/// A named place with fixed coordinates
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the PLACES array. Convert to an owned [`Coordinate`] via [`Place::coordinate`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Place {
    /// Unique identifier for the place
    pub id: &'static str,
    /// Human-readable name of the place
    pub name: &'static str,
    /// Administrative region (state) of the place
    pub region: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

impl Place {
    /// Converts this static place into an owned request coordinate
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude, self.name, self.region)
    }
}

/// One row of a normalized time series
///
/// Holds the timestamp (already converted to IST, string form) plus one entry
/// per requested variable. Cells are `Value::Null` when the source array was
/// shorter than the row index. Serializes flat, so a record looks like
/// `{"time": "...", "temperature_2m": 21.4, ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Converted timestamp in `YYYY-MM-DD HH:MM:SS` IST form
    pub time: String,
    /// Variable name → cell value for this row
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

/// Current conditions reported by the forecast provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Wind speed in km/h
    pub windspeed: Option<f64>,
    /// Wind direction in degrees
    pub winddirection: Option<f64>,
    /// WMO weather code
    pub weathercode: Option<i64>,
    /// Human-readable description of the weather code
    pub description: String,
    /// Observation time converted to IST
    pub time: String,
}

/// Metadata about one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Exact forecast request URL, kept verbatim for debugging
    pub forecast_url: String,
    /// Exact air-quality request URL, kept verbatim for debugging
    pub air_quality_url: String,
    /// Time zone the provider reported for the series
    pub timezone: Option<String>,
    /// Elevation of the point in meters
    pub elevation: Option<f64>,
    /// Provider-side generation duration in milliseconds
    pub generation_time_ms: Option<f64>,
}

/// Derived alert flags for the current day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayAlerts {
    /// Current temperature the temperature alert was derived from
    pub temperature: Option<f64>,
    /// Precipitation probability at the hour nearest to now
    pub precipitation_probability: Option<f64>,
    /// Temperature at or above 35 C, or at or below 10 C
    pub temp_alert: bool,
    /// Precipitation probability at or above 85 percent
    pub precip_alert: bool,
    /// Logical OR of the individual alerts
    pub alert: bool,
}

/// Per-source error markers
///
/// A field is `Some(reason)` exactly when that source's portion of the
/// payload fell back to empty defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceErrors {
    /// Error captured from the forecast fetch, if it failed
    pub forecast: Option<String>,
    /// Error captured from the air-quality fetch, if it failed
    pub air: Option<String>,
}

/// The aggregate result of one pipeline run
///
/// Always structurally complete: every field is present even when both
/// upstream sources failed, with empty vectors and null scalars standing in
/// for the missing data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatePayload {
    /// The coordinate this report is for
    pub location: Coordinate,
    /// Request URLs and provider metadata
    pub meta: ReportMeta,
    /// Current conditions, if the forecast fetch succeeded
    pub current: Option<CurrentConditions>,
    /// Hourly forecast rows (first 24 unless full-range was requested)
    pub hourly: Vec<Record>,
    /// Daily forecast rows (first 7), enriched with sunrise/sunset and description
    pub daily: Vec<Record>,
    /// Hourly air-quality rows (first 24)
    pub air_quality: Vec<Record>,
    /// Derived alert block, if the forecast fetch succeeded
    pub today: Option<TodayAlerts>,
    /// Per-source failure reasons
    pub errors: SourceErrors,
}

impl AggregatePayload {
    /// Creates the all-defaults payload every aggregation starts from
    ///
    /// The assembler fills in whatever each source delivered; anything left
    /// untouched keeps these empty defaults.
    pub fn empty(location: Coordinate, forecast_url: String, air_quality_url: String) -> Self {
        Self {
            location,
            meta: ReportMeta {
                forecast_url,
                air_quality_url,
                timezone: None,
                elevation: None,
                generation_time_ms: None,
            },
            current: None,
            hourly: Vec::new(),
            daily: Vec::new(),
            air_quality: Vec::new(),
            today: None,
            errors: SourceErrors::default(),
        }
    }
}

/// One typeahead geocoding match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMatch {
    /// Place name
    pub name: String,
    /// First-level administrative area, when the provider reports one
    pub region: Option<String>,
    /// Country name, when the provider reports one
    pub country: Option<String>,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(23.5204, 87.3119, "Durgapur", "West Bengal");
        assert!((coord.latitude - 23.5204).abs() < 0.0001);
        assert!((coord.longitude - 87.3119).abs() < 0.0001);
        assert_eq!(coord.name, "Durgapur");
        assert_eq!(coord.region, "West Bengal");
    }

    #[test]
    fn test_place_to_coordinate() {
        let place = Place {
            id: "durgapur",
            name: "Durgapur",
            region: "West Bengal",
            latitude: 23.5204,
            longitude: 87.3119,
        };
        let coord = place.coordinate();
        assert_eq!(coord.name, "Durgapur");
        assert!((coord.latitude - place.latitude).abs() < 0.0001);
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut values = Map::new();
        values.insert("temperature_2m".to_string(), serde_json::json!(21.4));
        values.insert("weathercode".to_string(), Value::Null);
        let record = Record {
            time: "2024-01-01 05:30:00".to_string(),
            values,
        };

        let json = serde_json::to_value(&record).expect("Failed to serialize Record");
        assert_eq!(json["time"], "2024-01-01 05:30:00");
        assert_eq!(json["temperature_2m"], 21.4);
        assert!(json["weathercode"].is_null());
        // Flattened: no nested "values" key in the output
        assert!(json.get("values").is_none());
    }

    #[test]
    fn test_record_roundtrip() {
        let mut values = Map::new();
        values.insert("pm2_5".to_string(), serde_json::json!(12.0));
        let record = Record {
            time: "2024-01-01 05:30:00".to_string(),
            values,
        };

        let json = serde_json::to_string(&record).expect("Failed to serialize Record");
        let back: Record = serde_json::from_str(&json).expect("Failed to deserialize Record");
        assert_eq!(back.time, record.time);
        assert_eq!(back.values.get("pm2_5"), record.values.get("pm2_5"));
    }

    #[test]
    fn test_empty_payload_is_structurally_complete() {
        let payload = AggregatePayload::empty(
            default_place().coordinate(),
            "http://forecast".to_string(),
            "http://air".to_string(),
        );

        let json = serde_json::to_value(&payload).expect("Failed to serialize payload");
        for key in [
            "location",
            "meta",
            "current",
            "hourly",
            "daily",
            "air_quality",
            "today",
            "errors",
        ] {
            assert!(json.get(key).is_some(), "missing top-level key {}", key);
        }
        assert!(json["current"].is_null());
        assert!(json["today"].is_null());
        assert_eq!(json["hourly"].as_array().map(Vec::len), Some(0));
        assert!(json["errors"]["forecast"].is_null());
        assert!(json["errors"]["air"].is_null());
        assert_eq!(json["meta"]["forecast_url"], "http://forecast");
    }

    #[test]
    fn test_source_errors_default_is_all_none() {
        let errors = SourceErrors::default();
        assert!(errors.forecast.is_none());
        assert!(errors.air.is_none());
    }
}
