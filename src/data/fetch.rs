//! HTTP fetcher and provider response schemas
//!
//! One fetcher serves all three providers: it performs a single attempt with
//! a fixed timeout and reports failures as values. Response bodies are
//! decoded into typed structs exactly once, here at the fetch boundary;
//! everything downstream works with the decoded shapes. The error's display
//! string is what the assembler records as that source's error marker.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Timeout applied to every data fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Errors that can occur when fetching provider data
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body arrived but did not decode into the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// HTTP client shared by the forecast, air-quality, and geocoding paths
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Creates a fetcher with the standard 20-second timeout
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            // Builder only fails when no TLS backend is available; the
            // default client still works for plain HTTP test servers
            .unwrap_or_default();
        Self { client }
    }

    /// Performs one GET request and decodes the JSON body
    ///
    /// # Arguments
    /// * `url` - The fully built request URL
    ///
    /// # Returns
    /// * `Ok(T)` - The decoded response
    /// * `Err(FetchError)` - Transport failure, bad status, or undecodable body
    ///
    /// One attempt only; retrying is the caller's business and no caller
    /// here retries.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "issuing provider request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

/// A column-oriented series block as providers send it
///
/// One `time` array plus a parallel value array per requested variable.
/// The variable set is open-ended (the query builder chooses it), so the
/// arrays are kept as a name-keyed map of JSON values. Arrays may be shorter
/// than `time` when the provider truncates; the aligner pads those cells.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesBlock {
    /// Series timestamps in `YYYY-MM-DDTHH:MM` form
    #[serde(default)]
    pub time: Vec<String>,
    /// Variable name → parallel value array
    #[serde(flatten)]
    pub values: BTreeMap<String, Vec<Value>>,
}

/// Current conditions block of the forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherBlock {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Wind speed in km/h
    pub windspeed: Option<f64>,
    /// Wind direction in degrees
    pub winddirection: Option<f64>,
    /// WMO weather code
    pub weathercode: Option<i64>,
    /// Observation timestamp, same format as series timestamps
    pub time: Option<String>,
}

/// Decoded forecast provider response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Time zone the provider resolved for the series
    pub timezone: Option<String>,
    /// Elevation of the grid cell in meters
    pub elevation: Option<f64>,
    /// Provider-side generation duration in milliseconds
    pub generationtime_ms: Option<f64>,
    /// Current conditions
    pub current_weather: Option<CurrentWeatherBlock>,
    /// Hourly series block
    pub hourly: Option<SeriesBlock>,
    /// Daily series block
    pub daily: Option<SeriesBlock>,
}

/// Decoded air-quality provider response
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    /// Hourly pollutant series block
    pub hourly: Option<SeriesBlock>,
}

/// One geocoding result row
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResult {
    /// Place name
    pub name: String,
    /// First-level administrative area
    pub admin1: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

/// Decoded geocoding provider response
///
/// The provider omits `results` entirely when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResponse {
    /// Matching places, best first
    #[serde(default)]
    pub results: Vec<GeoResult>,
}
