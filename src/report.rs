//! Aggregate report assembly
//!
//! Orchestrates the whole pipeline for one coordinate: builds both data
//! URLs, issues the forecast and air-quality fetches concurrently, aligns
//! the three series, enriches daily rows, derives the alert block, and
//! captures per-source failures. A failed source empties only its own slice
//! of the payload; the result is always structurally complete.

use chrono::{NaiveDateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::data::fetch::{AirQualityResponse, ForecastResponse};
use crate::data::{alerts, codes, query, series, timezone};
use crate::data::{
    AggregatePayload, Coordinate, CurrentConditions, Fetcher, Record, SourceZone,
};

/// Daily cells that hold provider timestamps needing IST conversion
const DAILY_TIME_FIELDS: [&str; 2] = ["sunrise", "sunset"];

/// Builds aggregate weather reports for a coordinate
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    fetcher: Fetcher,
    forecast_base: String,
    air_quality_base: String,
    full_hourly: bool,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Creates a builder against the public Open-Meteo endpoints
    pub fn new() -> Self {
        Self {
            fetcher: Fetcher::new(),
            forecast_base: query::FORECAST_BASE_URL.to_string(),
            air_quality_base: query::AIR_QUALITY_BASE_URL.to_string(),
            full_hourly: false,
        }
    }

    /// Creates a builder with custom base URLs (for testing)
    pub fn with_base_urls(
        forecast_base: impl Into<String>,
        air_quality_base: impl Into<String>,
    ) -> Self {
        Self {
            fetcher: Fetcher::new(),
            forecast_base: forecast_base.into(),
            air_quality_base: air_quality_base.into(),
            full_hourly: false,
        }
    }

    /// Opts into the full hourly range instead of the first 24 rows
    pub fn full_hourly(mut self, full: bool) -> Self {
        self.full_hourly = full;
        self
    }

    /// Runs one aggregation for the given coordinate
    ///
    /// The two data fetches have no dependency on each other and run
    /// concurrently. Neither failure aborts the other: each source's error
    /// is recorded under its own key and its fields keep their empty
    /// defaults.
    pub async fn assemble(&self, location: &Coordinate) -> AggregatePayload {
        let forecast_url =
            query::forecast_url(&self.forecast_base, location.latitude, location.longitude);
        let air_quality_url =
            query::air_quality_url(&self.air_quality_base, location.latitude, location.longitude);

        let (forecast, air) = futures::join!(
            self.fetcher.fetch_json::<ForecastResponse>(&forecast_url),
            self.fetcher.fetch_json::<AirQualityResponse>(&air_quality_url),
        );

        let mut payload = AggregatePayload::empty(location.clone(), forecast_url, air_quality_url);

        match forecast {
            Ok(response) => {
                self.apply_forecast(&mut payload, response, Utc::now().naive_utc());
            }
            Err(err) => {
                warn!(error = %err, place = %location.name, "forecast source failed");
                payload.errors.forecast = Some(err.to_string());
            }
        }

        match air {
            Ok(response) => {
                if let Some(hourly) = response.hourly {
                    payload.air_quality =
                        series::align(&hourly, Some(series::AIR_QUALITY_CAP), SourceZone::Utc);
                }
            }
            Err(err) => {
                warn!(error = %err, place = %location.name, "air-quality source failed");
                payload.errors.air = Some(err.to_string());
            }
        }

        info!(
            place = %location.name,
            hourly = payload.hourly.len(),
            daily = payload.daily.len(),
            air_quality = payload.air_quality.len(),
            "assembled aggregate report"
        );
        payload
    }

    /// Fills the forecast-owned payload fields from a decoded response
    fn apply_forecast(
        &self,
        payload: &mut AggregatePayload,
        response: ForecastResponse,
        now: NaiveDateTime,
    ) {
        payload.meta.timezone = response.timezone;
        payload.meta.elevation = response.elevation;
        payload.meta.generation_time_ms = response.generationtime_ms;

        let hourly_cap = if self.full_hourly {
            None
        } else {
            Some(series::HOURLY_CAP)
        };
        if let Some(hourly) = &response.hourly {
            payload.hourly = series::align(hourly, hourly_cap, SourceZone::Utc);
        }
        if let Some(daily) = &response.daily {
            payload.daily = series::align(daily, Some(series::DAILY_CAP), SourceZone::Utc);
            enrich_daily(&mut payload.daily);
        }

        let current_temperature = response
            .current_weather
            .as_ref()
            .and_then(|current| current.temperature);
        payload.today = Some(alerts::derive(
            current_temperature,
            response.hourly.as_ref(),
            now,
        ));

        if let Some(current) = response.current_weather {
            payload.current = Some(CurrentConditions {
                temperature: current.temperature,
                windspeed: current.windspeed,
                winddirection: current.winddirection,
                weathercode: current.weathercode,
                description: codes::describe(current.weathercode).to_string(),
                time: timezone::convert(current.time.as_deref().unwrap_or(""), SourceZone::Utc),
            });
        }
    }
}

/// Enriches aligned daily rows in place
///
/// Sunrise and sunset cells are provider timestamps and get the same IST
/// conversion as the row time; rows carrying a weather code get a
/// description derived from that row's own code.
fn enrich_daily(records: &mut [Record]) {
    for record in records.iter_mut() {
        for field in DAILY_TIME_FIELDS {
            let converted = record
                .values
                .get(field)
                .and_then(Value::as_str)
                .map(|raw| timezone::convert(raw, SourceZone::Utc));
            if let Some(converted) = converted {
                record
                    .values
                    .insert(field.to_string(), Value::String(converted));
            }
        }

        let description = record
            .values
            .get("weathercode")
            .map(codes::describe_value);
        if let Some(description) = description {
            record.values.insert(
                "description".to_string(),
                Value::String(description.to_string()),
            );
        }
    }
}
