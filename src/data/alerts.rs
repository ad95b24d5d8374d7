//! Derived alert flags
//!
//! Computes the "today" alert block from current conditions and the near-term
//! hourly forecast: a temperature alert for extremes, a precipitation alert
//! when rain is likely at the hour nearest to now, and their OR.

use chrono::NaiveDateTime;
use serde_json::Value;

use super::fetch::SeriesBlock;
use super::TodayAlerts;

/// Temperature at or above this fires the heat side of the alert (Celsius)
pub const TEMP_HIGH_THRESHOLD: f64 = 35.0;

/// Temperature at or below this fires the cold side of the alert (Celsius)
pub const TEMP_LOW_THRESHOLD: f64 = 10.0;

/// Precipitation probability at or above this fires the rain alert (percent)
pub const PRECIP_THRESHOLD: f64 = 85.0;

/// Provider format of hourly timestamps
const PROVIDER_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Hourly variable holding the precipitation probability
const PRECIP_FIELD: &str = "precipitation_probability";

/// Derives the alert block for the current day
///
/// # Arguments
/// * `temperature` - Current temperature, if the forecast reported one
/// * `hourly` - Raw (pre-alignment) hourly block; timestamps must be in the
///   same zone as `now`
/// * `now` - The instant to find the nearest hourly index for
///
/// The precipitation probability is read at the index whose timestamp is
/// closest to `now` by absolute difference, ties going to the first
/// occurrence; it stays null when the series is empty or the cell is not
/// numeric. Each alert that cannot be evaluated reports false.
pub fn derive(
    temperature: Option<f64>,
    hourly: Option<&SeriesBlock>,
    now: NaiveDateTime,
) -> TodayAlerts {
    let precipitation_probability = hourly
        .and_then(|block| nearest_index(&block.time, now).map(|index| (block, index)))
        .and_then(|(block, index)| {
            block
                .values
                .get(PRECIP_FIELD)
                .and_then(|column| column.get(index))
                .and_then(Value::as_f64)
        });

    let temp_alert = temperature
        .map(|t| t >= TEMP_HIGH_THRESHOLD || t <= TEMP_LOW_THRESHOLD)
        .unwrap_or(false);
    let precip_alert = precipitation_probability
        .map(|p| p >= PRECIP_THRESHOLD)
        .unwrap_or(false);

    TodayAlerts {
        temperature,
        precipitation_probability,
        temp_alert,
        precip_alert,
        alert: temp_alert || precip_alert,
    }
}

/// Finds the index of the timestamp closest to `now`
///
/// Unparseable entries are skipped; ties keep the earlier index.
fn nearest_index(times: &[String], now: NaiveDateTime) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, raw) in times.iter().enumerate() {
        let Ok(parsed) = NaiveDateTime::parse_from_str(raw, PROVIDER_FORMAT) else {
            continue;
        };
        let distance = (parsed - now).num_seconds().abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
