//! WMO weather code descriptions
//!
//! Maps the closed set of WMO condition codes Open-Meteo reports to
//! human-readable descriptions. Total over all inputs: unknown, absent, or
//! non-numeric codes map to "Unknown".

use serde_json::Value;

/// Description for codes outside the table
pub const UNKNOWN: &str = "Unknown";

/// Maps a WMO weather code to its description
pub fn describe(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "Clear sky",
        Some(1) => "Mainly clear",
        Some(2) => "Partly cloudy",
        Some(3) => "Overcast",
        Some(45) => "Fog",
        Some(48) => "Depositing rime fog",
        Some(51) => "Light drizzle",
        Some(53) => "Moderate drizzle",
        Some(55) => "Dense drizzle",
        Some(56) => "Light freezing drizzle",
        Some(57) => "Dense freezing drizzle",
        Some(61) => "Slight rain",
        Some(63) => "Moderate rain",
        Some(65) => "Heavy rain",
        Some(66) => "Light freezing rain",
        Some(67) => "Heavy freezing rain",
        Some(71) => "Slight snow fall",
        Some(73) => "Moderate snow fall",
        Some(75) => "Heavy snow fall",
        Some(77) => "Snow grains",
        Some(80) => "Slight rain showers",
        Some(81) => "Moderate rain showers",
        Some(82) => "Violent rain showers",
        Some(85) => "Slight snow showers",
        Some(86) => "Heavy snow showers",
        Some(95) => "Thunderstorm",
        Some(96) => "Thunderstorm with slight hail",
        Some(99) => "Thunderstorm with heavy hail",
        _ => UNKNOWN,
    }
}

/// Describes a code cell taken from an aligned record
///
/// Series cells are JSON values; providers report codes as numbers but a
/// short array leaves a null behind, and both map to "Unknown".
pub fn describe_value(code: &Value) -> &'static str {
    describe(code.as_i64())
}
