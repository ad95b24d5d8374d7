//! Outbound request builders for the Open-Meteo APIs
//!
//! Builders are pure: they turn a coordinate (or search text) into the exact
//! request URL, and the assembler records that URL verbatim in the payload
//! metadata. All data queries pin `timeformat=iso8601&timezone=UTC` so the
//! time converter knows the source zone of every series timestamp.

/// Base URL for the Open-Meteo forecast API
pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Base URL for the Open-Meteo air quality API
pub const AIR_QUALITY_BASE_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Base URL for the Open-Meteo geocoding API
pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Days of forecast requested (today plus a week ahead)
pub const FORECAST_DAYS: u8 = 8;

/// Maximum number of typeahead matches requested
pub const GEOCODING_COUNT: u8 = 6;

/// Hourly forecast variables requested, in provider naming
pub const HOURLY_FIELDS: [&str; 21] = [
    "temperature_2m",
    "relativehumidity_2m",
    "dewpoint_2m",
    "apparent_temperature",
    "precipitation_probability",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "weathercode",
    "cloudcover",
    "visibility",
    "windspeed_10m",
    "winddirection_10m",
    "windgusts_10m",
    "pressure_msl",
    "surface_pressure",
    "uv_index",
    "is_day",
    "shortwave_radiation",
    "soil_temperature_0cm",
];

/// Daily forecast variables requested, in provider naming
pub const DAILY_FIELDS: [&str; 16] = [
    "weathercode",
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "sunrise",
    "sunset",
    "uv_index_max",
    "precipitation_sum",
    "rain_sum",
    "showers_sum",
    "snowfall_sum",
    "precipitation_hours",
    "precipitation_probability_max",
    "windspeed_10m_max",
    "windgusts_10m_max",
];

/// Hourly air-quality variables requested: pollutants, pollen, and AQI
pub const AIR_QUALITY_FIELDS: [&str; 29] = [
    "pm10",
    "pm2_5",
    "carbon_monoxide",
    "nitrogen_dioxide",
    "sulphur_dioxide",
    "ozone",
    "aerosol_optical_depth",
    "dust",
    "uv_index",
    "uv_index_clear_sky",
    "ammonia",
    "alder_pollen",
    "birch_pollen",
    "grass_pollen",
    "mugwort_pollen",
    "olive_pollen",
    "ragweed_pollen",
    "european_aqi",
    "european_aqi_pm2_5",
    "european_aqi_pm10",
    "european_aqi_no2",
    "european_aqi_o3",
    "european_aqi_so2",
    "us_aqi",
    "us_aqi_pm2_5",
    "us_aqi_pm10",
    "us_aqi_no2",
    "us_aqi_o3",
    "us_aqi_so2",
];

/// Builds the forecast request URL for a coordinate
///
/// Requests current conditions plus the fixed hourly and daily variable
/// lists over an 8-day horizon, with no past days.
pub fn forecast_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}?latitude={}&longitude={}&current_weather=true&hourly={}&daily={}&timeformat=iso8601&timezone=UTC&forecast_days={}",
        base,
        latitude,
        longitude,
        HOURLY_FIELDS.join(","),
        DAILY_FIELDS.join(","),
        FORECAST_DAYS,
    )
}

/// Builds the air-quality request URL for a coordinate
pub fn air_quality_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}?latitude={}&longitude={}&hourly={}&timeformat=iso8601&timezone=UTC",
        base,
        latitude,
        longitude,
        AIR_QUALITY_FIELDS.join(","),
    )
}

/// Builds the typeahead geocoding URL for a name-prefix query
///
/// The query text is percent-encoded; everything else in the URL is fixed.
pub fn geocoding_url(base: &str, name: &str) -> String {
    let params = [
        ("name", name),
        ("count", "6"),
        ("language", "en"),
        ("format", "json"),
    ];
    match reqwest::Url::parse_with_params(base, &params) {
        Ok(url) => url.to_string(),
        // Base URLs are compile-time or test constants; a bad one still
        // yields a deterministic descriptor for the error message
        Err(_) => format!(
            "{}?name={}&count={}&language=en&format=json",
            base, name, GEOCODING_COUNT
        ),
    }
}
