//! Timestamp conversion to Indian Standard Time
//!
//! Provider timestamps arrive as `YYYY-MM-DDTHH:MM` strings in the zone the
//! query asked for. This module renders them as `YYYY-MM-DD HH:MM:SS` in IST
//! (UTC+5:30, no daylight saving). Conversion never fails: empty input maps
//! to a sentinel and unparseable input is passed through unchanged, so a bad
//! timestamp degrades one cell rather than the whole pipeline.

use chrono::{Duration, NaiveDateTime};

/// Sentinel returned for empty timestamps
pub const MISSING: &str = "N/A";

/// IST offset from UTC in seconds (+5:30)
const IST_OFFSET_SECS: i64 = 5 * 3600 + 30 * 60;

/// Format providers use for series timestamps
const PROVIDER_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format of the converted output
const IST_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The zone a provider timestamp is expressed in
///
/// Determined by the `timezone=` parameter the query builder used; the
/// converter has no way to tell from the string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceZone {
    /// Timestamp is UTC (`timezone=UTC` queries); shift by +5:30
    Utc,
    /// Timestamp is already IST; reformat without shifting
    Ist,
}

/// Converts a provider timestamp to IST display form
///
/// # Arguments
/// * `timestamp` - Provider timestamp in `YYYY-MM-DDTHH:MM` form
/// * `zone` - The zone the timestamp is expressed in
///
/// # Returns
/// * `"N/A"` when the input is empty
/// * The input unchanged when it does not parse
/// * The IST rendering (`YYYY-MM-DD HH:MM:SS`) otherwise
pub fn convert(timestamp: &str, zone: SourceZone) -> String {
    if timestamp.is_empty() {
        return MISSING.to_string();
    }

    match NaiveDateTime::parse_from_str(timestamp, PROVIDER_FORMAT) {
        Ok(parsed) => {
            let in_ist = match zone {
                SourceZone::Utc => parsed + Duration::seconds(IST_OFFSET_SECS),
                SourceZone::Ist => parsed,
            };
            in_ist.format(IST_FORMAT).to_string()
        }
        Err(_) => timestamp.to_string(),
    }
}
