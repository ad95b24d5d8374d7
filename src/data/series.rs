//! Column-to-row series alignment
//!
//! Providers send each series as one `time` array plus N parallel value
//! arrays. This module turns that into row-oriented [`Record`]s: one record
//! per timestamp, in source order, with the timestamp converted to IST. A
//! value array shorter than the time array pads its missing cells with null
//! instead of dropping the row or failing the series.

use serde_json::{Map, Value};

use super::fetch::SeriesBlock;
use super::timezone::{self, SourceZone};
use super::Record;

/// Cap applied to hourly forecast rows unless the caller opts out
pub const HOURLY_CAP: usize = 24;

/// Cap applied to daily forecast rows
pub const DAILY_CAP: usize = 7;

/// Cap applied to hourly air-quality rows
pub const AIR_QUALITY_CAP: usize = 24;

/// Aligns a column-oriented block into row records
///
/// # Arguments
/// * `block` - The decoded series block
/// * `cap` - Maximum number of rows to emit, or `None` for the full range
/// * `zone` - Zone of the block's timestamps, forwarded to the converter
///
/// # Returns
/// Up to `min(cap, time.len())` records preserving source order. Each record
/// carries one entry per variable in the block; cells whose source array ran
/// out are `Value::Null`.
pub fn align(block: &SeriesBlock, cap: Option<usize>, zone: SourceZone) -> Vec<Record> {
    let rows = match cap {
        Some(cap) => block.time.len().min(cap),
        None => block.time.len(),
    };

    let mut records = Vec::with_capacity(rows);
    for (index, raw_time) in block.time.iter().take(rows).enumerate() {
        let mut values = Map::new();
        for (name, column) in &block.values {
            let cell = column.get(index).cloned().unwrap_or(Value::Null);
            values.insert(name.clone(), cell);
        }
        records.push(Record {
            time: timezone::convert(raw_time, zone),
            values,
        });
    }
    records
}
