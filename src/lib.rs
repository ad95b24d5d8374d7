//! Meteopoint Library
//!
//! Aggregates current, hourly, and daily weather and air-quality data for a
//! geographic point from Open-Meteo, normalized into row records with IST
//! timestamps and derived alert flags. This module exposes the pipeline,
//! the CLI parser, and the keep-alive task for use in integration tests.

pub mod cli;
pub mod data;
pub mod keepalive;
pub mod report;
