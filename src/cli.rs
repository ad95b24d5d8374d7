//! Command-line interface parsing for Meteopoint
//!
//! This module handles parsing of CLI arguments using clap: coordinate
//! selection (named place, explicit lat/lon, or the default), report
//! options, and the typeahead `search` subcommand.

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::data::{default_place, get_place_by_id, Coordinate};

/// Error types for CLI argument resolution
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified place id is not in the static table
    #[error("Unknown place: '{0}'. Valid places: durgapur, kolkata, delhi, mumbai, chennai, bengaluru, hyderabad, pune, asansol")]
    UnknownPlace(String),

    /// An explicit coordinate was outside the valid ranges
    #[error("Coordinate out of range: latitude must be in -90..90 and longitude in -180..180 (got {lat}, {lon})")]
    CoordinateOutOfRange { lat: f64, lon: f64 },
}

/// Meteopoint - weather and air quality reports from Open-Meteo
#[derive(Parser, Debug)]
#[command(name = "meteopoint")]
#[command(about = "Current weather, forecast, and air quality for a location")]
#[command(version)]
pub struct Cli {
    /// Report on a named place (e.g. "durgapur", "kolkata")
    #[arg(long, value_name = "ID", conflicts_with_all = ["lat", "lon"])]
    pub place: Option<String>,

    /// Latitude of an explicit coordinate
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of an explicit coordinate
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Display name for an explicit coordinate
    #[arg(long, requires = "lat")]
    pub name: Option<String>,

    /// Display region for an explicit coordinate
    #[arg(long, requires = "lat")]
    pub region: Option<String>,

    /// Emit the full hourly range instead of the first 24 rows
    #[arg(long)]
    pub full_hourly: bool,

    /// Start the 10-minute keep-alive ping against this URL
    #[arg(long, value_name = "URL")]
    pub keep_alive: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands beyond the default report
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Typeahead place search against the geocoding provider
    Search {
        /// Free-text name prefix; under 3 characters returns nothing
        query: String,
    },
}

/// Resolves the coordinate the report should be built for
///
/// Precedence: named place, then explicit lat/lon, then the default place.
///
/// # Returns
/// * `Ok(Coordinate)` - The resolved coordinate
/// * `Err(CliError)` - Unknown place id or out-of-range coordinate
pub fn resolve_coordinate(cli: &Cli) -> Result<Coordinate, CliError> {
    if let Some(id) = &cli.place {
        return get_place_by_id(id)
            .map(|place| place.coordinate())
            .ok_or_else(|| CliError::UnknownPlace(id.clone()));
    }

    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(CliError::CoordinateOutOfRange { lat, lon });
            }
            let name = cli.name.clone().unwrap_or_else(|| "Custom location".to_string());
            let region = cli.region.clone().unwrap_or_default();
            Ok(Coordinate::new(lat, lon, name, region))
        }
        _ => Ok(default_place().coordinate()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_uses_default_place() {
        let cli = Cli::parse_from(["meteopoint"]);
        let coord = resolve_coordinate(&cli).unwrap();
        assert_eq!(coord.name, "Durgapur");
        assert_eq!(coord.region, "West Bengal");
    }

    #[test]
    fn test_cli_parse_named_place() {
        let cli = Cli::parse_from(["meteopoint", "--place", "kolkata"]);
        let coord = resolve_coordinate(&cli).unwrap();
        assert_eq!(coord.name, "Kolkata");
    }

    #[test]
    fn test_cli_parse_unknown_place() {
        let cli = Cli::parse_from(["meteopoint", "--place", "atlantis"]);
        let err = resolve_coordinate(&cli).unwrap_err();
        assert!(err.to_string().contains("Unknown place"));
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn test_cli_parse_explicit_coordinate() {
        let cli = Cli::parse_from([
            "meteopoint", "--lat", "12.97", "--lon", "77.59", "--name", "Bengaluru", "--region",
            "Karnataka",
        ]);
        let coord = resolve_coordinate(&cli).unwrap();
        assert!((coord.latitude - 12.97).abs() < 0.0001);
        assert!((coord.longitude - 77.59).abs() < 0.0001);
        assert_eq!(coord.name, "Bengaluru");
        assert_eq!(coord.region, "Karnataka");
    }

    #[test]
    fn test_cli_parse_explicit_coordinate_without_name() {
        let cli = Cli::parse_from(["meteopoint", "--lat", "12.97", "--lon", "77.59"]);
        let coord = resolve_coordinate(&cli).unwrap();
        assert_eq!(coord.name, "Custom location");
        assert_eq!(coord.region, "");
    }

    #[test]
    fn test_cli_parse_negative_coordinates() {
        let cli = Cli::parse_from(["meteopoint", "--lat", "-33.86", "--lon", "-70.66"]);
        let coord = resolve_coordinate(&cli).unwrap();
        assert!((coord.latitude + 33.86).abs() < 0.0001);
        assert!((coord.longitude + 70.66).abs() < 0.0001);
    }

    #[test]
    fn test_cli_rejects_out_of_range_coordinate() {
        let cli = Cli::parse_from(["meteopoint", "--lat", "91.0", "--lon", "0.0"]);
        let err = resolve_coordinate(&cli).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_cli_parse_full_hourly_flag() {
        let cli = Cli::parse_from(["meteopoint", "--full-hourly"]);
        assert!(cli.full_hourly);

        let cli = Cli::parse_from(["meteopoint"]);
        assert!(!cli.full_hourly);
    }

    #[test]
    fn test_cli_parse_search_subcommand() {
        let cli = Cli::parse_from(["meteopoint", "search", "Durg"]);
        match cli.command {
            Some(Command::Search { ref query }) => assert_eq!(query, "Durg"),
            _ => panic!("expected search subcommand"),
        }
    }

    #[test]
    fn test_cli_parse_keep_alive_url() {
        let cli = Cli::parse_from(["meteopoint", "--keep-alive", "https://example.test/ping"]);
        assert_eq!(cli.keep_alive.as_deref(), Some("https://example.test/ping"));
    }
}
