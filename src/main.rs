//! Meteopoint - weather and air quality reports from Open-Meteo
//!
//! Runs one aggregation for the selected coordinate (or one typeahead
//! search) and prints the result as JSON on stdout. Logs go to stderr so
//! the payload stays machine-readable.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meteopoint::cli::{self, Cli, Command};
use meteopoint::data::GeocodingClient;
use meteopoint::keepalive::KeepAlive;
use meteopoint::report::ReportBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    if let Some(Command::Search { query }) = &args.command {
        let matches = GeocodingClient::new().search(query).await;
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    let location = cli::resolve_coordinate(&args)?;

    let keepalive = KeepAlive::new();
    if let Some(url) = &args.keep_alive {
        keepalive.start(url.clone());
    }

    let payload = ReportBuilder::new()
        .full_hourly(args.full_hourly)
        .assemble(&location)
        .await;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
