//! Typeahead place search against the Open-Meteo geocoding API
//!
//! An auxiliary path with no shared state with the aggregation pipeline.
//! Queries below the minimum length never reach the network, and provider
//! failures degrade to an empty suggestion list.

use tracing::warn;

use super::fetch::{Fetcher, GeoResponse};
use super::query;
use super::GeoMatch;

/// Queries shorter than this return empty without an outbound call
pub const MIN_QUERY_LEN: usize = 3;

/// Client for typeahead place search
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    fetcher: Fetcher,
    base_url: String,
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodingClient {
    /// Creates a client against the public geocoding endpoint
    pub fn new() -> Self {
        Self {
            fetcher: Fetcher::new(),
            base_url: query::GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Creates a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            fetcher: Fetcher::new(),
            base_url: base_url.into(),
        }
    }

    /// Searches places matching a name prefix
    ///
    /// # Arguments
    /// * `text` - Free-form query text; leading/trailing whitespace ignored
    ///
    /// # Returns
    /// Up to six matches, best first. Empty when the query is shorter than
    /// [`MIN_QUERY_LEN`] characters or the provider call fails.
    pub async fn search(&self, text: &str) -> Vec<GeoMatch> {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let url = query::geocoding_url(&self.base_url, trimmed);
        match self.fetcher.fetch_json::<GeoResponse>(&url).await {
            Ok(response) => response
                .results
                .into_iter()
                .map(|result| GeoMatch {
                    name: result.name,
                    region: result.admin1,
                    country: result.country,
                    latitude: result.latitude,
                    longitude: result.longitude,
                })
                .collect(),
            Err(err) => {
                warn!(error = %err, query = trimmed, "geocoding request failed");
                Vec::new()
            }
        }
    }
}
