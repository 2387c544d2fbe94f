//! Geoapify forward-geocoding HTTP client.
//!
//! Resolves free-text destination queries to coordinates. Queries are biased
//! toward the service area by appending a configurable suffix before they
//! are sent, and only the first (best) result is used.

use serde::Deserialize;

use crate::domain::LatLng;

use super::error::GeocodeError;

/// Default base URL for the Geoapify API.
const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// Default search-area bias appended to every query.
const DEFAULT_SEARCH_SUFFIX: &str = ", Zamora, Michoacán, México";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Geoapify API key
    pub api_key: String,
    /// Base URL for the API (defaults to production Geoapify)
    pub base_url: String,
    /// Suffix appended to every query to bias results to the service area
    pub search_suffix: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            search_suffix: DEFAULT_SEARCH_SUFFIX.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the search-area suffix.
    pub fn with_search_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.search_suffix = suffix.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A resolved destination.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Resolved coordinates.
    pub coords: LatLng,

    /// Display label: the formatted address when the geocoder provides one,
    /// otherwise the original query.
    pub label: String,
}

/// Response shape for `format=json` geocode searches.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    lat: f64,
    lon: f64,
    formatted: Option<String>,
}

/// Geoapify geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    search_suffix: String,
}

impl GeocodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            search_suffix: config.search_suffix,
        })
    }

    /// Resolve a free-text query to a place.
    pub async fn forward(&self, query: &str) -> Result<GeocodedPlace, GeocodeError> {
        let url = format!("{}/v1/geocode/search", self.base_url);
        let text = format!("{}{}", query, self.search_suffix);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("text", text.as_str()),
                ("format", "json"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(GeocodeError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_body(&body, query)
    }
}

/// Parse a geocode response body, taking the first result.
fn parse_body(body: &str, query: &str) -> Result<GeocodedPlace, GeocodeError> {
    let parsed: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })?;

    let first = parsed
        .results
        .into_iter()
        .next()
        .ok_or(GeocodeError::NoMatch)?;

    Ok(GeocodedPlace {
        coords: LatLng::new(first.lat, first.lon),
        label: first.formatted.unwrap_or_else(|| query.to_string()),
    })
}
