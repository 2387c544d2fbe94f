//! Geocoding error types.

/// Errors from the Geoapify HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// The query produced no results
    #[error("no match for query")]
    NoMatch,

    /// Invalid API key
    #[error("unauthorized: check GEOAPIFY_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by geocoder")]
    RateLimited,
}
