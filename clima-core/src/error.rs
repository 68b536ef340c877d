use thiserror::Error;

/// Classification of every way a lookup can fail.
///
/// Variants carry no payload: callers branch on the kind, and the
/// diagnostic detail (status code, body excerpt, decode error) is logged
/// at the point of failure instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The city text was empty after sanitization. No request was made.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// The geocoder was called with an empty city name.
    #[error("City name must not be empty.")]
    InvalidInput,

    /// The geocoding service did not answer successfully (any non-2xx status,
    /// rate limiting included) or the request never completed.
    #[error("The geocoding service is unavailable.")]
    GeocodingUnavailable,

    /// The geocoding service returned no match for the city.
    #[error("City not found. Please try again.")]
    CityNotFound,

    /// The forecast service did not answer successfully.
    #[error("The weather service is unavailable.")]
    WeatherUnavailable,

    /// The forecast response had no current conditions.
    #[error("Weather data is unavailable for this location.")]
    WeatherDataMissing,

    /// The lookup was abandoned before it completed.
    #[error("The lookup was cancelled.")]
    Cancelled,
}

/// Failure reported by an [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request cancelled")]
    Cancelled,
}

impl TransportError {
    /// Map a transport failure onto the lookup error kind of the step that
    /// issued the request. Cancellation keeps its own kind.
    pub(crate) fn classify(&self, unavailable: LookupError) -> LookupError {
        match self {
            TransportError::Cancelled => LookupError::Cancelled,
            TransportError::Request(_) | TransportError::Body(_) => unavailable,
        }
    }
}
