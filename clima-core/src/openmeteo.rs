//! Clients for the Open-Meteo geocoding and forecast APIs.

use reqwest::Url;

use crate::error::LookupError;
use crate::transport::HttpResponse;

pub mod forecast;
pub mod geocoding;

pub use forecast::{WeatherClient, WeatherReport};
pub use geocoding::Geocoder;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Daily variables requested alongside the current conditions.
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode";

/// Parse an endpoint URL, as found in the configuration.
pub fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid endpoint URL '{raw}': {e}"))
}

/// Decode a successful response body into a JSON tree.
///
/// A non-2xx status or a body that is not JSON at all means the service gave
/// no usable answer; both map to `unavailable`.
fn decode_body(
    res: &HttpResponse,
    service: &str,
    unavailable: LookupError,
) -> Result<serde_json::Value, LookupError> {
    if !res.is_success() {
        tracing::warn!(
            status = %res.status,
            body = %res.body_excerpt(),
            "{service} request failed"
        );
        return Err(unavailable);
    }

    res.json().map_err(|e| {
        tracing::warn!(error = %e, body = %res.body_excerpt(), "{service} response is not JSON");
        unavailable
    })
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn default_endpoints_parse() {
        assert!(parse_endpoint(GEOCODING_URL).is_ok());
        assert!(parse_endpoint(FORECAST_URL).is_ok());

        let err = parse_endpoint("not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn decode_body_classifies_failures() {
        let rate_limited = HttpResponse::new(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(
            decode_body(&rate_limited, "geocoding", LookupError::GeocodingUnavailable),
            Err(LookupError::GeocodingUnavailable)
        );

        let html = HttpResponse::new(StatusCode::OK, "<html></html>");
        assert_eq!(
            decode_body(&html, "forecast", LookupError::WeatherUnavailable),
            Err(LookupError::WeatherUnavailable)
        );

        let ok = HttpResponse::new(StatusCode::OK, r#"{"results": []}"#);
        let value = decode_body(&ok, "geocoding", LookupError::GeocodingUnavailable).unwrap();
        assert!(value["results"].is_array());
    }
}
