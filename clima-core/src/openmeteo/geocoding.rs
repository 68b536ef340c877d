use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    conditions::Language, error::LookupError, model::Location, sanitize::sanitize,
    transport::HttpTransport,
};

use super::decode_body;

/// Resolves a city name to the coordinates of its first geocoding match.
#[derive(Debug, Clone)]
pub struct Geocoder {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
    language: Language,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl Geocoder {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url, language: Language) -> Self {
        Self { transport, endpoint, language }
    }

    fn request_url(&self, city: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("name", city)
            .append_pair("count", "1")
            .append_pair("language", self.language.as_str())
            .append_pair("format", "json");
        url
    }

    /// Look up `city`. It is sanitized again here and must not come out empty.
    ///
    /// A response without a `results` array, or with an empty one, is
    /// reported as [`LookupError::CityNotFound`].
    #[instrument(skip(self))]
    pub async fn resolve(&self, city: &str) -> Result<Location, LookupError> {
        let city = sanitize(city);
        if city.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let res = self.transport.get(self.request_url(&city)).await.map_err(|e| {
            warn!(error = %e, "geocoding request did not complete");
            e.classify(LookupError::GeocodingUnavailable)
        })?;

        let body = decode_body(&res, "geocoding", LookupError::GeocodingUnavailable)?;

        let Some(first) = body.get("results").and_then(|r| r.as_array()).and_then(|r| r.first())
        else {
            debug!("geocoding returned no results");
            return Err(LookupError::CityNotFound);
        };

        let hit = GeoResult::deserialize(first).map_err(|e| {
            warn!(error = %e, "geocoding result has an unexpected shape");
            LookupError::CityNotFound
        })?;

        let location = Location {
            name: hit.name.unwrap_or(city),
            country: hit.country.unwrap_or_default(),
            latitude: hit.latitude,
            longitude: hit.longitude,
        };

        debug!(
            "resolved {} at ({:.4}, {:.4})",
            location.display_name(),
            location.latitude,
            location.longitude
        );

        Ok(location)
    }
}
