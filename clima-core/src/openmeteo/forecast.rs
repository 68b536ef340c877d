use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::LookupError,
    model::{CurrentConditions, DailySeries},
    transport::HttpTransport,
};

use super::{DAILY_FIELDS, decode_body};

/// Fetches current conditions and, optionally, the daily series for a point.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
}

/// What one forecast request yields. `daily` is absent when it was not
/// requested or the response did not carry a usable one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    weathercode: i32,
    #[serde(default)]
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weathercode: Vec<i32>,
}

impl WeatherClient {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url) -> Self {
        Self { transport, endpoint }
    }

    fn request_url(&self, latitude: f64, longitude: f64, include_forecast: bool) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("latitude", &latitude.to_string())
                .append_pair("longitude", &longitude.to_string())
                .append_pair("current_weather", "true");
            if include_forecast {
                query.append_pair("daily", DAILY_FIELDS).append_pair("timezone", "auto");
            }
        }
        url
    }

    #[instrument(skip(self))]
    pub async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        include_forecast: bool,
    ) -> Result<WeatherReport, LookupError> {
        let url = self.request_url(latitude, longitude, include_forecast);
        let res = self.transport.get(url).await.map_err(|e| {
            warn!(error = %e, "forecast request did not complete");
            e.classify(LookupError::WeatherUnavailable)
        })?;

        let body = decode_body(&res, "forecast", LookupError::WeatherUnavailable)?;

        let current = body
            .get("current_weather")
            .filter(|c| !c.is_null())
            .ok_or(LookupError::WeatherDataMissing)
            .and_then(|c| {
                OmCurrentWeather::deserialize(c).map_err(|e| {
                    warn!(error = %e, "current_weather has an unexpected shape");
                    LookupError::WeatherDataMissing
                })
            })?;

        let daily = if include_forecast { parse_daily(body.get("daily")) } else { None };

        debug!(
            temperature = current.temperature,
            code = current.weathercode,
            days = daily.as_ref().map_or(0, DailySeries::len),
            "fetched weather"
        );

        Ok(WeatherReport {
            current: CurrentConditions {
                temperature: current.temperature,
                condition_code: current.weathercode,
                timestamp: current.time,
            },
            daily,
        })
    }
}

/// A daily block that is missing or malformed is dropped, not fatal.
fn parse_daily(raw: Option<&serde_json::Value>) -> Option<DailySeries> {
    let raw = raw.filter(|d| !d.is_null())?;

    let daily = OmDaily::deserialize(raw)
        .map_err(|e| warn!(error = %e, "ignoring daily forecast with unexpected shape"))
        .ok()?;

    DailySeries::new(
        daily.time,
        daily.temperature_2m_max,
        daily.temperature_2m_min,
        daily.weathercode,
    )
    .map_err(|e| warn!(error = %e, "ignoring inconsistent daily forecast"))
    .ok()
}
