//! One city lookup: sanitize, geocode, fetch weather, align the forecast.

use std::{future::Future, sync::Arc, time::Duration};

use tracing::{debug, info, instrument};

use crate::{
    aligner,
    conditions::Language,
    config::Config,
    error::LookupError,
    model::LookupResult,
    openmeteo::{Geocoder, WeatherClient, parse_endpoint},
    sanitize::sanitize,
    transport::{HttpTransport, ReqwestTransport},
};

/// Runs lookups against a geocoder and a weather client.
///
/// Holds no mutable state; concurrent lookups on one instance are independent.
/// Nothing is cached and nothing is retried: each call makes fresh requests
/// and the first failure is returned.
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    geocoder: Geocoder,
    weather: WeatherClient,
    window: usize,
    language: Language,
}

impl WeatherLookup {
    pub fn new(geocoder: Geocoder, weather: WeatherClient, language: Language) -> Self {
        Self { geocoder, weather, window: aligner::DEFAULT_WINDOW, language }
    }

    /// Number of upcoming days to keep.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Build both clients over one shared transport, using the configured
    /// endpoints, language and window.
    pub fn from_config(config: &Config, transport: Arc<dyn HttpTransport>) -> anyhow::Result<Self> {
        config.validate()?;

        let geocoder = Geocoder::new(
            transport.clone(),
            parse_endpoint(&config.geocoding_url)?,
            config.language,
        );
        let weather = WeatherClient::new(transport, parse_endpoint(&config.forecast_url)?);

        Ok(Self::new(geocoder, weather, config.language).with_window(config.forecast_days))
    }

    /// Like [`WeatherLookup::from_config`], over a reqwest transport honoring
    /// the configured timeout.
    pub fn from_config_with_reqwest(config: &Config) -> anyhow::Result<Self> {
        let transport = match config.timeout_secs {
            Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs))?,
            None => ReqwestTransport::new(),
        };

        Self::from_config(config, Arc::new(transport))
    }

    pub fn window(&self) -> usize {
        self.window
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, raw_city: &str) -> Result<LookupResult, LookupError> {
        let city = sanitize(raw_city);
        if city.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let location = self.geocoder.resolve(&city).await?;
        let report =
            self.weather.fetch_weather(location.latitude, location.longitude, true).await?;

        let upcoming = match &report.daily {
            Some(daily) => aligner::align_and_trim_in(
                daily,
                &report.current.timestamp,
                self.window,
                self.language,
            ),
            None => {
                debug!("no daily series, skipping forecast");
                Vec::new()
            }
        };

        info!(
            location = %location.display_name(),
            temperature = report.current.temperature,
            upcoming = upcoming.len(),
            "lookup complete"
        );

        Ok(LookupResult { location, current: report.current, upcoming })
    }

    /// Run [`WeatherLookup::lookup`] until `cancel` resolves.
    ///
    /// If `cancel` finishes first, the in-flight request is dropped and
    /// [`LookupError::Cancelled`] is returned; no partial result escapes.
    pub async fn lookup_cancellable<F>(
        &self,
        raw_city: &str,
        cancel: F,
    ) -> Result<LookupResult, LookupError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                debug!("lookup cancelled");
                Err(LookupError::Cancelled)
            }
            result = self.lookup(raw_city) => result,
        }
    }
}
