use crate::{
    Config,
    error::{GeolocationError, WeatherError},
    model::{Coordinates, ForecastRecord, ForecastRequest, Place},
    provider::{openmeteo::OpenMeteoClient, openweather::OpenWeatherGeocoder},
};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod openmeteo;
pub mod openweather;

/// Fetches a full forecast snapshot for a set of coordinates.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastRecord, WeatherError>;
}

/// Resolves place names to coordinates and back. Only the first
/// candidate returned by the provider is used.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve_coordinates(&self, place_name: &str) -> Result<Place, WeatherError>;

    async fn resolve_place_name(&self, coordinates: Coordinates) -> Result<String, WeatherError>;
}

/// Source of the device position.
#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Geolocator answering with a position supplied up front, e.g. from
/// command-line flags. Without one it reports the position as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(pub Option<Coordinates>);

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}

/// HTTP client with the configured request timeout.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs()))
        .build()?;
    Ok(client)
}

/// Construct the forecast client from config.
pub fn forecast_from_config(config: &Config) -> anyhow::Result<OpenMeteoClient> {
    let base_url = config
        .forecast_url
        .as_deref()
        .unwrap_or(openmeteo::FORECAST_URL);
    Ok(OpenMeteoClient::with_client(http_client(config)?, base_url))
}

/// Construct the geocoder from config; fails when no API key is configured.
pub fn geocoder_from_config(config: &Config) -> anyhow::Result<OpenWeatherGeocoder> {
    let api_key = config.geocoding_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for geocoding.\n\
                 Hint: run `skycast configure` and enter your OpenWeather API key, \
                 or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let base_url = config
        .geocoding_url
        .as_deref()
        .unwrap_or(openweather::GEOCODING_URL);
    Ok(OpenWeatherGeocoder::with_client(http_client(config)?, api_key.to_owned(), base_url))
}

/// Shorten a response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
