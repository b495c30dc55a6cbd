use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{Service, WeatherError},
    model::{Coordinates, Place},
    provider::truncate_body,
};

use super::GeocodingProvider;

pub const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// OpenWeather direct and reverse geocoding.
#[derive(Debug, Clone)]
pub struct OpenWeatherGeocoder {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherGeocoder {
    pub fn with_client(http: Client, api_key: String, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key,
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}/{endpoint}` and decode the candidate array.
    async fn lookup<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        if self.api_key.is_empty() {
            return Err(anyhow!("No API key configured for OpenWeather geocoding"));
        }

        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, "requesting geocoding candidates");

        let res = self
            .http
            .get(&url)
            .query(params)
            .query(&[("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }
}

#[derive(Debug, Deserialize)]
struct OwPlace {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
}

#[async_trait]
impl GeocodingProvider for OpenWeatherGeocoder {
    async fn resolve_coordinates(&self, place_name: &str) -> Result<Place, WeatherError> {
        let candidates: Vec<OwPlace> = self
            .lookup("direct", &[("q", place_name.to_string())])
            .await
            .map_err(|err| network_failure(Service::Geocoding, err))?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound(place_name.to_string()))?;

        tracing::info!(query = place_name, name = %first.name, "resolved place");

        Ok(Place {
            name: first.name,
            country: first.country,
            coordinates: Coordinates {
                latitude: first.lat,
                longitude: first.lon,
            },
        })
    }

    async fn resolve_place_name(&self, coordinates: Coordinates) -> Result<String, WeatherError> {
        let params = [
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
        ];
        let candidates: Vec<OwPlace> = self
            .lookup("reverse", &params)
            .await
            .map_err(|err| network_failure(Service::ReverseGeocoding, err))?;

        candidates
            .into_iter()
            .next()
            .map(|place| place.name)
            .ok_or_else(|| WeatherError::NotFound(coordinates.to_string()))
    }
}

fn network_failure(service: Service, err: anyhow::Error) -> WeatherError {
    let reason = format!("{err:#}");
    tracing::warn!(%service, error = %reason, "geocoding failed");
    WeatherError::NetworkFailure { service, reason }
}
