use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::WeatherError,
    model::{ForecastRecord, ForecastRequest},
    provider::truncate_body,
};

use super::ForecastProvider;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, request: &ForecastRequest) -> Result<ForecastRecord> {
        let mut query = vec![
            ("latitude", request.coordinates.latitude.to_string()),
            ("longitude", request.coordinates.longitude.to_string()),
        ];
        for group in &request.groups {
            query.push((group.as_str(), group.variables().to_string()));
        }
        query.push(("timezone", "auto".to_string()));

        tracing::debug!(
            url = %self.base_url,
            coordinates = %request.coordinates,
            "requesting forecast"
        );

        let res = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let record: ForecastRecord =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        record.validate().context("Open-Meteo returned misaligned series")?;

        Ok(record)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastRecord, WeatherError> {
        self.fetch(request).await.map_err(|err| {
            let reason = format!("{err:#}");
            tracing::warn!(error = %reason, "forecast fetch failed");
            WeatherError::ForecastUnavailable(reason)
        })
    }
}
