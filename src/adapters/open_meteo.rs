use crate::core::query::forecast_url;
use crate::domain::model::ForecastQuery;
use crate::domain::ports::{ConfigProvider, WeatherSource};
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    endpoint: Url,
}

impl OpenMeteoClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| WeatherError::InvalidConfigValueError {
            field: "upstream.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.upstream_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch_forecast(&self, query: &ForecastQuery) -> Result<serde_json::Value> {
        let url = forecast_url(&self.endpoint, query);

        tracing::debug!("Making Open-Meteo request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Open-Meteo response status: {}", status);

        if !status.is_success() {
            tracing::warn!("Open-Meteo returned {}", status);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
