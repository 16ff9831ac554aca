use crate::domain::ports::WeatherFetcher;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Weather client for the WeatherAPI current-conditions endpoint:
/// `GET {base_url}/v1/current.json?key=...&q=<city>`. The city name is
/// URL-encoded by reqwest's query serializer.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: Option<f64>,
}

#[async_trait]
impl WeatherFetcher for WeatherApiClient {
    async fn fetch_current(&self, city: &str) -> Result<f64> {
        let url = format!("{}/v1/current.json", self.base_url);
        tracing::debug!("Weather request for city: {}", city);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Weather response status: {}", status);

        if !status.is_success() {
            tracing::warn!("Weather provider returned status {}", status);
            return Err(WeatherError::UpstreamStatus {
                service: "weatherapi",
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: WeatherApiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Weather payload did not match expected shape: {}", e);
            WeatherError::Decode {
                service: "weatherapi",
                detail: e.to_string(),
            }
        })?;

        let current = decoded.current.ok_or_else(|| {
            tracing::warn!("Weather payload missing `current` object");
            WeatherError::Decode {
                service: "weatherapi",
                detail: "missing field `current`".to_string(),
            }
        })?;

        current.temp_c.ok_or_else(|| {
            tracing::warn!("Weather payload missing `current.temp_c` field");
            WeatherError::Decode {
                service: "weatherapi",
                detail: "missing field `current.temp_c`".to_string(),
            }
        })
    }
}
