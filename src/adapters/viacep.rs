use crate::domain::model::Cep;
use crate::domain::ports::CityResolver;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Geocoding client for the ViaCEP API: `GET {base_url}/ws/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

/// ViaCEP answers unknown-but-well-formed CEPs with a 200 and `{"erro": true}`,
/// so both fields have to be optional.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    localidade: Option<String>,
    erro: Option<bool>,
}

#[async_trait]
impl CityResolver for ViaCepClient {
    async fn resolve(&self, cep: &Cep) -> Result<String> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        tracing::debug!("Geocoding request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Geocoding response status: {}", status);

        if !status.is_success() {
            return Err(WeatherError::ZipcodeNotFound);
        }

        let body = response.text().await?;
        let decoded: ViaCepResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Geocoding payload did not match expected shape: {}", e);
            WeatherError::Decode {
                service: "viacep",
                detail: e.to_string(),
            }
        })?;

        if decoded.erro.unwrap_or(false) {
            return Err(WeatherError::ZipcodeNotFound);
        }

        decoded.localidade.ok_or_else(|| {
            tracing::warn!("Geocoding payload missing `localidade` field");
            WeatherError::Decode {
                service: "viacep",
                detail: "missing field `localidade`".to_string(),
            }
        })
    }
}
