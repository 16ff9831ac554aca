use crate::domain::model::Cep;
use crate::utils::error::Result;
use reqwest::Client;

/// The gateway's client for the resolver stage: `GET {base_url}/weather?cep=`.
/// Returns the upstream status and body as-is so the gateway can relay them,
/// preserving client-actionable detail (404 vs 502 and so on).
#[derive(Debug, Clone)]
pub struct ResolverClient {
    client: Client,
    base_url: String,
}

/// Raw reply from the resolver stage. Transport failures are the only case
/// that does not produce one of these.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ResolverClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn weather_by_cep(&self, cep: &Cep) -> Result<UpstreamReply> {
        let url = format!("{}/weather", self.base_url);
        tracing::debug!("Forwarding CEP {} to resolver at {}", cep, url);

        let response = self
            .client
            .get(&url)
            .query(&[("cep", cep.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::debug!("Resolver replied with status {}", status);

        Ok(UpstreamReply { status, body })
    }
}
