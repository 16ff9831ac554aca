use crate::domain::model::Cep;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Translates a postal code into a city name via an external geocoding
/// provider. Unknown codes surface as `WeatherError::ZipcodeNotFound`.
#[async_trait]
pub trait CityResolver: Send + Sync {
    async fn resolve(&self, cep: &Cep) -> Result<String>;
}

/// Fetches the current temperature (Celsius) for a city from an external
/// weather provider.
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    async fn fetch_current(&self, city: &str) -> Result<f64>;
}
