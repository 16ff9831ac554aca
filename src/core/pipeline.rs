use crate::core::{Cep, CityResolver, Result, WeatherFetcher, WeatherReading};

/// Resolver-stage orchestration: validate the CEP, look up its city, fetch the
/// current temperature, convert. Every stage failure propagates; a fetch
/// failure never degrades into a zero-valued reading.
pub struct WeatherPipeline<R: CityResolver, W: WeatherFetcher> {
    resolver: R,
    fetcher: W,
}

impl<R: CityResolver, W: WeatherFetcher> WeatherPipeline<R, W> {
    pub fn new(resolver: R, fetcher: W) -> Self {
        Self { resolver, fetcher }
    }

    pub async fn handle(&self, raw_cep: &str) -> Result<WeatherReading> {
        // Callers are expected to validate; re-check before touching providers.
        let cep = Cep::parse(raw_cep)?;

        tracing::debug!("Resolving city for CEP {}", cep);
        let city = self.resolver.resolve(&cep).await?;
        tracing::debug!("CEP {} resolved to {}", cep, city);

        let temp_c = self.fetcher.fetch_current(&city).await?;
        tracing::debug!("Current temperature in {}: {}C", city, temp_c);

        Ok(WeatherReading::from_celsius(city, temp_c))
    }
}
