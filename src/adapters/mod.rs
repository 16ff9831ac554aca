// Adapters layer: concrete clients for the external systems the pipeline
// talks to (geocoding, weather provider, the resolver stage itself).

pub mod resolver_client;
pub mod viacep;
pub mod weatherapi;

pub use resolver_client::{ResolverClient, UpstreamReply};
pub use viacep::ViaCepClient;
pub use weatherapi::WeatherApiClient;
