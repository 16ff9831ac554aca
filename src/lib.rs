pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ResolverClient, ViaCepClient, WeatherApiClient};
pub use config::{ServiceArgs, Settings};
pub use core::pipeline::WeatherPipeline;
pub use domain::model::{Cep, WeatherReading};
pub use utils::error::{Result, WeatherError};
