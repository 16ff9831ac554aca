pub mod pipeline;

pub use crate::domain::model::{Cep, WeatherReading};
pub use crate::domain::ports::{CityResolver, WeatherFetcher};
pub use crate::utils::error::Result;
