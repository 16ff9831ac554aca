use crate::utils::error::{Result, WeatherError};
use crate::utils::validation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated CEP (Brazilian postal code): exactly 8 ASCII digits.
/// `parse` is the only way to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    pub fn parse(raw: &str) -> Result<Self> {
        if validation::is_valid_zipcode(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(WeatherError::InvalidZipcode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gateway request body: `{"cep": "01001000"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipcodeRequest {
    pub cep: String,
}

/// Current weather for a resolved city, in the three scales the API exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherReading {
    pub fn from_celsius(city: String, temp_c: f64) -> Self {
        let (temp_f, temp_k) = convert_celsius(temp_c);
        Self {
            city,
            temp_c,
            temp_f,
            temp_k,
        }
    }
}

/// Celsius to (Fahrenheit, Kelvin). The Kelvin offset is 273, matching the
/// upstream contract rather than the physical 273.15.
pub fn convert_celsius(temp_c: f64) -> (f64, f64) {
    (temp_c * 1.8 + 32.0, temp_c + 273.0)
}
