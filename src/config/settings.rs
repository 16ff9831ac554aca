use crate::config::ServiceArgs;
use crate::utils::error::{Result, WeatherError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub resolver: ResolverSettings,
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_gateway_listen")]
    pub listen_addr: String,
    #[serde(default = "default_resolver_url")]
    pub resolver_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default = "default_resolver_listen")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingSettings {
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_gateway_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_resolver_listen() -> String {
    "0.0.0.0:8081".to_string()
}

fn default_resolver_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_geocoding_url() -> String {
    "https://viacep.com.br".to_string()
}

fn default_weather_url() -> String {
    "http://api.weatherapi.com".to_string()
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            listen_addr: default_gateway_listen(),
            resolver_url: default_resolver_url(),
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_resolver_listen(),
        }
    }
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_url(),
        }
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: String::new(),
        }
    }
}

impl Settings {
    /// Load settings for a service binary: TOML file when given, defaults
    /// otherwise, then the `WEATHER_API_KEY` environment fallback.
    pub fn load(args: &ServiceArgs) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if settings.weather.api_key.is_empty() {
            if let Ok(key) = std::env::var("WEATHER_API_KEY") {
                settings.weather.api_key = key;
            }
        }

        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WeatherError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WeatherError::Config {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unset
    /// variables are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("gateway.resolver_url", &self.gateway.resolver_url)?;
        validation::validate_url("geocoding.base_url", &self.geocoding.base_url)?;
        validation::validate_url("weather.base_url", &self.weather.base_url)?;
        validation::validate_non_empty_string("gateway.listen_addr", &self.gateway.listen_addr)?;
        validation::validate_non_empty_string("resolver.listen_addr", &self.resolver.listen_addr)?;
        Ok(())
    }

    /// The resolver binary additionally needs the provider credential.
    pub fn validate_for_resolver(&self) -> Result<()> {
        self.validate_config()?;
        validation::validate_non_empty_string("weather.api_key", &self.weather.api_key)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_pass_validation() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.gateway.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.resolver.listen_addr, "0.0.0.0:8081");
        assert_eq!(settings.geocoding.base_url, "https://viacep.com.br");
    }

    #[test]
    fn test_parse_basic_toml() {
        let toml_content = r#"
[gateway]
listen_addr = "127.0.0.1:9080"
resolver_url = "http://resolver.internal:8081"

[resolver]
listen_addr = "127.0.0.1:9081"

[geocoding]
base_url = "https://viacep.com.br"

[weather]
base_url = "http://api.weatherapi.com"
api_key = "secret"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.gateway.listen_addr, "127.0.0.1:9080");
        assert_eq!(settings.gateway.resolver_url, "http://resolver.internal:8081");
        assert_eq!(settings.weather.api_key, "secret");
        assert!(settings.validate_for_resolver().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_content = r#"
[weather]
api_key = "secret"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.gateway.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.weather.base_url, "http://api.weatherapi.com");
        assert_eq!(settings.weather.api_key, "secret");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_WEATHER_KEY", "from-env");

        let toml_content = r#"
[weather]
api_key = "${TEST_WEATHER_KEY}"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.weather.api_key, "from-env");

        std::env::remove_var("TEST_WEATHER_KEY");
    }

    #[test]
    fn test_invalid_resolver_url_fails_validation() {
        let toml_content = r#"
[gateway]
resolver_url = "not-a-url"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_api_key_fails_resolver_validation() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.validate_for_resolver().is_err());
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[resolver]
listen_addr = "127.0.0.1:7081"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.resolver.listen_addr, "127.0.0.1:7081");
    }
}
