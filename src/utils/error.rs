use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    #[error("unexpected payload from {service}: {detail}")]
    Decode {
        service: &'static str,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {field}: {reason}")]
    Config { field: String, reason: String },
}

impl WeatherError {
    /// HTTP status the failure maps to at a service boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            WeatherError::InvalidZipcode => 422,
            WeatherError::ZipcodeNotFound => 404,
            WeatherError::Transport(_)
            | WeatherError::UpstreamStatus { .. }
            | WeatherError::Decode { .. } => 502,
            WeatherError::Io(_) | WeatherError::Config { .. } => 500,
        }
    }

    /// Short client-facing message. Never exposes provider URLs or internals.
    pub fn public_message(&self) -> &'static str {
        match self {
            WeatherError::InvalidZipcode => "invalid zipcode",
            WeatherError::ZipcodeNotFound => "can not find zipcode",
            WeatherError::Transport(_)
            | WeatherError::UpstreamStatus { .. }
            | WeatherError::Decode { .. } => "upstream service unavailable",
            WeatherError::Io(_) | WeatherError::Config { .. } => "internal error",
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
