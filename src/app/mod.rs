pub mod gateway;
pub mod resolver;

use crate::utils::error::WeatherError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Boundary wrapper turning a pipeline failure into an HTTP response. The
/// status comes from the error taxonomy; the body is a short message that
/// never carries provider URLs or decode internals.
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, self.0.public_message()).into_response()
    }
}
