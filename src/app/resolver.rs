use crate::app::ApiError;
use crate::core::pipeline::WeatherPipeline;
use crate::domain::model::WeatherReading;
use crate::domain::ports::{CityResolver, WeatherFetcher};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    cep: Option<String>,
}

/// Router for the resolver stage: `GET /weather?cep=<8 digits>`.
pub fn router<R, W>(pipeline: WeatherPipeline<R, W>) -> Router
where
    R: CityResolver + 'static,
    W: WeatherFetcher + 'static,
{
    Router::new()
        .route("/weather", get(weather_handler::<R, W>))
        .with_state(Arc::new(pipeline))
}

async fn weather_handler<R, W>(
    State(pipeline): State<Arc<WeatherPipeline<R, W>>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReading>, ApiError>
where
    R: CityResolver + 'static,
    W: WeatherFetcher + 'static,
{
    // A missing cep parameter fails validation the same way an empty one does
    let raw = query.cep.unwrap_or_default();
    let reading = pipeline.handle(&raw).await?;
    Ok(Json(reading))
}
