use crate::adapters::ResolverClient;
use crate::domain::model::{Cep, ZipcodeRequest};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

/// Router for the gateway stage: `POST /zipcode` with body `{"cep": "..."}`.
pub fn router(resolver: ResolverClient) -> Router {
    Router::new()
        .route("/zipcode", post(zipcode_handler))
        .with_state(Arc::new(resolver))
}

async fn zipcode_handler(
    State(resolver): State<Arc<ResolverClient>>,
    body: Bytes,
) -> Response {
    let request: ZipcodeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejecting undecodable request body: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    let cep = match Cep::parse(&request.cep) {
        Ok(cep) => cep,
        Err(_) => {
            tracing::debug!("Rejecting malformed CEP: {:?}", request.cep);
            return (StatusCode::UNPROCESSABLE_ENTITY, "Invalid zipcode format").into_response();
        }
    };

    match resolver.weather_by_cep(&cep).await {
        Ok(reply) => {
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            if status.is_success() {
                // Relay the resolver's body verbatim
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    reply.body,
                )
                    .into_response()
            } else {
                // Preserve the upstream status so clients can tell a missing
                // CEP from a provider outage without parsing the body
                (status, reply.body).into_response()
            }
        }
        Err(err) => {
            tracing::error!("Failed to reach weather resolver: {}", err);
            (StatusCode::BAD_GATEWAY, "weather resolver unavailable").into_response()
        }
    }
}
