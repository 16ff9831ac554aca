//! Drives the full two-service chain: gateway -> resolver -> mocked providers.

use cep_weather::app;
use cep_weather::{ResolverClient, ViaCepClient, WeatherApiClient, WeatherPipeline};
use httpmock::prelude::*;

async fn spawn(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_chain(geocoding_url: String, weather_url: String) -> String {
    let pipeline = WeatherPipeline::new(
        ViaCepClient::new(geocoding_url),
        WeatherApiClient::new(weather_url, "test-key".to_string()),
    );
    let resolver_url = spawn(app::resolver::router(pipeline)).await;
    spawn(app::gateway::router(ResolverClient::new(resolver_url))).await
}

#[tokio::test]
async fn test_full_chain_success() {
    let providers = MockServer::start();
    providers.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"localidade": "São Paulo", "uf": "SP"}));
    });
    providers.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"current": {"temp_c": 25.0}}));
    });

    let gateway = spawn_chain(providers.base_url(), providers.base_url()).await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/zipcode", gateway))
        .header("Content-Type", "application/json")
        .body(r#"{"cep":"01001000"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["city"], "São Paulo");
    assert_eq!(body["temp_C"], 25.0);
    assert_eq!(body["temp_F"], 77.0);
    assert_eq!(body["temp_K"], 298.0);
}

#[tokio::test]
async fn test_full_chain_unknown_cep_is_404_end_to_end() {
    let providers = MockServer::start();
    providers.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"erro": true}));
    });
    let weather_mock = providers.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(200);
    });

    let gateway = spawn_chain(providers.base_url(), providers.base_url()).await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/zipcode", gateway))
        .body(r#"{"cep":"99999999"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    weather_mock.assert_hits(0);
}

#[tokio::test]
async fn test_full_chain_geocoding_outage_is_5xx_end_to_end() {
    let providers = MockServer::start();

    // Geocoding provider unreachable; weather provider healthy but never needed
    let gateway = spawn_chain("http://127.0.0.1:9".to_string(), providers.base_url()).await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/zipcode", gateway))
        .body(r#"{"cep":"01001000"}"#)
        .send()
        .await
        .unwrap();

    // Distinguishable from success and from client errors by status alone
    assert!(response.status().is_server_error());
    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn test_full_chain_client_error_never_reaches_providers() {
    let providers = MockServer::start();
    let geo_mock = providers.mock(|when, then| {
        when.method(GET).path_contains("/ws/");
        then.status(200);
    });
    let weather_mock = providers.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(200);
    });

    let gateway = spawn_chain(providers.base_url(), providers.base_url()).await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/zipcode", gateway))
        .body(r#"{"cep":"123"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    geo_mock.assert_hits(0);
    weather_mock.assert_hits(0);
}
