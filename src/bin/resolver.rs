use cep_weather::app;
use cep_weather::config::{ServiceArgs, Settings};
use cep_weather::utils::logger;
use cep_weather::{ViaCepClient, WeatherApiClient, WeatherPipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServiceArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_service_logger(args.verbose);
    }

    tracing::info!("Starting weather resolver service");

    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate_for_resolver() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let resolver = ViaCepClient::new(settings.geocoding.base_url.clone());
    let fetcher = WeatherApiClient::new(
        settings.weather.base_url.clone(),
        settings.weather.api_key.clone(),
    );
    let pipeline = WeatherPipeline::new(resolver, fetcher);
    let app = app::resolver::router(pipeline);

    let addr = args.listen.unwrap_or(settings.resolver.listen_addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Weather resolver listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
