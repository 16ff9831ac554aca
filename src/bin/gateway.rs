use cep_weather::app;
use cep_weather::config::{ServiceArgs, Settings};
use cep_weather::utils::logger;
use cep_weather::ResolverClient;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServiceArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_service_logger(args.verbose);
    }

    tracing::info!("Starting weather gateway service");

    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate_config() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let resolver = ResolverClient::new(settings.gateway.resolver_url.clone());
    let app = app::gateway::router(resolver);

    let addr = args.listen.unwrap_or(settings.gateway.listen_addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Weather gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
