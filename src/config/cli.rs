use clap::Parser;

/// Command-line arguments shared by the gateway and resolver binaries.
#[derive(Debug, Clone, Parser)]
#[command(name = "cep-weather")]
#[command(about = "Weather-by-zipcode services (gateway and resolver)")]
pub struct ServiceArgs {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Listen address override, e.g. 0.0.0.0:8080")]
    pub listen: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
