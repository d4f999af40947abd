//! WSD CLI - Command line tool for browsing Washington State destinations.

use clap::Parser;
use wsd_api::config::{DEFAULT_API_BASE, DEFAULT_GEOCODER_BASE};
use wsd_api::ApiConfig;

#[derive(Parser)]
#[command(
    name = "wsd-cli",
    version,
    about = "Washington State destinations explorer toolkit"
)]
struct Cli {
    /// Base URL of the destinations REST API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Base URL of the Nominatim reverse geocoder
    #[arg(long, global = true, default_value = DEFAULT_GEOCODER_BASE)]
    geocoder_base: String,

    #[command(subcommand)]
    command: wsd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("API {} / geocoder {}", cli.api_base, cli.geocoder_base);
    let config = ApiConfig::new(&cli.api_base, &cli.geocoder_base);
    wsd_cmd::run(cli.command, &config).await
}
