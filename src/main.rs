use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use terra::api::{CountrySource, RestCountriesClient};
use terra::core::config::{self, CliOverrides};
use terra::core::route::Route;

#[derive(Parser)]
#[command(name = "terra", about = "Browse the countries of the world from the terminal")]
struct Args {
    /// Route to open: `/`, `/countries`, or `/countries/{name}`
    route: Option<Route>,

    /// Base URL of the REST Countries v3.1 API
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to terra.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("terra.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let config = config::resolve(
        &file_config,
        CliOverrides {
            base_url: args.base_url,
            route: args.route,
        },
    );

    log::info!(
        "Terra starting up against {} at {}",
        config.base_url,
        config.route
    );

    let source: Arc<dyn CountrySource> =
        Arc::new(RestCountriesClient::new(config.base_url.clone()));

    let dataset = match source.fetch_all().await {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load countries from {}: {}", source.name(), e);
            return Err(e.into());
        }
    };
    log::info!("Loaded {} countries", dataset.len());

    terra::tui::run(source, dataset, config)?;
    Ok(())
}
