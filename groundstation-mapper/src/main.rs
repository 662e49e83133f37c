use std::io::Write;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use groundstation_mapper::config::AppConfig;
use groundstation_mapper::directory::DirectoryClient;
use groundstation_mapper::geocode::GeocodeClient;
use groundstation_mapper::maps::MapPublisher;
use groundstation_mapper::pipeline::{Pipeline, PipelineOutput};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the station records
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let output = match run(config).await {
        Ok(output) => output,
        Err(e) => {
            error!(error = %e, "Run failed, no output produced");
            return ExitCode::FAILURE;
        }
    };

    info!(
        stations = output.records.len(),
        markers = output.markers.len(),
        "Writing station records"
    );

    let mut stdout = std::io::stdout().lock();
    for record in output.into_records() {
        if let Err(e) = writeln!(stdout, "{record}") {
            error!(error = %e, "Failed to write output");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

async fn run(config: AppConfig) -> Result<PipelineOutput, Box<dyn std::error::Error>> {
    let directory = DirectoryClient::new(config.directory)?;
    let geocoder = GeocodeClient::new(config.geocode)?;
    let maps = MapPublisher::new(config.maps)?;

    let pipeline = Pipeline::new(directory, geocoder, maps, config.pipeline);
    Ok(pipeline.run().await?)
}
