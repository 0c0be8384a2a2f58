use std::time::Duration;

use clap::Parser;
use url::Url;

use data_error::DirectoryError;
use data_geocode::{Geocoder, HttpGeocoder, MockGeocoder, DEFAULT_ENDPOINT};
use data_profile::samples::samples;
use profile_store::Directory;

mod cli;
mod commands;
mod error;
mod format;
mod parsers;

use cli::Cli;
use error::AppError;

/// The store driven by the CLI; the geocoder is picked at startup.
pub type DynDirectory = Directory<Box<dyn Geocoder>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let geocoder = build_geocoder(&cli)?;
    let seed = if cli.empty { Vec::new() } else { samples() };
    let mut directory = Directory::with_profiles("directory", geocoder, seed)
        .map_err(AppError::from)?;
    log::debug!("directory seeded with {} profiles", directory.len());

    cli.command.run(&mut directory).await?;
    Ok(())
}

fn build_geocoder(cli: &Cli) -> Result<Box<dyn Geocoder>, AppError> {
    if !cli.http && cli.endpoint.is_none() {
        return Ok(Box::new(MockGeocoder::new()));
    }

    let endpoint = match &cli.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => Url::parse(DEFAULT_ENDPOINT).map_err(DirectoryError::from)?,
    };
    let mut geocoder = HttpGeocoder::new(endpoint).map_err(DirectoryError::from)?;
    if let Some(api_key) = &cli.api_key {
        geocoder = geocoder.with_api_key(api_key);
    }
    if let Some(seconds) = cli.timeout {
        geocoder = geocoder.with_timeout(Duration::from_secs(seconds));
    }
    Ok(Box::new(geocoder))
}
