use data_error::DirectoryError;
use data_geocode::Geocoder;

use crate::error::AppError;
use crate::DynDirectory;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "geocode", about = "Resolve an address to coordinates")]
pub struct Geocode {
    #[clap(value_parser, help = "Free-text postal address")]
    address: String,
}

impl Geocode {
    pub async fn run(&self, directory: &DynDirectory) -> Result<(), AppError> {
        let point = directory
            .geocoder()
            .geocode(&self.address)
            .await
            .map_err(DirectoryError::from)?;
        println!("{}", point);
        Ok(())
    }
}
