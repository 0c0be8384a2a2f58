use data_profile::ProfileId;

use crate::error::AppError;
use crate::{format, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show one profile in full")]
pub struct Show {
    #[clap(value_parser, help = "Id of the profile to show")]
    id: ProfileId,
    #[clap(long, action, help = "Print the profile as JSON")]
    json: bool,
}

impl Show {
    pub fn run(&self, directory: &DynDirectory) -> Result<(), AppError> {
        let profile = directory
            .get(&self.id)
            .ok_or_else(|| data_error::DirectoryError::NotFound(self.id.to_string()))?;

        if self.json {
            format::print_json(&[profile])?;
        } else {
            format::print_details(profile);
        }
        Ok(())
    }
}
