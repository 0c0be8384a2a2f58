use data_profile::ProfileId;

use crate::error::AppError;
use crate::DynDirectory;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "delete", about = "Delete a profile")]
pub struct Delete {
    #[clap(value_parser, help = "Id of the profile to delete")]
    id: ProfileId,
}

impl Delete {
    pub fn run(&self, directory: &mut DynDirectory) -> Result<(), AppError> {
        match directory.remove(&self.id) {
            Some(removed) => println!("Deleted profile {} ({})", removed.id, removed.name),
            None => println!("No profile with id {}", self.id),
        }
        Ok(())
    }
}
