use data_profile::ProfileId;

use crate::error::AppError;
use crate::{format, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "select", about = "Set or clear the current selection")]
pub struct Select {
    #[clap(
        value_parser,
        required_unless_present = "clear",
        help = "Id of the profile to select"
    )]
    id: Option<ProfileId>,
    #[clap(long, action, conflicts_with = "id", help = "Clear the selection")]
    clear: bool,
}

impl Select {
    pub fn run(&self, directory: &mut DynDirectory) -> Result<(), AppError> {
        directory.select(self.id.clone())?;

        match directory.selected() {
            Some(profile) => {
                println!("Selected profile {}", profile.id);
                format::print_details(profile);
            }
            None => println!("Selection cleared"),
        }
        Ok(())
    }
}
