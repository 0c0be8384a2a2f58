use crate::error::AppError;
use crate::{format, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List the profiles in the directory")]
pub struct List {
    #[clap(long, action, help = "Print profiles as JSON")]
    json: bool,
    #[clap(long, action, help = "Also print the distinct cities and professions")]
    facets: bool,
}

impl List {
    pub fn run(&self, directory: &DynDirectory) -> Result<(), AppError> {
        let profiles: Vec<_> = directory.profiles().iter().collect();
        if self.json {
            format::print_json(&profiles)?;
        } else {
            format::print_table(&profiles);
            println!("{} profiles", profiles.len());
        }

        if self.facets {
            println!("cities:      {}", directory.cities().join(", "));
            println!("professions: {}", directory.professions().join(", "));
        }
        Ok(())
    }
}
