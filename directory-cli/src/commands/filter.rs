use profile_store::ProfileFilter;

use crate::error::AppError;
use crate::{format, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "filter", about = "Filter profiles by city and/or profession")]
pub struct Filter {
    #[clap(long, help = "Exact city match, case-insensitive")]
    city: Option<String>,
    #[clap(long, help = "Exact profession match, case-insensitive")]
    profession: Option<String>,
    #[clap(long, action, help = "Print matches as JSON")]
    json: bool,
}

impl Filter {
    pub fn run(&self, directory: &DynDirectory) -> Result<(), AppError> {
        let criteria = ProfileFilter {
            city: self.city.clone(),
            profession: self.profession.clone(),
        };

        let matches = directory.filter(&criteria);
        if self.json {
            format::print_json(&matches)?;
        } else {
            format::print_table(&matches);
            println!("{} of {} profiles match", matches.len(), directory.len());
        }
        Ok(())
    }
}
