use crate::error::AppError;
use crate::{format, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "search", about = "Free-text search over the directory")]
pub struct Search {
    #[clap(value_parser, help = "Query matched against names, descriptions, \
                                 addresses, professions, cities and interests")]
    query: String,
    #[clap(long, action, help = "Print matches as JSON")]
    json: bool,
}

impl Search {
    pub fn run(&self, directory: &DynDirectory) -> Result<(), AppError> {
        let matches = directory.search(&self.query);
        if self.json {
            format::print_json(&matches)?;
        } else {
            format::print_table(&matches);
            println!(
                "{} of {} profiles match",
                matches.len(),
                directory.len()
            );
        }
        Ok(())
    }
}
