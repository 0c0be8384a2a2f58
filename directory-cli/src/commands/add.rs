use std::path::PathBuf;

use data_profile::ProfileDraft;

use crate::error::AppError;
use crate::{format, parsers, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Create a profile and geocode its address")]
pub struct Add {
    #[clap(
        long,
        help = "Profile fields as key:value pairs separated by ',' \
                (interests use ';' between entries)"
    )]
    fields: Option<String>,
    #[clap(long, help = "Profile as a JSON object (no id, no location)")]
    json: Option<String>,
    #[clap(long, help = "Path to a JSON file holding the profile")]
    json_file: Option<PathBuf>,
}

impl Add {
    pub async fn run(&self, directory: &mut DynDirectory) -> Result<(), AppError> {
        let draft = self.draft()?;
        let committed = directory.add(draft).await?;

        if let Some(failure) = &committed.geocode_failure {
            println!("Warning: profile stored without a location: {}", failure);
        }
        println!("Added profile {}", committed.profile.id);
        format::print_details(&committed.profile);
        Ok(())
    }

    fn draft(&self) -> Result<ProfileDraft, AppError> {
        match (&self.fields, &self.json, &self.json_file) {
            (Some(fields), None, None) => {
                parsers::draft_from_pairs(&parsers::key_value_pairs(fields)?)
            }
            (None, Some(json), None) => Ok(serde_json::from_str(json)?),
            (None, None, Some(path)) => {
                let json = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&json)?)
            }
            _ => Err(AppError::AmbiguousProfileInput),
        }
    }
}
