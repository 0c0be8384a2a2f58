use std::path::PathBuf;

use data_profile::{ProfileId, ProfilePatch};

use crate::error::AppError;
use crate::{format, parsers, DynDirectory};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "update", about = "Update fields of an existing profile")]
pub struct Update {
    #[clap(value_parser, help = "Id of the profile to update")]
    id: ProfileId,
    #[clap(
        long,
        help = "Changed fields as key:value pairs separated by ',' \
                (interests use ';' between entries)"
    )]
    fields: Option<String>,
    #[clap(long, help = "Changed fields as a JSON object")]
    json: Option<String>,
    #[clap(long, help = "Path to a JSON file holding the changed fields")]
    json_file: Option<PathBuf>,
}

impl Update {
    pub async fn run(&self, directory: &mut DynDirectory) -> Result<(), AppError> {
        let patch = self.patch()?;
        let committed = directory.update(&self.id, patch).await?;

        if let Some(failure) = &committed.geocode_failure {
            println!(
                "Warning: the new address could not be geocoded, location cleared: {}",
                failure
            );
        }
        println!("Updated profile {}", committed.profile.id);
        format::print_details(&committed.profile);
        Ok(())
    }

    fn patch(&self) -> Result<ProfilePatch, AppError> {
        match (&self.fields, &self.json, &self.json_file) {
            (Some(fields), None, None) => {
                parsers::patch_from_pairs(&parsers::key_value_pairs(fields)?)
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
