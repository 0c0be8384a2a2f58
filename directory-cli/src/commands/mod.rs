use clap::Subcommand;

mod add;
mod delete;
mod filter;
mod geocode;
mod list;
mod search;
mod select;
mod show;
mod update;

use crate::error::AppError;
use crate::DynDirectory;

#[derive(Debug, Subcommand)]
pub enum Commands {
    List(list::List),
    Show(show::Show),
    Search(search::Search),
    Filter(filter::Filter),
    Add(add::Add),
    Update(update::Update),
    Delete(delete::Delete),
    Select(select::Select),
    Geocode(geocode::Geocode),
}

impl Commands {
    pub async fn run(&self, directory: &mut DynDirectory) -> Result<(), AppError> {
        match self {
            Commands::List(cmd) => cmd.run(directory),
            Commands::Show(cmd) => cmd.run(directory),
            Commands::Search(cmd) => cmd.run(directory),
            Commands::Filter(cmd) => cmd.run(directory),
            Commands::Add(cmd) => cmd.run(directory).await,
            Commands::Update(cmd) => cmd.run(directory).await,
            Commands::Delete(cmd) => cmd.run(directory),
            Commands::Select(cmd) => cmd.run(directory),
            Commands::Geocode(cmd) => cmd.run(directory).await,
        }
    }
}
