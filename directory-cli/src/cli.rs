use clap::Parser;
use url::Url;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "directory-cli")]
#[clap(about = "Browse and administer the profile directory", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        help = "Start from an empty directory instead of the built-in samples"
    )]
    pub empty: bool,
    #[clap(
        long,
        global = true,
        help = "Geocode against a real endpoint instead of the mock"
    )]
    pub http: bool,
    #[clap(long, global = true, help = "Geocoding endpoint (implies --http)")]
    pub endpoint: Option<Url>,
    #[clap(long, global = true, help = "API key for the geocoding endpoint")]
    pub api_key: Option<String>,
    #[clap(long, global = true, help = "Geocoding timeout in seconds")]
    pub timeout: Option<u64>,
    #[clap(subcommand)]
    pub command: Commands,
}
