use std::io;

use data_error::DirectoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid field list: entries must be key:value pairs separated by ','")]
    InvalidFieldPair,

    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("Provide the profile as exactly one of --fields, --json or --json-file")]
    AmbiguousProfileInput,

    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
