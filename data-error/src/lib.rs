use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
    #[error("Duplicate profile id: {0}")]
    Collision(String),
    #[error("Parsing error")]
    Parse,
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<url::ParseError> for DirectoryError {
    fn from(_: url::ParseError) -> Self {
        Self::Parse
    }
}

/// Reasons a free-text address could not be resolved to coordinates.
///
/// All variants are recoverable: a profile mutation proceeds without a
/// location and the caller decides whether to retry.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("No coordinates found for address: {0}")]
    NoMatch(String),
    #[error("Geocoding request timed out")]
    Timeout,
    #[error("Geocoding service rate limit reached")]
    RateLimited,
    #[error("Geocoding transport error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Self::RateLimited;
            }
        }
        Self::Network(err.to_string())
    }
}
