use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use data_error::GeocodeError;
use data_profile::GeoPoint;

use crate::Geocoder;

/// Public Nominatim search endpoint. Production deployments should point at
/// their own instance or a commercial provider.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Geocoder backed by a Nominatim-style HTTP search endpoint.
///
/// The endpoint is queried with `q`, `format=json` and `limit=1`; the first
/// hit wins. Every request runs under a deadline, and expiry surfaces as
/// [`GeocodeError::Timeout`] rather than hanging the caller.
pub struct HttpGeocoder {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    timeout: Duration,
}

/// One entry of the endpoint's response array. Nominatim encodes coordinates
/// as strings.
#[derive(Debug, Deserialize)]
struct Hit {
    lat: String,
    lon: String,
}

impl HttpGeocoder {
    pub fn new(endpoint: Url) -> Result<Self, GeocodeError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("profile-directory/0.1"),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Attach an API key, passed as the `key` query parameter.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let mut request = self.client.get(self.endpoint.clone()).query(&[
            ("q", address),
            ("format", "json"),
            ("limit", "1"),
        ]);
        if let Some(api_key) = &self.api_key {
            request = request.query(&[("key", api_key.as_str())]);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }
        let response = response.error_for_status()?;

        let hits: Vec<Hit> = response.json().await?;
        point_from_hits(address, hits)
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::NoMatch(address.to_owned()));
        }

        let point = match tokio::time::timeout(self.timeout, self.fetch(address)).await {
            Ok(result) => result?,
            Err(_) => return Err(GeocodeError::Timeout),
        };

        log::debug!("geocode/http: resolved {} for \"{}\"", point, address);
        Ok(point)
    }
}

fn point_from_hits(address: &str, hits: Vec<Hit>) -> Result<GeoPoint, GeocodeError> {
    let hit = hits
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NoMatch(address.to_owned()))?;

    let latitude = parse_coordinate(&hit.lat)?;
    let longitude = parse_coordinate(&hit.lon)?;
    Ok(GeoPoint::new(latitude, longitude))
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.parse().map_err(|_| {
        GeocodeError::Network(format!("unexpected coordinate in payload: {:?}", raw))
    })
}
