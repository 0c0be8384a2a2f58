//! # Data Geocode
//!
//! `data-geocode` turns free-text postal addresses into coordinates behind
//! the [`Geocoder`] capability trait. Two implementations ship:
//!
//! - [`HttpGeocoder`]: a real client for a Nominatim-style search endpoint,
//!   with a per-request timeout and explicit failure variants.
//! - [`MockGeocoder`]: fabricates a plausible coordinate after an artificial
//!   delay and never fails. Useful for demos and offline development.
//!
//! Failures are values ([`GeocodeError`]), never panics; callers decide
//! whether a missing coordinate is acceptable.

use async_trait::async_trait;

use data_error::GeocodeError;
use data_profile::GeoPoint;

mod http;
mod mock;

pub use http::{HttpGeocoder, DEFAULT_ENDPOINT};
pub use mock::MockGeocoder;

/// Capability interface for address resolution.
///
/// Implementations must not block the caller and must report failure through
/// the error variant rather than panicking.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` to a coordinate, or explain why that was not
    /// possible.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}

#[async_trait]
impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        (**self).geocode(address).await
    }
}
