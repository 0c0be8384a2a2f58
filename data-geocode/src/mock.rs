use std::time::Duration;

use async_trait::async_trait;

use data_error::GeocodeError;
use data_profile::GeoPoint;

use crate::Geocoder;

// Bounding region the fabricated coordinates fall into: a 10x10 degree box
// around the continental US.
const LATITUDE_CENTER: f64 = 37.0;
const LONGITUDE_CENTER: f64 = -95.0;
const SPREAD: f64 = 10.0;

const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// A geocoder that fabricates success.
///
/// Sleeps for an artificial delay, then returns a pseudo-random coordinate
/// within [`MockGeocoder::BOUNDS`]. It never fails, which makes it unsuitable
/// for exercising failure paths; tests needing those define their own fakes.
pub struct MockGeocoder {
    delay: Duration,
}

impl MockGeocoder {
    /// `(min latitude, max latitude, min longitude, max longitude)` of the
    /// region fabricated coordinates fall into.
    pub const BOUNDS: (f64, f64, f64, f64) = (
        LATITUDE_CENTER - SPREAD / 2.0,
        LATITUDE_CENTER + SPREAD / 2.0,
        LONGITUDE_CENTER - SPREAD / 2.0,
        LONGITUDE_CENTER + SPREAD / 2.0,
    );

    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the artificial delay. Tests use a zero delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        tokio::time::sleep(self.delay).await;

        let latitude = LATITUDE_CENTER + fastrand::f64() * SPREAD - SPREAD / 2.0;
        let longitude = LONGITUDE_CENTER + fastrand::f64() * SPREAD - SPREAD / 2.0;
        let point = GeoPoint::new(latitude, longitude);

        log::debug!("geocode/mock: fabricated {} for \"{}\"", point, address);
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fabricated_points_stay_in_bounds() {
        let geocoder = MockGeocoder::with_delay(Duration::ZERO);
        let (lat_min, lat_max, lng_min, lng_max) = MockGeocoder::BOUNDS;

        for _ in 0..100 {
            let point = geocoder.geocode("anywhere").await.unwrap();
            assert!(point.latitude >= lat_min && point.latitude <= lat_max);
            assert!(point.longitude >= lng_min && point.longitude <= lng_max);
        }
    }

    #[tokio::test]
    async fn delay_is_honored() {
        let delay = Duration::from_millis(50);
        let geocoder = MockGeocoder::with_delay(delay);

        let start = std::time::Instant::now();
        geocoder.geocode("anywhere").await.unwrap();
        assert!(start.elapsed() >= delay);
    }
}
