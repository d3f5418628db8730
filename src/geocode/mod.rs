//! Geocoding port: free-text place name to geographic coordinates.
//!
//! The service only ever needs the best match for a birth place, so the port
//! is a single lookup returning at most one coordinate. The production
//! adapter talks to a Nominatim instance; tests inject doubles.

pub mod nominatim;

pub use nominatim::NominatimGeocoder;

use async_trait::async_trait;

use crate::models::GeoCoordinate;

/// Result type for geocoding operations
pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Error type for geocoding operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeocodeError {
    /// Transport-level failure (connect, timeout, non-success status).
    #[error("Geocoding request failed: {0}")]
    Request(String),

    /// The upstream payload could not be decoded.
    #[error("Geocoding response invalid: {0}")]
    Decode(String),
}

/// Abstract interface to a place-search service.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text place name to the coordinates of its best match,
    /// or `None` when the service has no match at all.
    async fn lookup(&self, place: &str) -> GeocodeResult<Option<GeoCoordinate>>;
}
