//! Nominatim adapter. Implements the Geocoder port via the OpenStreetMap
//! place-search API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{GeocodeError, GeocodeResult, Geocoder};
use crate::models::GeoCoordinate;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = concat!("natal-rust/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of a Nominatim search response. Latitude and longitude arrive
/// as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
}

/// Geocoder adapter for a Nominatim instance.
///
/// The public OSM instance requires an identifying `User-Agent`; a custom
/// one can be set through `NOMINATIM_USER_AGENT`. `base_url` is
/// configurable for self-hosted instances and tests.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Create an adapter against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> GeocodeResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeocodeError::Request(format!("client init: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create an adapter from environment configuration
    /// (`NOMINATIM_URL`, `NOMINATIM_USER_AGENT`).
    pub fn from_env() -> GeocodeResult<Self> {
        let base_url =
            std::env::var("NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent = std::env::var("NOMINATIM_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        Self::new(base_url, &user_agent)
    }

    fn parse_decimal(field: &str, raw: &str) -> GeocodeResult<f64> {
        raw.parse::<f64>().map_err(|_| {
            GeocodeError::Decode(format!("{} is not a decimal degree value: {:?}", field, raw))
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn lookup(&self, place: &str) -> GeocodeResult<Option<GeoCoordinate>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(GeocodeError::Request(format!(
                "Nominatim error {}: {}",
                status, body
            )));
        }

        let matches: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Decode(e.to_string()))?;

        let Some(first) = matches.first() else {
            log::debug!("no geocode match for place {:?}", place);
            return Ok(None);
        };

        Ok(Some(GeoCoordinate {
            latitude: Self::parse_decimal("lat", &first.lat)?,
            longitude: Self::parse_decimal("lon", &first.lon)?,
        }))
    }
}
