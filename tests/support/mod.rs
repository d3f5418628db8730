#![allow(dead_code)]

//! Shared test doubles for the geocoder and ephemeris ports.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use natal_rust::ephemeris::{Ephemeris, EphemerisError, EphemerisResult};
use natal_rust::geocode::{GeocodeError, GeocodeResult, Geocoder};
use natal_rust::models::{
    normalize_degrees, Body, GeoCoordinate, HouseCusp, HouseSystem, JulianDay, PlanetPosition,
};

/// Geocoder that always resolves to the same coordinate.
pub struct FixedGeocoder(pub GeoCoordinate);

impl FixedGeocoder {
    pub fn paris() -> Self {
        Self(GeoCoordinate {
            latitude: 48.8588897,
            longitude: 2.3200410,
        })
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn lookup(&self, _place: &str) -> GeocodeResult<Option<GeoCoordinate>> {
        Ok(Some(self.0))
    }
}

/// Geocoder with no matches for anything.
pub struct EmptyGeocoder;

#[async_trait]
impl Geocoder for EmptyGeocoder {
    async fn lookup(&self, _place: &str) -> GeocodeResult<Option<GeoCoordinate>> {
        Ok(None)
    }
}

/// Geocoder whose upstream is down.
pub struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn lookup(&self, _place: &str) -> GeocodeResult<Option<GeoCoordinate>> {
        Err(GeocodeError::Request("connection refused".to_string()))
    }
}

/// Deterministic ephemeris double that counts how often it is called.
#[derive(Default)]
pub struct CountingEphemeris {
    pub position_calls: AtomicUsize,
    pub house_calls: AtomicUsize,
}

impl CountingEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_calls(&self) -> usize {
        self.position_calls.load(Ordering::SeqCst) + self.house_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Ephemeris for CountingEphemeris {
    async fn body_position(&self, jd: JulianDay, body: Body) -> EphemerisResult<PlanetPosition> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        Ok(PlanetPosition {
            name: body.display_name().to_string(),
            longitude: normalize_degrees(f64::from(body.se_number()) * 30.0 + jd.value() % 1.0),
        })
    }

    async fn house_cusps(
        &self,
        _jd: JulianDay,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> EphemerisResult<Vec<HouseCusp>> {
        self.house_calls.fetch_add(1, Ordering::SeqCst);
        Ok((1..=12u8)
            .map(|house| HouseCusp {
                house,
                longitude: normalize_degrees(10.0 + 30.0 * f64::from(house - 1)),
            })
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "test"
    }
}

/// Ephemeris double that fails on one specific body.
pub struct FailingEphemeris {
    pub fail_on: Body,
    pub position_calls: AtomicUsize,
}

impl FailingEphemeris {
    pub fn new(fail_on: Body) -> Self {
        Self {
            fail_on,
            position_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Ephemeris for FailingEphemeris {
    async fn body_position(&self, _jd: JulianDay, body: Body) -> EphemerisResult<PlanetPosition> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        if body == self.fail_on {
            return Err(EphemerisError::computation(
                body.display_name(),
                "ephemeris file missing",
            ));
        }
        Ok(PlanetPosition {
            name: body.display_name().to_string(),
            longitude: 0.0,
        })
    }

    async fn house_cusps(
        &self,
        _jd: JulianDay,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> EphemerisResult<Vec<HouseCusp>> {
        Ok(vec![])
    }

    fn backend_name(&self) -> &'static str {
        "test"
    }
}
