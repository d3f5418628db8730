//! Chart request orchestration.
//!
//! A linear request/response pipeline with no retries and no partial
//! results: extract and validate the birth data, geocode the place, convert
//! to a Julian day, look up the ten body positions in canonical order, then
//! the twelve house cusps, and assemble the chart.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::ephemeris::{Ephemeris, EphemerisError};
use crate::geocode::{GeocodeError, Geocoder};
use crate::models::{Body, Chart, HouseSystem, JulianDay};

/// Birth data extracted from a chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthInput {
    /// Subject name, echoed back verbatim
    pub name: String,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// Birth time, `HH:MM`
    pub birth_time: String,
    /// Free-text birth place for the geocoder
    pub birth_place: String,
}

/// Result type for chart computation
pub type ChartResult<T> = Result<T, ChartError>;

/// Error type for chart computation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChartError {
    /// The geocoder had no match for the birth place.
    #[error("birth place not found")]
    PlaceNotFound,

    /// Missing or malformed request field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Geocoding transport or decode failure.
    #[error("Geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    /// Ephemeris backend failure.
    #[error("Ephemeris failed: {0}")]
    Ephemeris(#[from] EphemerisError),
}

/// Chart request orchestrator.
///
/// Collaborators are injected once at startup; the service itself is
/// stateless and shared across requests.
pub struct ChartService {
    geocoder: Arc<dyn Geocoder>,
    ephemeris: Arc<dyn Ephemeris>,
}

impl ChartService {
    /// Create a new chart service with the given collaborators.
    pub fn new(geocoder: Arc<dyn Geocoder>, ephemeris: Arc<dyn Ephemeris>) -> Self {
        Self { geocoder, ephemeris }
    }

    /// Short identifier of the ephemeris backend in use.
    pub fn ephemeris_backend(&self) -> &'static str {
        self.ephemeris.backend_name()
    }

    /// Compute a natal chart for the given birth data.
    ///
    /// Body lookups are issued one at a time, in canonical order: the Swiss
    /// Ephemeris library is not safe to call concurrently, and the output
    /// array must follow the fixed body list anyway. A failure in any lookup
    /// aborts the whole computation; callers never see partial charts.
    pub async fn compute_chart(&self, input: &BirthInput) -> ChartResult<Chart> {
        let (date, time) = parse_birth_moment(input)?;

        let place = input.birth_place.trim();
        if place.is_empty() {
            return Err(ChartError::InvalidInput(
                "birthPlace must not be empty".to_string(),
            ));
        }

        let coordinate = self
            .geocoder
            .lookup(place)
            .await?
            .ok_or(ChartError::PlaceNotFound)?;

        let jd = JulianDay::from_date_time(date, time);
        log::debug!(
            "computing chart for {:?} at JD {} ({}, {})",
            input.name,
            jd.value(),
            coordinate.latitude,
            coordinate.longitude
        );

        let mut planets = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            planets.push(self.ephemeris.body_position(jd, body).await?);
        }

        let houses = self
            .ephemeris
            .house_cusps(
                jd,
                coordinate.latitude,
                coordinate.longitude,
                HouseSystem::Placidus,
            )
            .await?;

        Ok(Chart {
            name: input.name.clone(),
            planets,
            houses,
        })
    }
}

/// Validate the date and time fields up front so malformed input surfaces as
/// a typed error instead of an opaque downstream failure.
fn parse_birth_moment(input: &BirthInput) -> ChartResult<(NaiveDate, NaiveTime)> {
    let date = NaiveDate::parse_from_str(input.birth_date.trim(), "%Y-%m-%d").map_err(|_| {
        ChartError::InvalidInput(format!(
            "birthDate must be YYYY-MM-DD, got {:?}",
            input.birth_date
        ))
    })?;

    let time = NaiveTime::parse_from_str(input.birth_time.trim(), "%H:%M").map_err(|_| {
        ChartError::InvalidInput(format!(
            "birthTime must be HH:MM, got {:?}",
            input.birth_time
        ))
    })?;

    Ok((date, time))
}
