//! Deterministic in-process ephemeris for unit testing and local development.
//!
//! Positions come from linear mean-element motion and houses from an
//! equal-house split at a sidereal-time ascendant. Accuracy is degree-level
//! at best; this backend exists so the service can run and be tested without
//! the native Swiss Ephemeris library, it is not a substitute for it.

use async_trait::async_trait;

use super::error::EphemerisResult;
use super::Ephemeris;
use crate::models::{normalize_degrees, Body, HouseCusp, HouseSystem, JulianDay, PlanetPosition};

/// Mean obliquity of the ecliptic at J2000.0, degrees.
const OBLIQUITY_J2000: f64 = 23.439_291_1;

/// (mean longitude at J2000.0, mean daily motion), degrees.
fn mean_elements(body: Body) -> (f64, f64) {
    match body {
        Body::Sun => (280.466_46, 0.985_647_36),
        Body::Moon => (218.316_45, 13.176_396_48),
        Body::Mercury => (252.250_84, 4.092_334_45),
        Body::Venus => (181.979_73, 1.602_130_34),
        Body::Mars => (355.453_32, 0.524_033_04),
        Body::Jupiter => (34.404_38, 0.083_086_76),
        Body::Saturn => (49.944_32, 0.033_444_14),
        Body::Uranus => (313.232_18, 0.011_728_34),
        Body::Neptune => (304.880_03, 0.005_981_03),
        Body::Pluto => (238.928_81, 0.003_975_57),
    }
}

/// Deterministic mean-motion ephemeris backend.
pub struct LocalEphemeris;

impl LocalEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Greenwich mean sidereal time at `jd`, in degrees.
    fn gmst_degrees(jd: JulianDay) -> f64 {
        normalize_degrees(280.460_618_37 + 360.985_647_366_29 * jd.days_since_j2000())
    }

    /// Ascendant longitude from sidereal time, observer latitude and the
    /// ecliptic obliquity. Undefined at the poles.
    fn ascendant(jd: JulianDay, latitude: f64, longitude: f64) -> f64 {
        let ramc = (Self::gmst_degrees(jd) + longitude).to_radians();
        let eps = OBLIQUITY_J2000.to_radians();
        let lat = latitude.to_radians();

        let asc = (-ramc.cos()).atan2(ramc.sin() * eps.cos() + lat.tan() * eps.sin());
        normalize_degrees(asc.to_degrees())
    }
}

impl Default for LocalEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Ephemeris for LocalEphemeris {
    async fn body_position(
        &self,
        jd: JulianDay,
        body: Body,
    ) -> EphemerisResult<PlanetPosition> {
        let (epoch_longitude, daily_motion) = mean_elements(body);
        let longitude =
            normalize_degrees(epoch_longitude + daily_motion * jd.days_since_j2000());

        Ok(PlanetPosition {
            name: body.display_name().to_string(),
            longitude,
        })
    }

    async fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        _system: HouseSystem,
    ) -> EphemerisResult<Vec<HouseCusp>> {
        // Quadrant systems like Placidus need the native engine; the dev
        // backend always splits the ecliptic into equal houses from the
        // ascendant.
        let asc = Self::ascendant(jd, latitude, longitude);

        let cusps = (1..=12u8)
            .map(|house| HouseCusp {
                house,
                longitude: normalize_degrees(asc + 30.0 * f64::from(house - 1)),
            })
            .collect();

        Ok(cusps)
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::J2000;

    fn j2000() -> JulianDay {
        JulianDay::new(J2000)
    }

    #[tokio::test]
    async fn test_ten_bodies_in_range() {
        let ephe = LocalEphemeris::new();
        for body in Body::ALL {
            let pos = ephe.body_position(j2000(), body).await.unwrap();
            assert!(
                (0.0..360.0).contains(&pos.longitude),
                "{} out of range: {}",
                pos.name,
                pos.longitude
            );
        }
    }

    #[tokio::test]
    async fn test_sun_near_mean_longitude_at_epoch() {
        let ephe = LocalEphemeris::new();
        let sun = ephe.body_position(j2000(), Body::Sun).await.unwrap();
        assert!((sun.longitude - 280.466_46).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_positions_are_deterministic() {
        let ephe = LocalEphemeris::new();
        let jd = JulianDay::from_gregorian(1990, 6, 15, 8.5);
        let a = ephe.body_position(jd, Body::Mars).await.unwrap();
        let b = ephe.body_position(jd, Body::Mars).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_twelve_houses_ascending() {
        let ephe = LocalEphemeris::new();
        let jd = JulianDay::from_gregorian(1985, 3, 21, 6.0);
        let houses = ephe
            .house_cusps(jd, 48.85, 2.35, HouseSystem::Placidus)
            .await
            .unwrap();

        assert_eq!(houses.len(), 12);
        for (i, cusp) in houses.iter().enumerate() {
            assert_eq!(cusp.house, (i + 1) as u8);
            assert!((0.0..360.0).contains(&cusp.longitude));
        }
    }

    #[tokio::test]
    async fn test_houses_thirty_degrees_apart() {
        let ephe = LocalEphemeris::new();
        let jd = JulianDay::from_gregorian(1985, 3, 21, 6.0);
        let houses = ephe
            .house_cusps(jd, 48.85, 2.35, HouseSystem::Placidus)
            .await
            .unwrap();

        let gap = normalize_degrees(houses[1].longitude - houses[0].longitude);
        assert!((gap - 30.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_houses_depend_on_location() {
        let ephe = LocalEphemeris::new();
        let jd = JulianDay::from_gregorian(1985, 3, 21, 6.0);
        let paris = ephe
            .house_cusps(jd, 48.85, 2.35, HouseSystem::Placidus)
            .await
            .unwrap();
        let tokyo = ephe
            .house_cusps(jd, 35.68, 139.69, HouseSystem::Placidus)
            .await
            .unwrap();
        assert_ne!(paris[0].longitude, tokyo[0].longitude);
    }
}
