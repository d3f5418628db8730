//! Chart domain types: coordinates, body positions, house cusps and the
//! assembled chart. All of these are request-scoped; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees, as resolved by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ecliptic position of a single body.
///
/// `longitude` is normalized to [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Display name of the body
    pub name: String,
    /// Ecliptic longitude in degrees
    pub longitude: f64,
}

/// One of the twelve house cusps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1 through 12
    pub house: u8,
    /// Cusp ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
}

/// House system selector passed to the ephemeris backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseSystem {
    Placidus,
    Koch,
    Equal,
    WholeSign,
}

impl HouseSystem {
    /// Swiss Ephemeris house-system code (ASCII letter).
    pub fn se_code(&self) -> i32 {
        let c = match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::WholeSign => b'W',
        };
        c as i32
    }
}

/// A fully computed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Name from the request, echoed back verbatim
    pub name: String,
    /// Ten body positions in canonical order (Sun .. Pluto)
    pub planets: Vec<PlanetPosition>,
    /// Twelve house cusps numbered 1..=12 in ascending order
    pub houses: Vec<HouseCusp>,
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert!((normalize_degrees(725.5) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_house_system_codes() {
        assert_eq!(HouseSystem::Placidus.se_code(), 'P' as i32);
        assert_eq!(HouseSystem::WholeSign.se_code(), 'W' as i32);
    }

    #[test]
    fn test_chart_serialization_shape() {
        let chart = Chart {
            name: "Ada".to_string(),
            planets: vec![PlanetPosition {
                name: "Sun".to_string(),
                longitude: 280.5,
            }],
            houses: vec![HouseCusp {
                house: 1,
                longitude: 12.0,
            }],
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["planets"][0]["name"], "Sun");
        assert_eq!(json["houses"][0]["house"], 1);
    }
}
