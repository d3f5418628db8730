//! Data Transfer Objects for the HTTP API.
//!
//! Field names follow the original frontend contract (camelCase). The chart
//! payload reuses the already-serializable domain types.

use serde::{Deserialize, Serialize};

pub use crate::models::{HouseCusp, PlanetPosition};

use crate::models::Chart;
use crate::services::BirthInput;

/// Request body for chart computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// Subject name, echoed back in the response
    pub name: String,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// Birth time, `HH:MM`
    pub birth_time: String,
    /// Free-text birth place
    pub birth_place: String,
}

impl From<ChartRequest> for BirthInput {
    fn from(req: ChartRequest) -> Self {
        Self {
            name: req.name,
            birth_date: req.birth_date,
            birth_time: req.birth_time,
            birth_place: req.birth_place,
        }
    }
}

/// Planets and houses of a computed chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Ten body positions in canonical order (Sun .. Pluto)
    pub planets: Vec<PlanetPosition>,
    /// Twelve house cusps numbered 1..=12
    pub houses: Vec<HouseCusp>,
}

/// Successful chart response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub name: String,
    pub chart_data: ChartData,
}

impl From<Chart> for ChartResponse {
    fn from(chart: Chart) -> Self {
        Self {
            name: chart.name,
            chart_data: ChartData {
                planets: chart.planets,
                houses: chart.houses,
            },
        }
    }
}

/// Flat error body, the original wire contract for every failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Echo payload of the `/api/natal` stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalStubResponse {
    pub message: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
}

/// Missing-field payload of the `/api/natal` stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalStubError {
    pub status_code: u16,
    pub message: String,
}

/// Static status payload of `GET /api/test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Ephemeris backend in use
    pub ephemeris: String,
}
