//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the chart
//! service for business logic.

use axum::{extract::State, Json};

use super::dto::{
    ChartRequest, ChartResponse, HealthResponse, NatalStubError, NatalStubResponse,
    ServiceStatusResponse,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health / Status
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the ephemeris backend in use.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ephemeris: state.chart_service.ephemeris_backend().to_string(),
    })
}

/// GET /api/test
///
/// Static status payload kept for frontend compatibility.
pub async fn service_status() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        message: "Server is running".to_string(),
    })
}

// =============================================================================
// Chart Computation
// =============================================================================

/// POST /api/calculate
///
/// Compute a natal chart: geocode the birth place, then look up the ten body
/// positions and twelve Placidus house cusps for the birth instant.
pub async fn calculate_chart(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> HandlerResult<ChartResponse> {
    let input = request.into();
    let chart = state.chart_service.compute_chart(&input).await?;
    Ok(Json(chart.into()))
}

// =============================================================================
// Natal Stub
// =============================================================================

/// POST /api/natal
///
/// Legacy stub kept for frontend compatibility: validates presence of the
/// three required fields and echoes them beside a placeholder message. Does
/// no computation.
pub async fn natal_stub(
    Json(body): Json<serde_json::Value>,
) -> Result<Json<NatalStubResponse>, (axum::http::StatusCode, Json<NatalStubError>)> {
    let field = |key: &str| {
        body.get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("birthDate"), field("birthTime"), field("birthPlace")) {
        (Some(birth_date), Some(birth_time), Some(birth_place)) => Ok(Json(NatalStubResponse {
            message: "Calculating natal chart...".to_string(),
            birth_date,
            birth_time,
            birth_place,
        })),
        _ => Err((
            axum::http::StatusCode::BAD_REQUEST,
            Json(NatalStubError {
                status_code: 400,
                message: "Missing required fields: birthDate, birthTime, or birthPlace"
                    .to_string(),
            }),
        )),
    }
}
