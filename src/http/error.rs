//! HTTP error handling and response types.
//!
//! Every failure keeps the original flat `{ "error": ... }` body. Upstream
//! detail (geocoder transport errors, native ephemeris messages) is logged
//! here and never forwarded to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorBody;
use crate::services::ChartError;

/// Generic user-facing message for upstream failures.
const GENERIC_CHART_ERROR: &str = "natal chart computation failed";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Chart computation failed
    Chart(ChartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Chart(ChartError::PlaceNotFound) => {
                (StatusCode::NOT_FOUND, ChartError::PlaceNotFound.to_string())
            }
            AppError::Chart(ChartError::InvalidInput(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            AppError::Chart(err) => {
                tracing::error!("{}: {}", GENERIC_CHART_ERROR, err);
                (StatusCode::BAD_GATEWAY, GENERIC_CHART_ERROR.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::Chart(err)
    }
}
