//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::ChartService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chart orchestration service
    pub chart_service: Arc<ChartService>,
}

impl AppState {
    /// Create a new application state with the given chart service.
    pub fn new(chart_service: Arc<ChartService>) -> Self {
        Self { chart_service }
    }
}
