// HTTP request handlers
use crate::application::chart_renderer::ChartRenderer;
use crate::application::view_state::ViewState;
use crate::domain::error::DashboardError;
use crate::domain::language::Language;
use crate::domain::units::Unit;
use crate::infrastructure::json_response::{accepts_brotli, json_response, json_response_with_status};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub lang: Option<String>,
    pub unit: Option<String>,
}

impl ViewQuery {
    /// Apply the requested parameters over the defaults, rejecting unknown codes
    fn resolve(&self, defaults: ViewState) -> Result<ViewState, DashboardError> {
        let mut view = defaults;
        if let Some(lang) = &self.lang {
            view.set_language(lang.parse::<Language>()?);
        }
        if let Some(unit) = &self.unit {
            view.set_unit(unit.parse::<Unit>()?);
        }
        Ok(view)
    }
}

/// The trend route only depends on the unit
#[derive(Debug, Default, Deserialize)]
pub struct UnitQuery {
    pub unit: Option<String>,
}

impl UnitQuery {
    fn resolve(&self, default: Unit) -> Result<Unit, DashboardError> {
        match &self.unit {
            Some(unit) => unit.parse(),
            None => Ok(default),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_status(err: &DashboardError) -> StatusCode {
    match err {
        DashboardError::UnsupportedLanguage(_) | DashboardError::UnsupportedUnit(_) => {
            StatusCode::BAD_REQUEST
        }
        DashboardError::InvalidInput(_) | DashboardError::InsufficientData(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn error_response(err: DashboardError, compress: bool) -> Response {
    let status = error_status(&err);
    if status.is_client_error() {
        tracing::warn!("Rejected view parameters: {}", err);
    } else {
        tracing::error!("Failed to build dashboard: {}", err);
    }

    let body = ErrorBody {
        error: err.to_string(),
    };
    match json_response_with_status(status, &body, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

async fn respond<T: Serialize>(result: Result<T, DashboardError>, compress: bool) -> Response {
    match result {
        Ok(value) => match json_response(&value, compress).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Err(err) => error_response(err, compress).await,
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Page text and both chart specifications
pub async fn get_dashboard(
    Query(query): Query<ViewQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = query
        .resolve(state.default_view)
        .and_then(|view| view.derive(&state.dashboard_service));
    respond(result, accepts_brotli(&headers)).await
}

/// Chart.js config for the yearly scatter chart
pub async fn scatter_chart(
    Query(query): Query<ViewQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = query.resolve(state.default_view).and_then(|view| {
        state
            .dashboard_service
            .build_scatter_spec(view.language(), view.unit())
            .map(|spec| state.renderer.render_scatter(&spec))
    });
    respond(result, accepts_brotli(&headers)).await
}

/// Chart.js config for the decade bar chart
pub async fn decade_chart(
    Query(query): Query<ViewQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = query.resolve(state.default_view).and_then(|view| {
        state
            .dashboard_service
            .build_decade_spec(view.language(), view.unit())
            .map(|spec| state.renderer.render_decades(&spec))
    });
    respond(result, accepts_brotli(&headers)).await
}

/// Least-squares trend in the requested unit
pub async fn trend(
    Query(query): Query<UnitQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = query
        .resolve(state.default_view.unit())
        .and_then(|unit| state.dashboard_service.trend(unit));
    respond(result, accepts_brotli(&headers)).await
}
