// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    decade_chart, get_dashboard, health_check, scatter_chart, trend,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/charts/scatter", get(scatter_chart))
        .route("/charts/decades", get(decade_chart))
        .route("/charts/trend", get(trend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
