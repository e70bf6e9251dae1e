// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::view_state::ViewState;
use crate::infrastructure::chartjs_renderer::ChartJsRenderer;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub renderer: ChartJsRenderer,
    /// View used when a request leaves a parameter out
    pub default_view: ViewState,
}
