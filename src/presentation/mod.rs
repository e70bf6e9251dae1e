// Presentation layer - HTTP shell around the dashboard
pub mod app_state;
pub mod handlers;
pub mod router;
