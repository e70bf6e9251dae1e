// Application layer - Use cases composing the domain derivations
pub mod chart_renderer;
pub mod chart_spec_builder;
pub mod dashboard_service;
pub mod observation_repository;
pub mod view_state;
