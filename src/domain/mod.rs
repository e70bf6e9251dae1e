// Domain layer - Pure climate data models and derivations
pub mod chart;
pub mod classification;
pub mod dashboard;
pub mod decade;
pub mod error;
pub mod language;
pub mod observation;
pub mod trend;
pub mod units;
