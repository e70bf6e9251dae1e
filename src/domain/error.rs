// Dashboard error taxonomy
use thiserror::Error;

/// Errors raised while deriving dashboard data
///
/// All of these are programming or configuration errors: the dataset and the
/// view enums are closed, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Malformed or empty observation data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Unit code outside the supported set
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// Not enough distinct points to fit a trend line
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
