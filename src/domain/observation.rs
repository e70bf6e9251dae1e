// Observation domain model
use crate::domain::error::{DashboardError, Result};
use serde::Serialize;
use std::ops::Deref;

/// One year's temperature deviation from the reference baseline, in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservationPoint {
    pub year: i32,
    pub celsius_deviation: f64,
}

impl ObservationPoint {
    pub fn new(year: i32, celsius_deviation: f64) -> Self {
        Self {
            year,
            celsius_deviation,
        }
    }
}

/// Validated, immutable observation sequence.
///
/// Non-empty, finite values, years strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    points: Vec<ObservationPoint>,
}

impl ObservationSeries {
    pub fn new(points: Vec<ObservationPoint>) -> Result<Self> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    pub fn first_year(&self) -> i32 {
        self.points[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.points[self.points.len() - 1].year
    }
}

impl Deref for ObservationSeries {
    type Target = [ObservationPoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

/// Reject input the derivations cannot handle
pub fn validate_points(points: &[ObservationPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(DashboardError::InvalidInput(
            "observation series is empty".to_string(),
        ));
    }

    if let Some(bad) = points.iter().find(|p| !p.celsius_deviation.is_finite()) {
        return Err(DashboardError::InvalidInput(format!(
            "year {} has a non-numeric deviation",
            bad.year
        )));
    }

    if let Some(pair) = points.windows(2).find(|w| w[1].year <= w[0].year) {
        return Err(DashboardError::InvalidInput(format!(
            "years must be strictly increasing, found {} after {}",
            pair[1].year, pair[0].year
        )));
    }

    Ok(())
}
