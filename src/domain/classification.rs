// Per-point classification against the reference value
use crate::domain::error::Result;
use crate::domain::observation::{validate_points, ObservationPoint};
use crate::domain::units::{from_display, to_display, Unit};
use serde::Serialize;

pub const WARM_COLOR: &str = "#d32f2f";
pub const COOL_COLOR: &str = "#388e3c";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Warmer,
    Colder,
}

impl Category {
    /// Classify a Celsius deviation. Zero counts as warmer.
    pub fn of_celsius(celsius_deviation: f64) -> Self {
        if celsius_deviation >= 0.0 {
            Category::Warmer
        } else {
            Category::Colder
        }
    }

    /// Classify a value shown in `unit`, against the same Celsius reference
    pub fn of_display(value: f64, unit: Unit) -> Self {
        Self::of_celsius(from_display(value, unit))
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Warmer => WARM_COLOR,
            Category::Colder => COOL_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedPoint {
    pub year: i32,
    pub display_value: f64,
    pub category: Category,
}

impl ClassifiedPoint {
    /// The category always comes from the Celsius value, whatever the display unit.
    pub fn from_observation(point: &ObservationPoint, unit: Unit) -> Self {
        Self {
            year: point.year,
            display_value: to_display(point.celsius_deviation, unit),
            category: Category::of_celsius(point.celsius_deviation),
        }
    }
}

pub fn classify_series(points: &[ObservationPoint], unit: Unit) -> Result<Vec<ClassifiedPoint>> {
    validate_points(points)?;
    Ok(points
        .iter()
        .map(|p| ClassifiedPoint::from_observation(p, unit))
        .collect())
}
