// Ordinary least-squares trend over classified points
use crate::domain::classification::{Category, ClassifiedPoint};
use crate::domain::error::{DashboardError, Result};
use crate::domain::units::Unit;
use serde::Serialize;

/// `y = slope * year + intercept`, in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendFit {
    pub fn value_at(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }

    /// Change per decade, the figure people usually quote
    pub fn slope_per_decade(&self) -> f64 {
        self.slope * 10.0
    }

    pub fn summarize(&self, unit: Unit, from_year: i32, to_year: i32) -> TrendSummary {
        TrendSummary {
            unit,
            fit: *self,
            slope_per_decade: self.slope_per_decade(),
            from_year,
            from_value: self.value_at(from_year),
            from_category: Category::of_display(self.value_at(from_year), unit),
            to_year,
            to_value: self.value_at(to_year),
            to_category: Category::of_display(self.value_at(to_year), unit),
        }
    }
}

/// Fitted line with its endpoints over the observed years
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub unit: Unit,
    #[serde(flatten)]
    pub fit: TrendFit,
    pub slope_per_decade: f64,
    pub from_year: i32,
    pub from_value: f64,
    pub from_category: Category,
    pub to_year: i32,
    pub to_value: f64,
    pub to_category: Category,
}

pub fn linear_fit(points: &[ClassifiedPoint]) -> Result<TrendFit> {
    if points.len() < 2 {
        return Err(DashboardError::InsufficientData(format!(
            "a trend needs at least 2 points, got {}",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| f64::from(p.year)).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.display_value).sum::<f64>() / n;

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dx = f64::from(p.year) - mean_x;
        (sxy + dx * (p.display_value - mean_y), sxx + dx * dx)
    });

    if sxx == 0.0 {
        return Err(DashboardError::InsufficientData(
            "all points share the same year".to_string(),
        ));
    }

    let slope = sxy / sxx;
    Ok(TrendFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
