// Renderer-agnostic chart specifications
use crate::domain::classification::Category;
use crate::domain::units::{round2, Unit};
use serde::Serialize;

pub const TREND_COLOR: &str = "rgba(33, 150, 243, 0.7)";
pub const DECADE_BAR_COLOR: &str = "#d32f2f";
pub const LEGEND_LABEL_COLOR: &str = "#d32f2f";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub title: String,
}

impl AxisSpec {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub x: i32,
    pub y: f64,
    pub color: String,
    pub category: Category,
}

/// Asks the renderer to overlay a linear trend fitted on the plotted points
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDirective {
    pub color: String,
    pub line_style: String,
    pub width: u32,
}

impl Default for TrendDirective {
    fn default() -> Self {
        Self {
            color: TREND_COLOR.to_string(),
            line_style: "solid".to_string(),
            width: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub label_color: String,
}

/// Tooltip text rule: `"{year} : {value} {symbol}"` with two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipFormat {
    pub unit: Unit,
    pub decimals: usize,
}

impl TooltipFormat {
    pub fn new(unit: Unit) -> Self {
        Self { unit, decimals: 2 }
    }

    pub fn label(&self, year: i32, value: f64) -> String {
        format!(
            "{} : {:.*} {}",
            year,
            self.decimals,
            round2(value),
            self.unit.symbol()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSpec {
    pub title: String,
    pub dataset_label: String,
    pub points: Vec<ScatterPoint>,
    pub trend: TrendDirective,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub legend: LegendSpec,
    pub tooltip: TooltipFormat,
}

impl ScatterSpec {
    /// Tooltip text for every point, in point order
    pub fn tooltip_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| self.tooltip.label(p.x, p.y))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeBar {
    pub label: String,
    pub value: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeBarSpec {
    pub title: String,
    pub dataset_label: String,
    pub bars: Vec<DecadeBar>,
    pub color: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
}
