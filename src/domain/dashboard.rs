// Dashboard domain model
use super::chart::{DecadeBarSpec, ScatterSpec};
use super::language::Language;
use super::units::Unit;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// One button of the language switcher
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: Language,
    pub label: String,
    pub selected: bool,
}

/// Text around the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub nav_title: String,
    pub language_options: Vec<LanguageOption>,
    pub heading: String,
    pub source_intro: String,
    pub source_name: String,
    pub source_url: String,
    pub fahrenheit_disclaimer: String,
    pub unit_toggle_label: String,
    pub legend_title: String,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub language: Language,
    pub unit: Unit,
    pub page: PageSpec,
    pub scatter: ScatterSpec,
    pub decades: DecadeBarSpec,
}
