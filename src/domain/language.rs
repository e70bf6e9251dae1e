// Display languages and their fixed label tables
use crate::domain::error::DashboardError;
use crate::domain::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Language {
    #[default]
    French,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// Name on the language switcher, the same whichever language is active
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::French => "Français 🇫🇷",
            Language::English => "English 🇬🇧",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    pub fn chart_labels(self) -> &'static ChartLabels {
        match self {
            Language::French => &FRENCH_CHART_LABELS,
            Language::English => &ENGLISH_CHART_LABELS,
        }
    }

    pub fn page_labels(self) -> &'static PageLabels {
        match self {
            Language::French => &FRENCH_PAGE_LABELS,
            Language::English => &ENGLISH_PAGE_LABELS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" => Ok(Language::French),
            "en" | "english" => Ok(Language::English),
            _ => Err(DashboardError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Strings used by the two charts
#[derive(Debug, PartialEq, Eq)]
pub struct ChartLabels {
    pub chart_title: &'static str,
    pub dataset_label: &'static str,
    pub year_axis_label: &'static str,
    deviation_axis_celsius: &'static str,
    deviation_axis_fahrenheit: &'static str,
    pub decade_axis_label: &'static str,
    pub decade_title: &'static str,
    pub decade_dataset_label: &'static str,
}

impl ChartLabels {
    pub fn deviation_axis_label(&self, unit: Unit) -> &'static str {
        match unit {
            Unit::Celsius => self.deviation_axis_celsius,
            Unit::Fahrenheit => self.deviation_axis_fahrenheit,
        }
    }
}

/// Strings surrounding the charts on the page
#[derive(Debug, PartialEq, Eq)]
pub struct PageLabels {
    pub nav_title: &'static str,
    pub heading: &'static str,
    pub source_intro: &'static str,
    pub source_name: &'static str,
    pub source_url: &'static str,
    pub fahrenheit_disclaimer: &'static str,
    show_in_fahrenheit: &'static str,
    show_in_celsius: &'static str,
    pub legend_title: &'static str,
    pub legend_warmer: &'static str,
    pub legend_colder: &'static str,
    pub legend_trend: &'static str,
}

impl PageLabels {
    /// Label of the button switching away from `current`
    pub fn unit_toggle_label(&self, current: Unit) -> &'static str {
        match current.other() {
            Unit::Celsius => self.show_in_celsius,
            Unit::Fahrenheit => self.show_in_fahrenheit,
        }
    }
}

static FRENCH_CHART_LABELS: ChartLabels = ChartLabels {
    chart_title: "Écarts annuels de température (1948–2023)",
    dataset_label: "Écart de température (°C)",
    year_axis_label: "Année",
    deviation_axis_celsius: "Écart (°C)",
    deviation_axis_fahrenheit: "Écart (°F)",
    decade_axis_label: "Décennie",
    decade_title: "Évolution des moyennes par décennie",
    decade_dataset_label: "Moyenne par décennie",
};

static ENGLISH_CHART_LABELS: ChartLabels = ChartLabels {
    chart_title: "Annual Temperature Deviations (1948–2023)",
    dataset_label: "Temperature Deviation (°C)",
    year_axis_label: "Year",
    deviation_axis_celsius: "Deviation (°C)",
    deviation_axis_fahrenheit: "Deviation (°F)",
    decade_axis_label: "Decade",
    decade_title: "Decade-Averaged Temperature Deviations",
    decade_dataset_label: "Average per Decade",
};

static FRENCH_PAGE_LABELS: PageLabels = PageLabels {
    nav_title: "Tableau de bord",
    heading: "Tableau de bord climatique du Canada",
    source_intro: "Les données en Celsius proviennent de",
    source_name: "Environnement et Changement climatique Canada",
    source_url: "https://www.canada.ca/fr/environnement-changement-climatique/services/indicateurs-environnementaux/changements-temperature.html",
    fahrenheit_disclaimer: "Les données en Fahrenheit ont été généré à l'aide de l'IA et peuvent contenir des erreurs.",
    show_in_fahrenheit: "Afficher en Fahrenheit (°F)",
    show_in_celsius: "Afficher en Celsius (°C)",
    legend_title: "Légende",
    legend_warmer: "Année plus chaude que la valeur de référence",
    legend_colder: "Année plus froide que la valeur de référence",
    legend_trend: "Ligne de tendance linéaire",
};

static ENGLISH_PAGE_LABELS: PageLabels = PageLabels {
    nav_title: "Dashboard",
    heading: "Canada Climate Dashboard",
    source_intro: "The data in Celsius comes from",
    source_name: "Environment and Climate Change Canada",
    source_url: "https://www.canada.ca/en/environment-climate-change/services/environmental-indicators/temperature-change.html",
    fahrenheit_disclaimer: "The data in Fahrenheit was generated with the help of AI and may contain mistakes.",
    show_in_fahrenheit: "Show in Fahrenheit (°F)",
    show_in_celsius: "Show in Celsius (°C)",
    legend_title: "Legend",
    legend_warmer: "Year warmer than reference",
    legend_colder: "Year colder than reference",
    legend_trend: "Linear trend line",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("fr".parse::<Language>(), Ok(Language::French));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!(
            "de".parse::<Language>(),
            Err(DashboardError::UnsupportedLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_deviation_axis_depends_on_unit() {
        let fr = Language::French.chart_labels();
        assert_eq!(fr.deviation_axis_label(Unit::Celsius), "Écart (°C)");
        assert_eq!(fr.deviation_axis_label(Unit::Fahrenheit), "Écart (°F)");

        let en = Language::English.chart_labels();
        assert_eq!(en.deviation_axis_label(Unit::Fahrenheit), "Deviation (°F)");
    }

    #[test]
    fn test_unit_toggle_offers_other_unit() {
        let en = Language::English.page_labels();
        assert_eq!(en.unit_toggle_label(Unit::Celsius), "Show in Fahrenheit (°F)");
        assert_eq!(en.unit_toggle_label(Unit::Fahrenheit), "Show in Celsius (°C)");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Language::French);
        assert!(serde_json::from_str::<Language>("\"es\"").is_err());
    }
}
