// Chart specification builders
use crate::domain::chart::{
    AxisSpec, DecadeBar, DecadeBarSpec, LegendSpec, ScatterPoint, ScatterSpec, TooltipFormat,
    TrendDirective, DECADE_BAR_COLOR, LEGEND_LABEL_COLOR, TREND_COLOR,
};
use crate::domain::classification::{classify_series, Category, COOL_COLOR, WARM_COLOR};
use crate::domain::dashboard::{LanguageOption, LegendEntry, PageSpec};
use crate::domain::decade::aggregate_by_decade;
use crate::domain::error::Result;
use crate::domain::language::Language;
use crate::domain::observation::ObservationPoint;
use crate::domain::units::Unit;

/// Scatter chart of every year, colored by category, with a trend overlay
pub fn build_scatter_spec(
    points: &[ObservationPoint],
    language: Language,
    unit: Unit,
) -> Result<ScatterSpec> {
    let labels = language.chart_labels();
    let classified = classify_series(points, unit)?;

    let points: Vec<ScatterPoint> = classified
        .into_iter()
        .map(|p| ScatterPoint {
            x: p.year,
            y: p.display_value,
            color: p.category.color().to_string(),
            category: p.category,
        })
        .collect();

    let spec = ScatterSpec {
        title: labels.chart_title.to_string(),
        dataset_label: labels.dataset_label.to_string(),
        points,
        trend: TrendDirective::default(),
        x_axis: AxisSpec::titled(labels.year_axis_label),
        y_axis: AxisSpec::titled(labels.deviation_axis_label(unit)),
        legend: LegendSpec {
            label_color: LEGEND_LABEL_COLOR.to_string(),
        },
        tooltip: TooltipFormat::new(unit),
    };

    let (warmer, colder) = category_counts(&spec);
    tracing::debug!(
        "Built scatter spec ({}, {}): {} warmer, {} colder",
        language,
        unit,
        warmer,
        colder
    );
    Ok(spec)
}

/// Bar chart of decade means
pub fn build_decade_spec(
    points: &[ObservationPoint],
    language: Language,
    unit: Unit,
) -> Result<DecadeBarSpec> {
    let labels = language.chart_labels();
    let bars: Vec<DecadeBar> = aggregate_by_decade(points, unit)?
        .into_iter()
        .map(|bucket| DecadeBar {
            label: bucket.label(),
            value: bucket.mean_display_value,
            count: bucket.count,
        })
        .collect();

    tracing::debug!(
        "Built decade spec ({}, {}) with {} bars",
        language,
        unit,
        bars.len()
    );

    Ok(DecadeBarSpec {
        title: labels.decade_title.to_string(),
        dataset_label: labels.decade_dataset_label.to_string(),
        bars,
        color: DECADE_BAR_COLOR.to_string(),
        x_axis: AxisSpec::titled(labels.decade_axis_label),
        y_axis: AxisSpec::titled(labels.deviation_axis_label(unit)),
    })
}

pub fn build_page_spec(language: Language, unit: Unit) -> PageSpec {
    let labels = language.page_labels();
    let legend = vec![
        LegendEntry {
            label: labels.legend_warmer.to_string(),
            color: WARM_COLOR.to_string(),
        },
        LegendEntry {
            label: labels.legend_colder.to_string(),
            color: COOL_COLOR.to_string(),
        },
        LegendEntry {
            label: labels.legend_trend.to_string(),
            color: TREND_COLOR.to_string(),
        },
    ];

    let language_options = Language::ALL
        .iter()
        .map(|&option| LanguageOption {
            code: option,
            label: option.switcher_label().to_string(),
            selected: option == language,
        })
        .collect();

    PageSpec {
        nav_title: labels.nav_title.to_string(),
        language_options,
        heading: labels.heading.to_string(),
        source_intro: labels.source_intro.to_string(),
        source_name: labels.source_name.to_string(),
        source_url: labels.source_url.to_string(),
        fahrenheit_disclaimer: labels.fahrenheit_disclaimer.to_string(),
        unit_toggle_label: labels.unit_toggle_label(unit).to_string(),
        legend_title: labels.legend_title.to_string(),
        legend,
    }
}

/// Number of points per category, in Warmer/Colder order
pub fn category_counts(spec: &ScatterSpec) -> (usize, usize) {
    let warmer = spec
        .points
        .iter()
        .filter(|p| p.category == Category::Warmer)
        .count();
    (warmer, spec.points.len() - warmer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DashboardError;
    use crate::infrastructure::embedded_dataset::embedded_points;

    #[test]
    fn test_scatter_spec_french_celsius() {
        let spec = build_scatter_spec(&embedded_points(), Language::French, Unit::Celsius).unwrap();

        assert_eq!(spec.title, "Écarts annuels de température (1948–2023)");
        assert_eq!(spec.dataset_label, "Écart de température (°C)");
        assert_eq!(spec.x_axis.title, "Année");
        assert_eq!(spec.y_axis.title, "Écart (°C)");
        assert_eq!(spec.points.len(), 76);
        assert_eq!(spec.points[0].x, 1948);
        assert_eq!(spec.points[75].x, 2023);
        assert!(spec.points.windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(spec.trend, TrendDirective::default());
        assert_eq!(spec.legend.label_color, "#d32f2f");
    }

    #[test]
    fn test_scatter_colors_follow_celsius_sign() {
        for unit in [Unit::Celsius, Unit::Fahrenheit] {
            let spec = build_scatter_spec(&embedded_points(), Language::English, unit).unwrap();
            let p1950 = spec.points.iter().find(|p| p.x == 1950).unwrap();
            assert_eq!(p1950.color, COOL_COLOR);
            let p1954 = spec.points.iter().find(|p| p.x == 1954).unwrap();
            assert_eq!(p1954.color, WARM_COLOR);
            assert_eq!(category_counts(&spec), (52, 24));
        }
    }

    #[test]
    fn test_scatter_tooltips() {
        let spec = build_scatter_spec(&embedded_points(), Language::English, Unit::Celsius).unwrap();
        let labels = spec.tooltip_labels();
        let idx = spec.points.iter().position(|p| p.x == 1972).unwrap();
        assert_eq!(labels[idx], "1972 : -2.00 °C");

        let spec =
            build_scatter_spec(&embedded_points(), Language::English, Unit::Fahrenheit).unwrap();
        assert_eq!(spec.y_axis.title, "Deviation (°F)");
        let idx = spec.points.iter().position(|p| p.x == 1998).unwrap();
        assert_eq!(spec.tooltip_labels()[idx], "1998 : 36.14 °F");
    }

    #[test]
    fn test_scatter_is_idempotent() {
        let points = embedded_points();
        let first = build_scatter_spec(&points, Language::French, Unit::Fahrenheit).unwrap();
        let second = build_scatter_spec(&points, Language::French, Unit::Fahrenheit).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decade_spec_english_fahrenheit() {
        let spec =
            build_decade_spec(&embedded_points(), Language::English, Unit::Fahrenheit).unwrap();

        assert_eq!(spec.title, "Decade-Averaged Temperature Deviations");
        assert_eq!(spec.dataset_label, "Average per Decade");
        assert_eq!(spec.x_axis.title, "Decade");
        assert_eq!(spec.y_axis.title, "Deviation (°F)");
        assert_eq!(spec.color, "#d32f2f");

        let labels: Vec<&str> = spec.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["1940s", "1950s", "1960s", "1970s", "1980s", "1990s", "2000s", "2010s", "2020s"]
        );
        let values: Vec<f64> = spec.bars.iter().map(|b| b.value).collect();
        assert_eq!(
            values,
            vec![31.64, 31.75, 31.84, 31.6, 32.68, 33.1, 33.84, 34.52, 35.29]
        );
    }

    #[test]
    fn test_decade_spec_french_labels() {
        let spec = build_decade_spec(&embedded_points(), Language::French, Unit::Celsius).unwrap();
        assert_eq!(spec.title, "Évolution des moyennes par décennie");
        assert_eq!(spec.dataset_label, "Moyenne par décennie");
        assert_eq!(spec.x_axis.title, "Décennie");
        assert_eq!(spec.y_axis.title, "Écart (°C)");
    }

    #[test]
    fn test_builders_reject_empty_input() {
        let err = build_scatter_spec(&[], Language::French, Unit::Celsius).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput(_)));
        let err = build_decade_spec(&[], Language::French, Unit::Celsius).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput(_)));
    }

    #[test]
    fn test_page_spec() {
        let page = build_page_spec(Language::French, Unit::Celsius);
        assert_eq!(page.heading, "Tableau de bord climatique du Canada");
        assert_eq!(page.unit_toggle_label, "Afficher en Fahrenheit (°F)");
        assert_eq!(page.legend_title, "Légende");
        assert_eq!(page.legend.len(), 3);
        assert_eq!(page.legend[1].color, COOL_COLOR);
        assert_eq!(page.nav_title, "Tableau de bord");
        assert_eq!(
            page.language_options,
            vec![
                LanguageOption {
                    code: Language::French,
                    label: "Français 🇫🇷".to_string(),
                    selected: true,
                },
                LanguageOption {
                    code: Language::English,
                    label: "English 🇬🇧".to_string(),
                    selected: false,
                },
            ]
        );

        let page = build_page_spec(Language::English, Unit::Fahrenheit);
        assert_eq!(page.unit_toggle_label, "Show in Celsius (°C)");
        assert_eq!(page.legend[2].label, "Linear trend line");
        assert_eq!(page.nav_title, "Dashboard");
        let selected: Vec<Language> = page
            .language_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.code)
            .collect();
        assert_eq!(selected, vec![Language::English]);
        assert_eq!(page.language_options[0].label, "Français 🇫🇷");
    }
}
