// Renderer mapping chart specifications to Chart.js configurations
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::chart::{DecadeBarSpec, ScatterSpec};
use serde_json::{json, Value};

/// Produces the JSON config object a browser passes to `new Chart(ctx, config)`.
///
/// Tooltip callbacks cannot travel over the wire, so the text for each point
/// is rendered here and shipped in `tooltipLabels`; the page's callback looks
/// it up by `dataIndex`. The trend overlay uses the
/// `chartjs-plugin-trendline` dataset option.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsRenderer;

impl ChartRenderer for ChartJsRenderer {
    type Output = Value;

    fn render_scatter(&self, spec: &ScatterSpec) -> Value {
        let data: Vec<Value> = spec
            .points
            .iter()
            .map(|p| json!({ "x": p.x, "y": p.y }))
            .collect();
        let colors: Vec<&str> = spec.points.iter().map(|p| p.color.as_str()).collect();
        let labels: Vec<i32> = spec.points.iter().map(|p| p.x).collect();

        json!({
            "type": "scatter",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": spec.dataset_label,
                    "data": data,
                    "pointBackgroundColor": colors,
                    "parsing": false,
                    "showLine": false,
                    "trendlineLinear": {
                        "style": spec.trend.color,
                        "lineStyle": spec.trend.line_style,
                        "width": spec.trend.width
                    }
                }]
            },
            "options": {
                "responsive": true,
                "plugins": {
                    "legend": { "labels": { "color": spec.legend.label_color } },
                    "title": { "display": true, "text": spec.title },
                    "tooltip": { "tooltipLabels": spec.tooltip_labels() }
                },
                "scales": {
                    "x": { "title": { "display": true, "text": spec.x_axis.title } },
                    "y": { "title": { "display": true, "text": spec.y_axis.title } }
                }
            }
        })
    }

    fn render_decades(&self, spec: &DecadeBarSpec) -> Value {
        let labels: Vec<&str> = spec.bars.iter().map(|b| b.label.as_str()).collect();
        let values: Vec<f64> = spec.bars.iter().map(|b| b.value).collect();

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": spec.dataset_label,
                    "data": values,
                    "backgroundColor": spec.color
                }]
            },
            "options": {
                "responsive": true,
                "plugins": {
                    "title": { "display": true, "text": spec.title }
                },
                "scales": {
                    "x": { "title": { "display": true, "text": spec.x_axis.title } },
                    "y": { "title": { "display": true, "text": spec.y_axis.title } }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_spec_builder::{build_decade_spec, build_scatter_spec};
    use crate::domain::language::Language;
    use crate::domain::units::Unit;
    use crate::infrastructure::embedded_dataset::embedded_points;

    #[test]
    fn test_scatter_config() {
        let spec = build_scatter_spec(&embedded_points(), Language::French, Unit::Celsius).unwrap();
        let config = ChartJsRenderer.render_scatter(&spec);

        assert_eq!(config["type"], "scatter");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "Écart de température (°C)");
        assert_eq!(dataset["data"][0], json!({ "x": 1948, "y": -0.2 }));
        assert_eq!(dataset["pointBackgroundColor"][2], "#388e3c");
        assert_eq!(dataset["trendlineLinear"]["width"], 3);
        assert_eq!(dataset["trendlineLinear"]["style"], "rgba(33, 150, 243, 0.7)");
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Année");
        assert_eq!(config["options"]["plugins"]["tooltip"]["tooltipLabels"][24], "1972 : -2.00 °C");
    }

    #[test]
    fn test_decade_config() {
        let spec = build_decade_spec(&embedded_points(), Language::English, Unit::Celsius).unwrap();
        let config = ChartJsRenderer.render_decades(&spec);

        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][0], "1940s");
        assert_eq!(config["data"]["datasets"][0]["data"][8], 1.83);
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#d32f2f");
        assert_eq!(
            config["options"]["plugins"]["title"]["text"],
            "Decade-Averaged Temperature Deviations"
        );
    }
}
