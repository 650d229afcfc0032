//! Time series line chart
//!
//! Renders an ordered sequence of (label, value) points as an SVG line
//! with a soft area fill, y grid lines and per-bucket x labels.

use crate::{
    chartkit::{area_path, format_axis_value, line_path, BandScale, LinearScale},
    colors, ChartDimensions, ChartMargin, LegendPosition, SeriesPoint,
};
use leptos::prelude::*;

/// Line chart style configuration
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub series_label: String,
    pub stroke: &'static str,
    pub fill: String,
    pub point_radius: f64,
    pub legend: LegendPosition,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 280.0,
            title: String::new(),
            series_label: String::new(),
            stroke: colors::PRIMARY,
            fill: colors::primary_alpha(0.15),
            point_radius: 3.0,
            legend: LegendPosition::Top,
        }
    }
}

struct ComputedLine {
    line: String,
    area: String,
    points: Vec<(f64, f64)>,
    x_labels: Vec<(f64, String)>,
    y_ticks: Vec<(f64, String)>,
}

/// Lay the series out inside the plot area. The y axis always begins at
/// zero; negative totals (net outbound days) extend the domain downward.
fn compute_line(data: &[SeriesPoint], dims: &ChartDimensions) -> Option<ComputedLine> {
    if data.is_empty() {
        return None;
    }

    let min = data.iter().map(|p| p.value).fold(0.0_f64, f64::min);
    let max = data.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let headroom = if max > min { (max - min) * 0.1 } else { 1.0 };

    let y_scale = LinearScale::new()
        .domain(min, max + headroom)
        .range(dims.plot_bottom(), dims.plot_top());

    let x_scale = BandScale::new(data.len()).range(dims.plot_left(), dims.plot_right());

    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (x_scale.scale_center(i), y_scale.scale(p.value)))
        .collect();

    let x_labels = data
        .iter()
        .enumerate()
        .map(|(i, p)| (x_scale.scale_center(i), p.label.clone()))
        .collect();

    let y_ticks = y_scale
        .nice_ticks(5)
        .into_iter()
        .map(|tick| (y_scale.scale(tick), format_axis_value(tick)))
        .collect();

    Some(ComputedLine {
        line: line_path(&points),
        area: area_path(&points, y_scale.scale(0.0_f64.max(min))),
        points,
        x_labels,
        y_ticks,
    })
}

/// Time series line chart component
#[component]
pub fn TimeSeriesChart(
    #[prop(into)] series: Signal<Vec<SeriesPoint>>,
    #[prop(optional)] config: Option<LineChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = ChartDimensions::new(config.width, config.height, ChartMargin::standard());
    let stroke = config.stroke;
    let fill = config.fill.clone();
    let point_radius = config.point_radius;
    let title = config.title.clone();
    let series_label = config.series_label.clone();
    let show_legend = config.legend == LegendPosition::Top && !series_label.is_empty();

    let chart_data = move || {
        let data = series.get();
        compute_line(&data, &dims)
    };

    view! {
        <div class="chart line-chart">
            {(!title.is_empty()).then(|| view! { <div class="chart-title">{title.clone()}</div> })}

            {show_legend.then(|| view! {
                <div class="chart-legend legend-top">
                    <span class="legend-swatch" style=format!("background-color: {}", stroke) />
                    <span class="legend-label">{series_label.clone()}</span>
                </div>
            })}

            <svg
                class="line-chart-svg"
                viewBox=format!("0 0 {} {}", config.width, config.height)
                style="width: 100%; height: auto;"
            >
                {move || {
                    match chart_data() {
                        Some(computed) => {
                            let fill = fill.clone();
                            let ComputedLine { line, area, points, x_labels, y_ticks } = computed;
                            view! {
                                <g>
                                    // Grid + y labels
                                    {y_ticks.iter().map(|(y, label)| {
                                        view! {
                                            <line
                                                x1=dims.plot_left()
                                                y1=*y
                                                x2=dims.plot_right()
                                                y2=*y
                                                stroke=colors::GRID
                                                stroke-width="1"
                                            />
                                            <text
                                                x=dims.plot_left() - 8.0
                                                y=*y + 4.0
                                                text-anchor="end"
                                                class="axis-label"
                                            >
                                                {label.clone()}
                                            </text>
                                        }
                                    }).collect_view()}

                                    // Area fill
                                    <path d=area fill=fill />

                                    // Line
                                    <path
                                        d=line
                                        fill="none"
                                        stroke=stroke
                                        stroke-width="2"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    />

                                    // Point markers
                                    {points.iter().map(|(x, y)| {
                                        view! {
                                            <circle cx=*x cy=*y r=point_radius fill=stroke />
                                        }
                                    }).collect_view()}

                                    // X labels
                                    {x_labels.iter().map(|(x, label)| {
                                        view! {
                                            <text
                                                x=*x
                                                y=dims.plot_bottom() + 18.0
                                                text-anchor="middle"
                                                class="axis-label"
                                            >
                                                {label.clone()}
                                            </text>
                                        }
                                    }).collect_view()}
                                </g>
                            }.into_any()
                        }
                        None => view! {
                            <g>
                                <text
                                    x=config.width / 2.0
                                    y=config.height / 2.0
                                    text-anchor="middle"
                                    class="chart-empty"
                                >
                                    "No data"
                                </text>
                            </g>
                        }.into_any(),
                    }
                }}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> ChartDimensions {
        ChartDimensions::new(560.0, 280.0, ChartMargin::standard())
    }

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SeriesPoint::new(format!("d{i}"), v))
            .collect()
    }

    #[test]
    fn test_compute_line_empty_is_none() {
        assert!(compute_line(&[], &dims()).is_none());
    }

    #[test]
    fn test_compute_line_point_per_bucket() {
        let computed = compute_line(&series(&[8.0, 2.0]), &dims()).unwrap();
        assert_eq!(computed.points.len(), 2);
        assert_eq!(computed.x_labels.len(), 2);
        assert!(computed.line.starts_with('M'));
        // Higher value sits higher on screen (smaller y)
        assert!(computed.points[0].1 < computed.points[1].1);
    }

    #[test]
    fn test_compute_line_y_begins_at_zero() {
        let d = dims();
        let computed = compute_line(&series(&[5.0, 10.0]), &d).unwrap();
        // All points render above (not below) the zero baseline
        for (_, y) in &computed.points {
            assert!(*y < d.plot_bottom() + 1e-9);
        }
    }

    #[test]
    fn test_compute_line_labels_preserve_order() {
        let data = vec![
            SeriesPoint::new("03/01/2025", 8.0),
            SeriesPoint::new("03/02/2025", 2.0),
        ];
        let computed = compute_line(&data, &dims()).unwrap();
        assert_eq!(computed.x_labels[0].1, "03/01/2025");
        assert_eq!(computed.x_labels[1].1, "03/02/2025");
        assert!(computed.x_labels[0].0 < computed.x_labels[1].0);
    }
}
