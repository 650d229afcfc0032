//! Categorical pie chart
//!
//! Slice geometry is computed by pure functions (`pie_slices`,
//! `slice_path`) so the angular math stays testable without a DOM.

use std::f64::consts::PI;

use crate::{chartkit::PathBuilder, colors, LegendPosition, SeriesPoint};
use leptos::prelude::*;

/// Pie chart style configuration
#[derive(Debug, Clone)]
pub struct PieChartConfig {
    pub size: f64,
    pub title: String,
    pub palette: Vec<&'static str>,
    pub legend: LegendPosition,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            size: 280.0,
            title: String::new(),
            palette: colors::ZONE_PALETTE.to_vec(),
            legend: LegendPosition::Top,
        }
    }
}

/// One pie slice, angles in radians from 12 o'clock, clockwise
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub fraction: f64,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Split the full circle proportionally to `values`.
///
/// Non-positive values contribute a zero-width slice (they keep their
/// legend entry but paint nothing). A total of zero yields no slices.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let start = -PI / 2.0;
    let mut angle = start;

    values
        .iter()
        .map(|&value| {
            let fraction = value.max(0.0) / total;
            let slice = PieSlice {
                start_angle: angle,
                end_angle: angle + fraction * 2.0 * PI,
                fraction,
            };
            angle = slice.end_angle;
            slice
        })
        .collect()
}

fn on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one slice. A slice covering (almost) the whole circle is
/// drawn as two half-circle arcs, since a single 2π arc degenerates.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    let sweep = slice.sweep();
    if sweep <= 0.0 {
        return String::new();
    }

    let (sx, sy) = on_circle(cx, cy, r, slice.start_angle);

    if sweep >= 2.0 * PI - 1e-6 {
        let (mx, my) = on_circle(cx, cy, r, slice.start_angle + PI);
        return PathBuilder::new()
            .move_to(sx, sy)
            .arc_to(r, r, 0.0, false, true, mx, my)
            .arc_to(r, r, 0.0, false, true, sx, sy)
            .close()
            .build();
    }

    let (ex, ey) = on_circle(cx, cy, r, slice.end_angle);
    PathBuilder::new()
        .move_to(cx, cy)
        .line_to(sx, sy)
        .arc_to(r, r, 0.0, sweep > PI, true, ex, ey)
        .close()
        .build()
}

/// Categorical pie chart component
#[component]
pub fn PieChart(
    #[prop(into)] series: Signal<Vec<SeriesPoint>>,
    #[prop(optional)] config: Option<PieChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let size = config.size;
    let center = size / 2.0;
    let radius = center - 8.0;
    let palette = config.palette.clone();
    let legend_palette = config.palette.clone();
    let title = config.title.clone();
    let show_legend = config.legend == LegendPosition::Top;

    let slices = move || {
        let data = series.get();
        let values: Vec<f64> = data.iter().map(|p| p.value).collect();
        pie_slices(&values)
    };

    view! {
        <div class="chart pie-chart">
            {(!title.is_empty()).then(|| view! { <div class="chart-title">{title.clone()}</div> })}

            {show_legend.then(|| {
                let palette = legend_palette.clone();
                view! {
                    <div class="chart-legend legend-top">
                        {move || {
                            let palette = palette.clone();
                            series.get().into_iter().enumerate().map(move |(i, point)| {
                                let color = palette[i % palette.len()];
                                view! {
                                    <span class="legend-entry">
                                        <span
                                            class="legend-swatch"
                                            style=format!("background-color: {}", color)
                                        />
                                        <span class="legend-label">{point.label}</span>
                                    </span>
                                }
                            }).collect_view()
                        }}
                    </div>
                }
            })}

            <svg
                class="pie-chart-svg"
                viewBox=format!("0 0 {} {}", size, size)
                style="width: 100%; height: auto; max-width: 320px;"
            >
                {move || {
                    let slices = slices();
                    if slices.is_empty() {
                        view! {
                            <g>
                                <text
                                    x=center
                                    y=center
                                    text-anchor="middle"
                                    class="chart-empty"
                                >
                                    "No data"
                                </text>
                            </g>
                        }.into_any()
                    } else {
                        let palette = palette.clone();
                        view! {
                            <g>
                                {slices.iter().enumerate().map(|(i, slice)| {
                                    let color = palette[i % palette.len()];
                                    view! {
                                        <path
                                            d=slice_path(center, center, radius, slice)
                                            fill=color
                                            stroke=colors::BG_PANEL
                                            stroke-width="1"
                                        />
                                    }
                                }).collect_view()}
                            </g>
                        }.into_any()
                    }
                }}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_slices_fractions_sum_to_one() {
        let slices = pie_slices(&[1.0, 2.0, 3.0]);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_contiguous() {
        let slices = pie_slices(&[4.0, 6.0]);
        assert!((slices[0].end_angle - slices[1].start_angle).abs() < 1e-9);
        assert!((slices[1].end_angle - slices[0].start_angle - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_zero_total_is_empty() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_pie_slices_negative_values_clamped() {
        let slices = pie_slices(&[-5.0, 10.0]);
        assert_eq!(slices[0].fraction, 0.0);
        assert_eq!(slices[1].fraction, 1.0);
    }

    #[test]
    fn test_slice_path_regular() {
        let slices = pie_slices(&[1.0, 1.0]);
        let path = slice_path(100.0, 100.0, 90.0, &slices[0]);
        assert!(path.starts_with("M100.00,100.00"));
        assert!(path.contains('A'));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_slice_path_full_circle() {
        let slices = pie_slices(&[42.0]);
        let path = slice_path(100.0, 100.0, 90.0, &slices[0]);
        // Two arc segments, no wedge lines through the center
        assert_eq!(path.matches('A').count(), 2);
        assert!(!path.contains("L"));
    }

    #[test]
    fn test_slice_path_zero_sweep_is_empty() {
        let slice = PieSlice {
            start_angle: 0.0,
            end_angle: 0.0,
            fraction: 0.0,
        };
        assert!(slice_path(100.0, 100.0, 90.0, &slice).is_empty());
    }

    #[test]
    fn test_majority_slice_uses_large_arc() {
        let slices = pie_slices(&[3.0, 1.0]);
        let path = slice_path(100.0, 100.0, 90.0, &slices[0]);
        // large_arc flag set for the 270° slice
        assert!(path.contains(",1,1,"));
    }
}
