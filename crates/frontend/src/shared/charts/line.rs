use leptos::prelude::*;

use super::scale::{nice_ticks, LinearScale};
use crate::shared::format::format_number_with_decimals;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 340.0;

const SERIES_COLORS: [&str; 4] = ["#4c78a8", "#f58518", "#54a24b", "#b279a2"];
const SERIES_DASHES: [&str; 4] = ["", "6 3", "2 2", "8 2 2 2"];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One line on the chart: a name for the legend plus (month, value) points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    /// 1-based month paired with the value for that month.
    pub points: Vec<(u32, f64)>,
}

/// Line chart over the twelve calendar months, one line per series,
/// markers on every point. The y range always starts at zero.
#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] y_label: String,
    series: Vec<LineSeries>,
) -> impl IntoView {
    const MARGIN_LEFT: f64 = 70.0;
    const MARGIN_RIGHT: f64 = 16.0;
    const MARGIN_TOP: f64 = 16.0;
    const MARGIN_BOTTOM: f64 = 40.0;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .fold(0.0, f64::max);
    let ticks = nice_ticks(max, 5);
    let scale = LinearScale::new(*ticks.last().unwrap_or(&1.0), plot_h);

    let month_x = move |month: u32| MARGIN_LEFT + (month as f64 - 0.5) / 12.0 * plot_w;
    let value_y = move |value: f64| MARGIN_TOP + plot_h - scale.position(value);

    let ticks_view = ticks
        .iter()
        .map(|tick| {
            let y = value_y(*tick);
            view! {
                <line
                    class="chart-grid"
                    x1=MARGIN_LEFT.to_string()
                    y1=format!("{:.1}", y)
                    x2=(WIDTH - MARGIN_RIGHT).to_string()
                    y2=format!("{:.1}", y)
                />
                <text
                    class="chart-tick"
                    x=(MARGIN_LEFT - 6.0).to_string()
                    y=format!("{:.1}", y + 3.0)
                    text-anchor="end"
                >
                    {format_number_with_decimals(*tick, 0)}
                </text>
            }
        })
        .collect_view();

    let months_view = (1..=12u32)
        .map(|month| {
            view! {
                <text
                    class="chart-tick"
                    x=format!("{:.1}", month_x(month))
                    y=(HEIGHT - MARGIN_BOTTOM + 16.0).to_string()
                    text-anchor="middle"
                >
                    {MONTHS_SHORT[(month - 1) as usize]}
                </text>
            }
        })
        .collect_view();

    let legend_view = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background: {}", color)></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    let lines_view = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let dash = SERIES_DASHES[i % SERIES_DASHES.len()];
            let points_attr = s
                .points
                .iter()
                .map(|(month, value)| {
                    format!("{:.1},{:.1}", month_x(*month), value_y(*value))
                })
                .collect::<Vec<_>>()
                .join(" ");
            let markers = s
                .points
                .iter()
                .map(|(month, value)| {
                    view! {
                        <circle
                            class="chart-marker"
                            cx=format!("{:.1}", month_x(*month))
                            cy=format!("{:.1}", value_y(*value))
                            r="3"
                            fill=color
                        ></circle>
                    }
                })
                .collect_view();
            view! {
                <polyline
                    class="chart-line"
                    points=points_attr
                    fill="none"
                    stroke=color
                    stroke-dasharray=dash
                />
                {markers}
            }
        })
        .collect_view();

    let axis_y = MARGIN_TOP + plot_h / 2.0;
    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <div class="chart-legend">{legend_view}</div>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                {ticks_view}
                {months_view}
                {lines_view}
                <text
                    class="chart-axis-label"
                    x="14"
                    y=format!("{:.1}", axis_y)
                    transform=format!("rotate(-90 14 {:.1})", axis_y)
                    text-anchor="middle"
                >
                    {y_label}
                </text>
            </svg>
        </div>
    }
}
