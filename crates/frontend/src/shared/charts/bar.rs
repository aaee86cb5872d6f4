use leptos::prelude::*;

use super::scale::{nice_ticks, LinearScale};
use crate::shared::format::format_number_with_decimals;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 340.0;

/// Vertical bar chart with value labels over the bars.
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] y_label: String,
    bars: Vec<(String, f64)>,
) -> impl IntoView {
    const MARGIN_LEFT: f64 = 70.0;
    const MARGIN_RIGHT: f64 = 16.0;
    const MARGIN_TOP: f64 = 20.0;
    const MARGIN_BOTTOM: f64 = 58.0;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let ticks = nice_ticks(max, 5);
    let scale = LinearScale::new(*ticks.last().unwrap_or(&1.0), plot_h);

    let slot = if bars.is_empty() {
        plot_w
    } else {
        plot_w / bars.len() as f64
    };
    let bar_w = slot * 0.7;

    let ticks_view = ticks
        .iter()
        .map(|tick| {
            let y = MARGIN_TOP + plot_h - scale.position(*tick);
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

    let bars_view = bars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let h = scale.position(*value);
            let y = MARGIN_TOP + plot_h - h;
            let center_x = MARGIN_LEFT + slot * i as f64 + slot / 2.0;
            let label_y = HEIGHT - MARGIN_BOTTOM + 16.0;
            // Short labels (state codes) stay horizontal, long ones tilt.
            let tilted = label.len() > 4;
            let anchor = if tilted { "end" } else { "middle" };
            let transform = if tilted {
                format!("rotate(-30 {:.1} {:.1})", center_x, label_y)
            } else {
                String::new()
            };
            view! {
                <rect
                    class="chart-bar"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", y)
                    width=format!("{:.1}", bar_w)
                    height=format!("{:.1}", h)
                ></rect>
                <text
                    class="chart-value"
                    x=format!("{:.1}", center_x)
                    y=format!("{:.1}", y - 4.0)
                    text-anchor="middle"
                >
                    {format_number_with_decimals(*value, 0)}
                </text>
                <text
                    class="chart-tick"
                    x=format!("{:.1}", center_x)
                    y=format!("{:.1}", label_y)
                    text-anchor=anchor
                    transform=transform
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let axis_y = MARGIN_TOP + plot_h / 2.0;
    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                {ticks_view}
                {bars_view}
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

/// Horizontal bar chart; one row per entry, value labels at the bar end.
#[component]
pub fn HBarChart(
    #[prop(into)] title: String,
    #[prop(into)] x_label: String,
    bars: Vec<(String, f64)>,
) -> impl IntoView {
    const MARGIN_LEFT: f64 = 150.0;
    const MARGIN_RIGHT: f64 = 70.0;
    const MARGIN_TOP: f64 = 12.0;
    const MARGIN_BOTTOM: f64 = 40.0;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let ticks = nice_ticks(max, 4);
    let scale = LinearScale::new(*ticks.last().unwrap_or(&1.0), plot_w);

    let slot = if bars.is_empty() {
        plot_h
    } else {
        plot_h / bars.len() as f64
    };
    let bar_h = (slot * 0.7).min(34.0);

    let ticks_view = ticks
        .iter()
        .map(|tick| {
            let x = MARGIN_LEFT + scale.position(*tick);
            view! {
                <line
                    class="chart-grid"
                    x1=format!("{:.1}", x)
                    y1=MARGIN_TOP.to_string()
                    x2=format!("{:.1}", x)
                    y2=(HEIGHT - MARGIN_BOTTOM).to_string()
                />
                <text
                    class="chart-tick"
                    x=format!("{:.1}", x)
                    y=(HEIGHT - MARGIN_BOTTOM + 16.0).to_string()
                    text-anchor="middle"
                >
                    {format_number_with_decimals(*tick, 0)}
                </text>
            }
        })
        .collect_view();

    let bars_view = bars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let y = MARGIN_TOP + slot * i as f64 + (slot - bar_h) / 2.0;
            let w = scale.position(*value);
            let center_y = MARGIN_TOP + slot * i as f64 + slot / 2.0;
            view! {
                <rect
                    class="chart-bar"
                    x=MARGIN_LEFT.to_string()
                    y=format!("{:.1}", y)
                    width=format!("{:.1}", w)
                    height=format!("{:.1}", bar_h)
                ></rect>
                <text
                    class="chart-value"
                    x=format!("{:.1}", MARGIN_LEFT + w + 4.0)
                    y=format!("{:.1}", center_y + 3.0)
                    text-anchor="start"
                >
                    {format_number_with_decimals(*value, 0)}
                </text>
                <text
                    class="chart-tick"
                    x=(MARGIN_LEFT - 8.0).to_string()
                    y=format!("{:.1}", center_y + 3.0)
                    text-anchor="end"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                {ticks_view}
                {bars_view}
                <text
                    class="chart-axis-label"
                    x=format!("{:.1}", MARGIN_LEFT + plot_w / 2.0)
                    y=(HEIGHT - 6.0).to_string()
                    text-anchor="middle"
                >
                    {x_label}
                </text>
            </svg>
        </div>
    }
}
