use leptos::prelude::*;

/// One bubble on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

// Bounding box around Brazil, with a little padding on each side.
const LAT_MIN: f64 = -35.0;
const LAT_MAX: f64 = 7.0;
const LON_MIN: f64 = -75.0;
const LON_MAX: f64 = -33.0;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 520.0;

const MIN_RADIUS: f64 = 4.0;
const MAX_RADIUS: f64 = 30.0;

/// Bubble map over Brazil's bounding box; bubble area scales with the
/// value (radius grows with its square root).
#[component]
pub fn GeoBubbleMap(#[prop(into)] title: String, points: Vec<GeoPoint>) -> impl IntoView {
    let max_value = points.iter().map(|p| p.value).fold(0.0, f64::max);

    let bubbles = points
        .iter()
        .map(|point| {
            let x = (point.lon - LON_MIN) / (LON_MAX - LON_MIN) * WIDTH;
            let y = (LAT_MAX - point.lat) / (LAT_MAX - LAT_MIN) * HEIGHT;
            let r = if max_value > 0.0 {
                MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * (point.value / max_value).sqrt()
            } else {
                MIN_RADIUS
            };
            let label = (r > 12.0).then(|| {
                view! {
                    <text
                        class="geo-label"
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", y + 3.0)
                        text-anchor="middle"
                    >
                        {point.name.clone()}
                    </text>
                }
            });
            view! {
                <circle
                    class="geo-bubble"
                    cx=format!("{:.1}", x)
                    cy=format!("{:.1}", y)
                    r=format!("{:.1}", r)
                ></circle>
                {label}
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                <rect class="geo-backdrop" x="0" y="0" width=WIDTH.to_string() height=HEIGHT.to_string() rx="8" />
                {bubbles}
            </svg>
        </div>
    }
}
