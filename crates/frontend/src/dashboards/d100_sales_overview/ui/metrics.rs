use leptos::prelude::*;

/// Single scalar metric with a label, the way the overview cards show
/// totals.
#[component]
pub fn MetricCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-label">{label}</div>
            <div class="metric-value">{value}</div>
        </div>
    }
}
