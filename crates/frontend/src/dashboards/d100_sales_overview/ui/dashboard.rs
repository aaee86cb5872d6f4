use contracts::dashboards::d100_sales_overview::{MonthlyRevenue, SalesOverviewResponse, SellerStats};
use contracts::sales::{FilterSelection, Region, MIN_YEAR};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::filters::FilterPanel;
use super::metrics::MetricCard;
use super::table::RecordsTable;
use crate::dashboards::d100_sales_overview::api;
use crate::layout::Shell;
use crate::shared::charts::{BarChart, GeoBubbleMap, GeoPoint, HBarChart, LineChart, LineSeries};
use crate::shared::format::format_compact;

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Revenue,
    Volume,
    Sellers,
}

/// Sales overview dashboard: sidebar filters, three tabs, charts and the
/// raw record table. Every filter change re-runs the whole pipeline on
/// the server and replaces the dataset wholesale.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let region = RwSignal::new(Region::Brasil);
    let all_years = RwSignal::new(true);
    let year = RwSignal::new(MIN_YEAR);
    let selected_sellers = RwSignal::new(HashSet::<String>::new());
    let seller_count = RwSignal::new(5usize);
    let active_tab = RwSignal::new(DashboardTab::Revenue);

    let data = RwSignal::new(None::<SalesOverviewResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Refetch whenever a sidebar filter changes.
    Effect::new(move |_| {
        let selection = FilterSelection {
            region: region.get(),
            year: if all_years.get() { None } else { Some(year.get()) },
            sellers: {
                let mut sellers: Vec<String> = selected_sellers.get().into_iter().collect();
                sellers.sort();
                sellers
            },
        };

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api::get_sales_overview(&selection).await {
                Ok(response) => {
                    // Drop seller selections that vanished from the data
                    // (e.g. after a region change); this triggers one
                    // follow-up fetch with the pruned subset.
                    let available: HashSet<String> = response.sellers.iter().cloned().collect();
                    let current = selected_sellers.get_untracked();
                    let pruned: HashSet<String> =
                        current.intersection(&available).cloned().collect();
                    if pruned != current {
                        selected_sellers.set(pruned);
                    }

                    data.set(Some(response));
                    loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load sales overview: {}", e);
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    let sellers = Signal::derive(move || {
        data.get().map(|d| d.sellers.clone()).unwrap_or_default()
    });

    view! {
        <Shell
            left=move || {
                view! {
                    <FilterPanel
                        region=region
                        all_years=all_years
                        year=year
                        selected_sellers=selected_sellers
                        sellers=sellers
                    />
                }
                    .into_any()
            }
            center=move || {
                view! {
                    <div class="dashboard">
                        <h1 class="page-title">"Sales Dashboard 🛒"</h1>

                        {move || {
                            loading
                                .get()
                                .then(|| {
                                    view! {
                                        <div class="dashboard-loading">
                                            <span>"Loading data..."</span>
                                        </div>
                                    }
                                })
                        }}

                        {move || {
                            error
                                .get()
                                .map(|err| {
                                    view! {
                                        <div class="dashboard-error">
                                            <strong>"⚠ Error: "</strong>
                                            {err}
                                        </div>
                                    }
                                })
                        }}

                        <div class="tab-strip">
                            {[
                                (DashboardTab::Revenue, "Revenue"),
                                (DashboardTab::Volume, "Sales Volume"),
                                (DashboardTab::Sellers, "Sellers"),
                            ]
                                .into_iter()
                                .map(|(tab, label)| {
                                    view! {
                                        <button
                                            class="tab-button"
                                            class:active=move || active_tab.get() == tab
                                            on:click=move |_| active_tab.set(tab)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        {move || {
                            data.get()
                                .map(|overview| match active_tab.get() {
                                    DashboardTab::Revenue => revenue_tab(&overview),
                                    DashboardTab::Volume => volume_tab(&overview),
                                    DashboardTab::Sellers => sellers_tab(&overview, seller_count),
                                })
                        }}
                    </div>
                }
                    .into_any()
            }
        />
    }
}

fn revenue_tab(overview: &SalesOverviewResponse) -> AnyView {
    let geo_points: Vec<GeoPoint> = overview
        .revenue_by_state
        .iter()
        .map(|row| GeoPoint {
            name: row.state.clone(),
            lat: row.lat,
            lon: row.lon,
            value: row.revenue,
        })
        .collect();

    let top_states: Vec<(String, f64)> = overview
        .revenue_by_state
        .iter()
        .take(5)
        .map(|row| (row.state.clone(), row.revenue))
        .collect();

    let categories: Vec<(String, f64)> = overview
        .revenue_by_category
        .iter()
        .map(|row| (row.category.clone(), row.revenue))
        .collect();

    let series = line_series(&overview.monthly_revenue);

    view! {
        <div class="two-columns">
            <div class="column">
                <MetricCard
                    label="Total revenue"
                    value=format_compact(overview.total_revenue, "R$")
                />
                <GeoBubbleMap title="Revenue by state" points=geo_points />
                <BarChart title="Top 5 states (by revenue)" y_label="Revenue" bars=top_states />
            </div>
            <div class="column">
                <MetricCard
                    label="Number of sales"
                    value=format_compact(overview.total_sales as f64, "")
                />
                <LineChart title="Monthly revenue" y_label="Revenue" series=series />
                <BarChart title="Revenue by category" y_label="Revenue" bars=categories />
            </div>
        </div>
        <RecordsTable records=overview.records.clone() />
    }
    .into_any()
}

fn volume_tab(overview: &SalesOverviewResponse) -> AnyView {
    view! {
        <div class="two-columns">
            <div class="column">
                <MetricCard
                    label="Total revenue"
                    value=format_compact(overview.total_revenue, "R$")
                />
            </div>
            <div class="column">
                <MetricCard
                    label="Number of sales"
                    value=format_compact(overview.total_sales as f64, "")
                />
            </div>
        </div>
    }
    .into_any()
}

fn sellers_tab(overview: &SalesOverviewResponse, seller_count: RwSignal<usize>) -> AnyView {
    let total_revenue = overview.total_revenue;
    let total_sales = overview.total_sales;
    let by_revenue = overview.seller_stats.clone();
    let by_count = overview.seller_stats.clone();

    view! {
        <div class="count-input">
            <label class="filter-label">"Number of sellers"</label>
            <input
                type="number"
                min="2"
                max="10"
                prop:value=move || seller_count.get().to_string()
                on:input=move |ev| {
                    if let Ok(count) = event_target_value(&ev).parse::<usize>() {
                        seller_count.set(count.clamp(2, 10));
                    }
                }
            />
        </div>
        <div class="two-columns">
            <div class="column">
                <MetricCard label="Total revenue" value=format_compact(total_revenue, "R$") />
                {move || {
                    let count = seller_count.get();
                    let bars = sellers_as_charted(&by_revenue, count, |s| s.revenue);
                    view! {
                        <HBarChart
                            title=format!("Top {} sellers (by revenue)", count)
                            x_label="Revenue (R$)"
                            bars=bars
                        />
                    }
                }}
            </div>
            <div class="column">
                <MetricCard
                    label="Number of sales"
                    value=format_compact(total_sales as f64, "")
                />
                {move || {
                    let count = seller_count.get();
                    let bars = sellers_as_charted(&by_count, count, |s| s.sales_count as f64);
                    view! {
                        <HBarChart
                            title=format!("Top {} sellers (by sales count)", count)
                            x_label="Number of sales"
                            bars=bars
                        />
                    }
                }}
            </div>
        </div>
    }
    .into_any()
}

/// Seller rows exactly as the charts order them: ascending by the
/// measure, first `count` kept (smallest values end up at the top).
fn sellers_as_charted(
    stats: &[SellerStats],
    count: usize,
    measure: fn(&SellerStats) -> f64,
) -> Vec<(String, f64)> {
    let mut rows: Vec<(String, f64)> = stats
        .iter()
        .map(|s| (s.seller.clone(), measure(s)))
        .collect();
    rows.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    rows.truncate(count);
    rows
}

/// Split the chronological month rows into one line series per year.
fn line_series(monthly: &[MonthlyRevenue]) -> Vec<LineSeries> {
    let mut series: Vec<LineSeries> = Vec::new();
    for row in monthly {
        let name = row.year.to_string();
        match series.last_mut() {
            Some(current) if current.name == name => {
                current.points.push((row.month, row.revenue))
            }
            _ => series.push(LineSeries {
                name,
                points: vec![(row.month, row.revenue)],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<SellerStats> {
        vec![
            SellerStats { seller: "Ana Sousa".into(), revenue: 560.0, sales_count: 4 },
            SellerStats { seller: "Beatriz Moraes".into(), revenue: 300.0, sales_count: 3 },
            SellerStats { seller: "Carlos Prado".into(), revenue: 290.0, sales_count: 3 },
        ]
    }

    #[test]
    fn charted_sellers_keep_the_ascending_head() {
        let rows = sellers_as_charted(&stats(), 2, |s| s.revenue);
        assert_eq!(
            rows,
            vec![
                ("Carlos Prado".to_string(), 290.0),
                ("Beatriz Moraes".to_string(), 300.0),
            ]
        );
    }

    #[test]
    fn charted_sellers_break_ties_by_name() {
        let rows = sellers_as_charted(&stats(), 3, |s| s.sales_count as f64);
        assert_eq!(rows[0].0, "Beatriz Moraes");
        assert_eq!(rows[1].0, "Carlos Prado");
        assert_eq!(rows[2].0, "Ana Sousa");
    }

    #[test]
    fn line_series_splits_by_year() {
        let monthly = vec![
            MonthlyRevenue { year: 2020, month: 11, month_name: "November".into(), revenue: 10.0 },
            MonthlyRevenue { year: 2020, month: 12, month_name: "December".into(), revenue: 20.0 },
            MonthlyRevenue { year: 2021, month: 1, month_name: "January".into(), revenue: 30.0 },
        ];
        let series = line_series(&monthly);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "2020");
        assert_eq!(series[0].points, vec![(11, 10.0), (12, 20.0)]);
        assert_eq!(series[1].name, "2021");
        assert_eq!(series[1].points, vec![(1, 30.0)]);
    }
}
