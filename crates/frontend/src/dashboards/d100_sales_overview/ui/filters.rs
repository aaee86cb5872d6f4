use contracts::sales::{Region, MAX_YEAR, MIN_YEAR};
use leptos::prelude::*;
use std::collections::HashSet;

/// Sidebar filter controls: region, period, sellers.
///
/// The seller list is owned by the dashboard (it comes from the fetched
/// data), so it arrives as a derived signal.
#[component]
pub fn FilterPanel(
    region: RwSignal<Region>,
    all_years: RwSignal<bool>,
    year: RwSignal<i32>,
    selected_sellers: RwSignal<HashSet<String>>,
    sellers: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <h2 class="filter-title">"Filters"</h2>

            <label class="filter-label">"Region"</label>
            <select
                class="filter-select"
                on:change=move |ev| {
                    if let Some(choice) = Region::from_label(&event_target_value(&ev)) {
                        region.set(choice);
                    }
                }
            >
                {Region::all()
                    .into_iter()
                    .map(|r| {
                        view! {
                            <option value=r.label() selected=move || region.get() == r>
                                {r.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label class="filter-check">
                <input
                    type="checkbox"
                    prop:checked=move || all_years.get()
                    on:change=move |ev| all_years.set(event_target_checked(&ev))
                />
                "All period data"
            </label>

            <Show when=move || !all_years.get()>
                <label class="filter-label">{move || format!("Year: {}", year.get())}</label>
                <input
                    class="filter-slider"
                    type="range"
                    min=MIN_YEAR.to_string()
                    max=MAX_YEAR.to_string()
                    prop:value=move || year.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                            year.set(value);
                        }
                    }
                />
            </Show>

            <label class="filter-label">"Sellers"</label>
            <div class="seller-list">
                <For
                    each=move || sellers.get()
                    key=|seller| seller.clone()
                    children=move |seller: String| {
                        let check_name = seller.clone();
                        let toggle_name = seller.clone();
                        view! {
                            <label class="seller-item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected_sellers.get().contains(&check_name)
                                    }
                                    on:change=move |ev| {
                                        let mut selection = selected_sellers.get();
                                        if event_target_checked(&ev) {
                                            selection.insert(toggle_name.clone());
                                        } else {
                                            selection.remove(&toggle_name);
                                        }
                                        selected_sellers.set(selection);
                                    }
                                />
                                {seller}
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}
