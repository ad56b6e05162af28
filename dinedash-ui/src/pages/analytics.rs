//! Analytics Page
//!
//! Platform-wide charts with city, cuisine and partner filters.

use leptos::*;

use dinedash::analytics::{option_label, AnalyticsView};
use dinedash::Palette;

use crate::components::chart::{Series, Slice};
use crate::components::{AreaChart, BarChart, LineChart, PieChart, StatCardView};
use crate::state::global::GlobalState;

/// Chart inputs pulled out of a derived view
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub cities: Vec<String>,
    pub city_series: Vec<Series>,
    pub cuisine_slices: Vec<Slice>,
    pub months: Vec<String>,
    pub revenue_trend: Vec<Series>,
    pub volume_trend: Vec<Series>,
    pub tiers: Vec<String>,
    pub tier_series: Vec<Series>,
}

impl ChartData {
    pub fn from_view(view: &AnalyticsView, palette: &Palette) -> Self {
        let city = &view.revenue_by_city;
        let months = &view.monthly_trends;
        let tiers = &view.partner_performance;

        Self {
            cities: city.iter().map(|c| c.city.clone()).collect(),
            city_series: vec![Series::new(
                "Revenue",
                city.iter().map(|c| c.revenue as f64).collect(),
                palette.primary,
            )],
            cuisine_slices: view
                .cuisine_share
                .iter()
                .map(|c| Slice {
                    label: c.name.clone(),
                    value: f64::from(c.value),
                    color: c.color.clone(),
                })
                .collect(),
            months: months.iter().map(|m| m.month.clone()).collect(),
            revenue_trend: vec![Series::new(
                "Revenue",
                months.iter().map(|m| m.revenue as f64).collect(),
                palette.primary,
            )],
            volume_trend: vec![
                Series::new("Orders", months.iter().map(|m| f64::from(m.orders)).collect(), palette.secondary),
                Series::new("Partners", months.iter().map(|m| f64::from(m.partners)).collect(), palette.success),
            ],
            tiers: tiers.iter().map(|p| p.tier.clone()).collect(),
            tier_series: vec![Series::new(
                "Revenue",
                tiers.iter().map(|p| p.revenue as f64).collect(),
                palette.secondary,
            )],
        }
    }
}

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let view_model = create_memo(move |_| dashboard.with(|d| d.analytics_view()));
    let charts = create_memo(move |_| {
        let palette = Palette::for_mode(state.theme.get());
        view_model.with(|v| ChartData::from_view(v, palette))
    });

    let pick = move |f: fn(&ChartData) -> Vec<String>| Signal::derive(move || charts.with(f));
    let series = move |f: fn(&ChartData) -> Vec<Series>| Signal::derive(move || charts.with(f));

    view! {
        <div class="space-y-6">
            <FilterBar />

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                {move || {
                    view_model
                        .get()
                        .kpis
                        .into_iter()
                        .map(|card| view! { <StatCardView card=card /> })
                        .collect_view()
                }}
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <Panel title="Revenue by City">
                    <BarChart
                        categories=pick(|c| c.cities.clone())
                        series=series(|c| c.city_series.clone())
                    />
                </Panel>
                <Panel title="Cuisine Distribution">
                    <PieChart slices=Signal::derive(move || charts.with(|c| c.cuisine_slices.clone())) />
                </Panel>
                <Panel title="Monthly Revenue Trends">
                    <AreaChart
                        categories=pick(|c| c.months.clone())
                        series=series(|c| c.revenue_trend.clone())
                    />
                </Panel>
                <Panel title="Orders and Partner Growth">
                    <LineChart
                        categories=pick(|c| c.months.clone())
                        series=series(|c| c.volume_trend.clone())
                    />
                </Panel>
                <Panel title="Partner Performance">
                    <BarChart
                        categories=pick(|c| c.tiers.clone())
                        series=series(|c| c.tier_series.clone())
                    />
                </Panel>
            </div>
        </div>
    }
}

#[component]
fn Panel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm">
            <h2 class="text-lg font-semibold mb-4">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let options = create_memo(move |_| dashboard.with(|d| d.analytics_options()));

    let select = move |key: &'static str, values: Vec<String>| {
        let selected = move || {
            dashboard.with(|d| {
                let filters = d.analytics_filters();
                match key {
                    "city" => filters.city.as_str().to_string(),
                    "cuisine" => filters.cuisine.as_str().to_string(),
                    _ => filters.partner.as_str().to_string(),
                }
            })
        };

        view! {
            <select
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(result) = dashboard.try_update(|d| d.set_analytics_filter(key, &value)) {
                        state.report(result);
                    }
                }
                class="bg-[var(--paper)] border border-gray-300 dark:border-gray-700 rounded-lg px-3 py-2 min-w-[10rem]"
            >
                {values
                    .into_iter()
                    .map(|value| {
                        let label = option_label(key, &value);
                        let current = value.clone();
                        view! {
                            <option value=value selected=move || selected() == current>{label}</option>
                        }
                    })
                    .collect_view()}
            </select>
        }
    };

    view! {
        <div class="flex flex-wrap gap-4">
            {move || {
                let options = options.get();
                view! {
                    {select("city", options.cities)}
                    {select("cuisine", options.cuisines)}
                    {select("partner", options.partners)}
                }
            }}
        </div>
    }
}
