//! Restaurants Page
//!
//! Filterable, paginated restaurant table with add/edit/delete and a
//! read-only details dialog.

use leptos::*;

use dinedash::analytics::option_label;
use dinedash::format::{currency, price, thousands};
use dinedash::view::{distinct_values, with_all};
use dinedash::{Restaurant, RestaurantStatus, SaveOutcome};

use crate::components::chip::{partner_class, restaurant_status_class};
use crate::components::edit_dialog::FormView;
use crate::components::entity_table::{Column, PagerState};
use crate::components::{Chip, EditDialog, EntityTable, Pager};
use crate::state::global::GlobalState;

const COLUMNS: &[Column] = &[
    Column::new("name", "Restaurant"),
    Column::new("cuisine", "Cuisine"),
    Column::new("partner", "Partner"),
    Column::new("status", "Status"),
    Column::new("revenue", "Revenue"),
    Column::new("rating", "Rating"),
    Column::new("orders", "Orders"),
];

fn restaurant_cell(r: &Restaurant, key: &'static str) -> View {
    match key {
        "name" => view! {
            <div>
                <div class="font-medium">{r.name.clone()}</div>
                <div class="text-xs text-[var(--muted-foreground)]">{r.city.clone()}</div>
            </div>
        }
        .into_view(),
        "partner" => view! { <Chip label=r.partner.clone() class=partner_class(&r.partner) /> }.into_view(),
        "status" => view! {
            <Chip label=r.status.as_str() class=restaurant_status_class(r.status) />
        }
        .into_view(),
        "revenue" => currency(r.revenue).into_view(),
        "rating" => format!("{:.1} ★", r.rating).into_view(),
        "orders" => thousands(u64::from(r.orders)).into_view(),
        _ => crate::components::entity_table::text_cell(r, key),
    }
}

/// Message for a save, or `None` when nothing worth a toast happened
pub fn save_message(outcome: &SaveOutcome) -> Option<String> {
    match outcome {
        SaveOutcome::Created(_) => Some("Restaurant added successfully".to_string()),
        SaveOutcome::Updated(_) => Some("Restaurant updated successfully".to_string()),
        SaveOutcome::Gone(id) => Some(format!("Restaurant {} no longer exists", id)),
        SaveOutcome::Blocked(missing) => Some(format!("Please fill in: {}", missing.join(", "))),
        SaveOutcome::NotOpen => None,
    }
}

/// Restaurants page component
#[component]
pub fn Restaurants() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let rows = create_memo(move |_| {
        dashboard.with(|d| {
            d.restaurant_page()
                .items
                .into_iter()
                .cloned()
                .collect::<Vec<Restaurant>>()
        })
    });
    let pager = create_memo(move |_| dashboard.with(|d| PagerState::of(&d.restaurant_page())));
    let form = create_memo(move |_| dashboard.with(|d| FormView::of(d.restaurant_form())));
    let details = create_memo(move |_| dashboard.with(|d| d.restaurant_details().cloned()));

    let on_change = move |(key, value): (&'static str, String)| {
        let result = dashboard.try_update(|d| d.update_restaurant_field(key, &value));
        if let Some(result) = result {
            state.report(result);
        }
    };

    let on_save = move |_: ()| {
        let Some(result) = dashboard.try_update(|d| d.save_restaurant()) else {
            return;
        };
        let Some(outcome) = state.report(result) else {
            return;
        };
        if let Some(message) = save_message(&outcome) {
            match outcome {
                SaveOutcome::Blocked(_) | SaveOutcome::Gone(_) => state.show_error(&message),
                _ => state.show_success(&message),
            }
        }
    };

    let on_delete = move |id: u32| {
        if let Some(Some(removed)) = dashboard.try_update(|d| d.delete_restaurant(id)) {
            state.show_success(&format!("{} deleted", removed.name));
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <p class="text-[var(--muted-foreground)]">"Manage restaurant partners and their details"</p>
                <button
                    on:click=move |_| dashboard.update(|d| d.open_restaurant_create())
                    class="px-4 py-2 rounded-lg bg-[var(--primary)] text-white font-medium"
                >
                    "+ Add Restaurant"
                </button>
            </div>

            <FilterBar />

            <section class="bg-[var(--paper)] rounded-xl shadow-sm">
                <EntityTable
                    columns=COLUMNS
                    rows=rows
                    render=restaurant_cell
                    on_edit=move |id: u32| dashboard.update(|d| {
                        d.open_restaurant_edit(id);
                    })
                    on_delete=on_delete
                    on_show=Callback::new(move |id: u32| dashboard.update(|d| {
                        d.show_restaurant(id);
                    }))
                />
                <Pager
                    state=pager
                    on_prev=move |_: ()| dashboard.update(|d| {
                        let page = d.pagination().page();
                        d.set_page(page.saturating_sub(1));
                    })
                    on_next=move |_: ()| dashboard.update(|d| {
                        let page = d.pagination().page();
                        d.set_page(page + 1);
                    })
                    on_page_size=move |size: usize| dashboard.update(|d| d.set_page_size(size))
                />
            </section>

            <EditDialog
                form=form
                on_change=on_change
                on_save=on_save
                on_cancel=move |_: ()| dashboard.update(|d| d.cancel_restaurant_form())
            />

            {move || details.get().map(|restaurant| view! {
                <RestaurantDetails
                    restaurant=restaurant
                    on_close=move |_: ()| dashboard.update(|d| d.close_restaurant_details())
                />
            })}
        </div>
    }
}

/// City, cuisine, partner and status selects
#[component]
fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let options = create_memo(move |_| {
        dashboard.with(|d| {
            let list = d.restaurants().list();
            vec![
                ("city", "City", with_all(distinct_values(list, "city"))),
                ("cuisine", "Cuisine", with_all(distinct_values(list, "cuisine"))),
                ("partner", "Partner", with_all(distinct_values(list, "partner"))),
                (
                    "status",
                    "Status",
                    with_all(RestaurantStatus::all().iter().map(|s| s.as_str())),
                ),
            ]
        })
    });

    view! {
        <div class="flex flex-wrap gap-4 items-end">
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(key, label, values)| {
                        let selected = move || dashboard.with(|d| d.restaurant_filter().selection(key).to_string());
                        view! {
                            <label class="block">
                                <span class="block text-xs text-[var(--muted-foreground)] mb-1">{label}</span>
                                <select
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        if let Some(result) = dashboard.try_update(|d| d.set_restaurant_filter(key, &value)) {
                                            state.report(result);
                                        }
                                    }
                                    class="bg-[var(--paper)] border border-gray-300 dark:border-gray-700 rounded-lg px-3 py-2 min-w-[10rem]"
                                >
                                    {values
                                        .into_iter()
                                        .map(|value| {
                                            let text = option_label(key, &value);
                                            let current = value.clone();
                                            view! {
                                                <option value=value selected=move || selected() == current>
                                                    {text}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        }
                    })
                    .collect_view()
            }}
            <button
                on:click=move |_| dashboard.update(|d| d.clear_restaurant_filter())
                class="px-3 py-2 text-sm rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
            >
                "Clear filters"
            </button>
        </div>
    }
}

#[component]
fn RestaurantDetails(
    restaurant: Restaurant,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let r = restaurant;

    view! {
        <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center">
            <div class="bg-[var(--paper)] rounded-xl shadow-xl w-full max-w-3xl max-h-[90vh] overflow-y-auto p-6 space-y-6">
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="text-2xl font-semibold">{r.name.clone()}</h2>
                        <div class="flex space-x-2 mt-2">
                            <Chip label=r.partner.clone() class=partner_class(&r.partner) />
                            <Chip label=r.status.as_str() class=restaurant_status_class(r.status) />
                        </div>
                    </div>
                    <button on:click=move |_| on_close.call(()) class="text-xl">"✕"</button>
                </div>

                <section class="space-y-1 text-sm">
                    <div>{format!("📍 {}", r.location_line())}</div>
                    <div>{format!("📞 {}", r.phone.clone().unwrap_or_else(|| "Phone not provided".to_string()))}</div>
                    <div>{format!("✉ {}", r.email.clone().unwrap_or_else(|| "Email not provided".to_string()))}</div>
                    {r.manager.clone().map(|manager| view! { <div>{format!("👤 {}", manager)}</div> })}
                </section>

                <section class="grid grid-cols-3 gap-4 text-center">
                    <Metric label="Revenue" value=currency(r.revenue) />
                    <Metric label="Rating" value=format!("{:.1}", r.rating) />
                    <Metric label="Orders" value=thousands(u64::from(r.orders)) />
                </section>

                <section>
                    <h3 class="text-lg font-semibold mb-3">"Menu"</h3>
                    {match r.menu.clone().filter(|menu| !menu.is_empty()) {
                        Some(menu) => menu
                            .into_iter()
                            .map(|category| view! {
                                <div class="mb-4">
                                    <h4 class="font-medium text-[var(--primary)] mb-2">{category.category}</h4>
                                    <ul class="space-y-2">
                                        {category
                                            .items
                                            .into_iter()
                                            .map(|item| view! {
                                                <li class="flex justify-between text-sm">
                                                    <div>
                                                        <div class="font-medium">{item.name}</div>
                                                        <div class="text-[var(--muted-foreground)]">{item.description}</div>
                                                    </div>
                                                    <span class="font-semibold">{price(item.price)}</span>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view(),
                        None => view! {
                            <p class="text-sm text-[var(--muted-foreground)]">"Menu information not available"</p>
                        }
                        .into_view(),
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn Metric(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-gray-50 dark:bg-gray-900 p-4">
            <div class="text-xs text-[var(--muted-foreground)]">{label}</div>
            <div class="text-xl font-semibold mt-1">{value}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_messages() {
        assert_eq!(
            save_message(&SaveOutcome::Created(6)).as_deref(),
            Some("Restaurant added successfully")
        );
        assert_eq!(
            save_message(&SaveOutcome::Blocked(vec!["name", "city"])).as_deref(),
            Some("Please fill in: name, city")
        );
        assert!(save_message(&SaveOutcome::NotOpen).is_none());
    }
}
