//! Overview Page
//!
//! System status, headline stats, recent activity, top performers and
//! quick actions.

use leptos::*;

use dinedash::format::currency;
use dinedash::model::ActivityKind;
use dinedash::overview::{StatusBanner, TopPerformer, QUICK_ACTIONS};

use crate::components::StatCardView;
use crate::state::global::GlobalState;

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Restaurant => "🍽",
        ActivityKind::Anomaly => "⚠",
        ActivityKind::Alert => "🔔",
    }
}

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let overview = create_memo(move |_| state.dashboard.with(|d| d.overview()));

    view! {
        <div class="space-y-6">
            {move || view! { <Banner banner=overview.get().banner /> }}

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                {move || {
                    overview
                        .get()
                        .stats
                        .into_iter()
                        .map(|card| view! { <StatCardView card=card /> })
                        .collect_view()
                }}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm">
                    <h2 class="text-lg font-semibold mb-4">"Recent Activity"</h2>
                    <ul class="space-y-4">
                        {move || {
                            overview
                                .get()
                                .activity
                                .into_iter()
                                .map(|entry| view! {
                                    <li class="flex items-start space-x-3">
                                        <span class="text-lg">{activity_icon(entry.kind)}</span>
                                        <div class="flex-1">
                                            <div class="font-medium">{entry.title}</div>
                                            <div class="text-sm text-[var(--muted-foreground)]">{entry.description}</div>
                                        </div>
                                        <span class="text-xs text-[var(--muted-foreground)]">{entry.time}</span>
                                    </li>
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>

                <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm">
                    <h2 class="text-lg font-semibold mb-4">"Top Performing Restaurants"</h2>
                    <div class="space-y-4">
                        {move || {
                            overview
                                .get()
                                .top_performers
                                .into_iter()
                                .map(|top| view! { <PerformerRow top=top /> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>

            <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm">
                <h2 class="text-lg font-semibold mb-4">"Quick Actions"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|action| {
                            let section = action.section;
                            view! {
                                <button
                                    on:click=move |_| state.navigate(section)
                                    class="p-4 rounded-lg border border-gray-200 dark:border-gray-800 text-left hover:border-[var(--primary)] transition-colors"
                                >
                                    <div class="font-medium">{action.label}</div>
                                    <div class="text-sm text-[var(--muted-foreground)]">{action.caption}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Banner(banner: StatusBanner) -> impl IntoView {
    let class = if banner.needs_attention() {
        "border-[var(--error)] bg-red-50 dark:bg-red-950 text-[var(--error)]"
    } else {
        "border-[var(--success)] bg-green-50 dark:bg-green-950 text-[var(--success)]"
    };

    view! {
        <div class=format!("rounded-xl border px-5 py-4 {}", class)>
            <span class="font-semibold">"System Status: "</span>
            {banner.message()}
        </div>
    }
}

#[component]
fn PerformerRow(top: TopPerformer) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between text-sm">
                <div>
                    <span class="font-semibold mr-2">{format!("#{}", top.rank)}</span>
                    <span class="font-medium">{top.name}</span>
                    <span class="text-[var(--muted-foreground)]">{format!(" · {}", top.city)}</span>
                </div>
                <div class="text-right">
                    <div class="font-semibold">{currency(top.revenue)}</div>
                    <div class="text-xs text-[var(--muted-foreground)]">{format!("{:.1} ★", top.rating)}</div>
                </div>
            </div>
            <div class="h-2 mt-2 rounded-full bg-gray-200 dark:bg-gray-800">
                <div
                    class="h-2 rounded-full bg-[var(--primary)]"
                    style=format!("width: {:.0}%", top.progress)
                />
            </div>
        </div>
    }
}
