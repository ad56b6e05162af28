//! Top Bar Component
//!
//! Section title, theme toggle, notification bell and avatar.

use leptos::*;

use dinedash::Section;

use super::chip::{severity_class, Chip};
use crate::state::global::GlobalState;

/// Top bar for the active section
#[component]
pub fn TopBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let title = create_memo(move |_| state.dashboard.with(|d| d.section().title()));

    view! {
        <header class="h-16 flex items-center justify-between px-6 bg-[var(--paper)] border-b border-gray-200 dark:border-gray-800">
            <h1 class="text-xl font-semibold">{move || title.get()}</h1>

            <div class="flex items-center space-x-4">
                <ThemeToggle />
                <NotificationBell />
                <div class="w-9 h-9 rounded-full bg-[var(--primary)] text-white flex items-center justify-center font-semibold">
                    "A"
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| state.toggle_theme()
            title=move || state.theme.get().toggle_hint()
            class="w-9 h-9 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
        >
            {move || if state.theme.get().is_dark() { "☀" } else { "🌙" }}
        </button>
    }
}

#[component]
fn NotificationBell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (open, set_open) = create_signal(false);

    let count = create_memo(move |_| state.dashboard.with(|d| d.notifications().0));

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="relative w-9 h-9 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            >
                "🔔"
                {move || {
                    let n = count.get();
                    (n > 0).then(|| view! {
                        <span class="absolute -top-1 -right-1 bg-[var(--error)] text-white text-xs rounded-full w-5 h-5 flex items-center justify-center">
                            {n}
                        </span>
                    })
                }}
            </button>

            {move || open.get().then(|| view! {
                <div class="absolute right-0 mt-2 w-80 bg-[var(--paper)] rounded-lg shadow-lg border border-gray-200 dark:border-gray-800 z-40">
                    <div class="px-4 py-3 font-semibold border-b border-gray-200 dark:border-gray-800">
                        "AI Anomaly Alerts"
                    </div>
                    <NotificationList on_select=move || set_open.set(false) />
                </div>
            })}
        </div>
    }
}

#[component]
fn NotificationList<F>(on_select: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        let preview: Vec<_> = state
            .dashboard
            .with(|d| d.notifications().1.into_iter().cloned().collect());

        if preview.is_empty() {
            return view! {
                <div class="px-4 py-6 text-sm text-center text-[var(--muted-foreground)]">
                    "No active anomalies"
                </div>
            }
            .into_view();
        }

        preview
            .into_iter()
            .map(|anomaly| {
                view! {
                    <button
                        on:click=move |_| {
                            on_select();
                            state.navigate(Section::Anomalies);
                        }
                        class="w-full text-left px-4 py-3 hover:bg-gray-100 dark:hover:bg-gray-800 space-y-1"
                    >
                        <div class="flex items-center justify-between">
                            <span class="text-sm font-medium">{anomaly.title.clone()}</span>
                            <Chip
                                label=anomaly.severity.as_str().to_uppercase()
                                class=severity_class(anomaly.severity)
                            />
                        </div>
                        <div class="text-xs text-[var(--muted-foreground)]">
                            {format!("{} · {}", anomaly.restaurant, anomaly.timestamp)}
                        </div>
                    </button>
                }
            })
            .collect_view()
    }
}
