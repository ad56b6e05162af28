//! Sidebar Component
//!
//! Brand header and one entry per dashboard section.

use leptos::*;

use dinedash::Section;

use crate::state::global::GlobalState;

pub const APP_VERSION: &str = "Version 2.0.1";

fn icon(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "📊",
        Section::Restaurants => "🍽",
        Section::Analytics => "📈",
        Section::Anomalies => "⚠",
        Section::Settings => "⚙",
    }
}

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 bg-[var(--paper)] border-r border-gray-200 dark:border-gray-800 flex flex-col">
            // Brand
            <div class="flex items-center space-x-3 px-6 h-16 border-b border-gray-200 dark:border-gray-800">
                <span class="text-2xl">"🍴"</span>
                <div>
                    <div class="text-lg font-bold text-[var(--primary)]">"DineDash"</div>
                    <div class="text-xs text-[var(--muted-foreground)]">"Admin Portal"</div>
                </div>
            </div>

            <nav class="flex-1 px-3 py-4 space-y-1">
                {Section::all()
                    .iter()
                    .map(|section| view! { <SidebarItem section=*section /> })
                    .collect_view()}
            </nav>

            <div class="px-6 py-4 text-xs text-[var(--muted-foreground)]">{APP_VERSION}</div>
        </aside>
    }
}

#[component]
fn SidebarItem(section: Section) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Highlight follows the requested section, not the committed one
    let is_active = create_memo(move |_| {
        state.dashboard.with(|d| {
            d.router().pending_target().unwrap_or_else(|| d.section()) == section
        })
    });

    view! {
        <button
            on:click=move |_| state.navigate(section)
            class=move || {
                let base = "w-full flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-[var(--primary)] text-white", base)
                } else {
                    format!("{} text-[var(--muted-foreground)] hover:bg-gray-100 dark:hover:bg-gray-800", base)
                }
            }
        >
            <span>{icon(section)}</span>
            <span>{section.label()}</span>
        </button>
    }
}
