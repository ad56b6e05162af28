//! App Root Component
//!
//! Shell layout: sidebar, top bar and the active section's page.

use leptos::*;

use dinedash::{Palette, Section, ThemeMode};

use crate::components::{PageSkeleton, Sidebar, Toast, TopBar};
use crate::pages::{Analytics, Anomalies, Overview, Restaurants, Settings};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Push the palette to the document root whenever the mode changes
    create_effect(move |_| apply_theme(state.theme.get()));

    view! {
        <div class="min-h-screen flex bg-[var(--background)] text-[var(--foreground)]">
            <Sidebar />

            <div class="flex-1 flex flex-col min-w-0">
                <TopBar />

                <main class="flex-1 px-6 py-8 overflow-y-auto">
                    <SectionContent />
                </main>
            </div>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// The active section, or a skeleton while a switch is pending
#[component]
fn SectionContent() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let route = create_memo(move |_| {
        state
            .dashboard
            .with(|d| (d.router().is_pending(), d.section()))
    });

    move || {
        let (pending, section) = route.get();
        if pending {
            return view! { <PageSkeleton /> }.into_view();
        }
        match section {
            Section::Dashboard => view! { <Overview /> }.into_view(),
            Section::Restaurants => view! { <Restaurants /> }.into_view(),
            Section::Analytics => view! { <Analytics /> }.into_view(),
            Section::Anomalies => view! { <Anomalies /> }.into_view(),
            Section::Settings => view! { <Settings /> }.into_view(),
        }
    }
}

fn apply_theme(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        web_sys::console::error_1(&"Theme not applied: no document element".into());
        return;
    };

    let attributes = [
        ("style", Palette::for_mode(mode).css_variables()),
        ("class", if mode.is_dark() { "dark" } else { "" }.to_string()),
    ];
    for (name, value) in attributes {
        if let Err(e) = root.set_attribute(name, &value) {
            web_sys::console::error_1(&format!("Theme not applied ({}): {:?}", name, e).into());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_theme_sets_root_class() {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .unwrap();

        apply_theme(ThemeMode::Dark);
        assert_eq!(root.get_attribute("class").as_deref(), Some("dark"));

        apply_theme(ThemeMode::Light);
        assert_eq!(root.get_attribute("class").as_deref(), Some(""));
        assert!(root.get_attribute("style").unwrap().contains("--primary"));
    }
}
