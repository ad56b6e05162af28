//! Settings Page
//!
//! Appearance and data export.

use leptos::*;
use wasm_bindgen::JsCast;

use dinedash::export::{export_anomalies, export_restaurants, file_name, ExportFormat};
use dinedash::{DashboardError, DashboardResult, Palette};

use crate::components::sidebar::APP_VERSION;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-3xl">
            <Appearance />
            <DataExport />

            <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm">
                <h2 class="text-xl font-semibold mb-2">"About"</h2>
                <p class="text-sm text-[var(--muted-foreground)]">
                    {format!("DineDash Admin Portal · {}", APP_VERSION)}
                </p>
            </section>
        </div>
    }
}

#[component]
fn Appearance() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm space-y-4">
            <h2 class="text-xl font-semibold">"Appearance"</h2>

            <div class="flex items-center justify-between">
                <div>
                    <div class="font-medium">"Dark Mode"</div>
                    <div class="text-sm text-[var(--muted-foreground)]">"Saved in this browser"</div>
                </div>
                <button
                    on:click=move |_| state.toggle_theme()
                    title=move || state.theme.get().toggle_hint()
                    class=move || {
                        let base = "w-12 h-6 rounded-full transition-colors relative";
                        if state.theme.get().is_dark() {
                            format!("{} bg-[var(--primary)]", base)
                        } else {
                            format!("{} bg-gray-300", base)
                        }
                    }
                >
                    <span class=move || {
                        let offset = if state.theme.get().is_dark() { "left-6" } else { "left-0.5" };
                        format!("absolute top-0.5 {} w-5 h-5 rounded-full bg-white transition-all", offset)
                    } />
                </button>
            </div>

            // Palette preview
            <div class="flex space-x-2">
                {move || {
                    let palette = Palette::for_mode(state.theme.get());
                    [palette.primary, palette.secondary, palette.success, palette.warning, palette.error]
                        .into_iter()
                        .map(|color| view! {
                            <div class="w-8 h-8 rounded-full border border-gray-200" style=format!("background-color: {}", color) title=color />
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// Trigger a browser download of `content`
fn download(content: &str, name: &str, mime: &str) -> DashboardResult<()> {
    let fail = |what: &str| DashboardError::Serialization(format!("download failed: {}", what));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| fail("no document"))?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&content.into()),
        &options,
    )
    .map_err(|_| fail("blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail("object url"))?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        .ok_or_else(|| fail("anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dataset {
    Restaurants,
    Anomalies,
}

impl Dataset {
    fn stem(self) -> &'static str {
        match self {
            Dataset::Restaurants => "restaurants",
            Dataset::Anomalies => "anomalies",
        }
    }
}

#[component]
fn DataExport() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let export = move |dataset: Dataset, format: ExportFormat| {
        let content = dashboard.with(|d| match dataset {
            Dataset::Restaurants => export_restaurants(d.restaurants().list(), format),
            Dataset::Anomalies => export_anomalies(d.anomalies().list(), format),
        });
        let today = chrono::Local::now().date_naive();
        let name = file_name(dataset.stem(), format, today);

        let result = content.and_then(|content| download(&content, &name, format.mime_type()));
        if state.report(result).is_some() {
            state.show_success(&format!("Exported {}", name));
        }
    };

    let button = move |label: &'static str, dataset: Dataset, format: ExportFormat| {
        view! {
            <button
                on:click=move |_| export(dataset, format)
                class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-700 hover:border-[var(--primary)] text-sm font-medium"
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="bg-[var(--paper)] rounded-xl p-6 shadow-sm space-y-4">
            <h2 class="text-xl font-semibold">"Data Export"</h2>
            <p class="text-sm text-[var(--muted-foreground)]">
                {move || dashboard.with(|d| format!(
                    "{} restaurants and {} anomalies in this session. Changes are not saved when the page is closed.",
                    d.restaurants().len(),
                    d.anomalies().len()
                ))}
            </p>
            <div class="flex flex-wrap gap-3">
                {button("Restaurants (CSV)", Dataset::Restaurants, ExportFormat::Csv)}
                {button("Restaurants (JSON)", Dataset::Restaurants, ExportFormat::Json)}
                {button("Anomalies (CSV)", Dataset::Anomalies, ExportFormat::Csv)}
                {button("Anomalies (JSON)", Dataset::Anomalies, ExportFormat::Json)}
            </div>
        </section>
    }
}
