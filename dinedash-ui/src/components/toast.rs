//! Toast Notification Component
//!
//! Action feedback in the bottom-right corner. Toasts clear themselves on a
//! timer (see `GlobalState::show_success`) or when clicked.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Success => ("✓", "bg-[var(--success)]"),
            Tone::Error => ("✕", "bg-[var(--error)]"),
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let toast = move |signal: RwSignal<Option<String>>, tone: Tone| {
        move || {
            signal.get().map(|message| view! {
                <ToastMessage message=message tone=tone on_close=move |_: ()| signal.set(None) />
            })
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end space-y-2">
            {toast(state.success, Tone::Success)}
            {toast(state.error, Tone::Error)}
        </div>
    }
}

#[component]
fn ToastMessage(
    message: String,
    tone: Tone,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let (icon, background) = tone.style();

    view! {
        <button
            on:click=move |_| on_close.call(())
            class=format!("flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg", background)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </button>
    }
}
