//! Global Application State
//!
//! Reactive state management using Leptos signals. The whole view state is
//! one `Dashboard` inside a signal; the theme goes through a `ThemeService`
//! backed by `localStorage`.

use leptos::*;

use dinedash::provider::SeedProvider;
use dinedash::theme::{PreferenceStore, ThemeMode, ThemeService};
use dinedash::{Dashboard, DashboardError, DashboardResult, Section};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Sections, collections, filters, forms and dialogs
    pub dashboard: RwSignal<Dashboard>,
    /// Current theme mode, mirrored from the theme service
    pub theme: RwSignal<ThemeMode>,
    theme_service: StoredValue<ThemeService<LocalStoragePreferences>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Browser `localStorage` as a preference store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

fn local_storage() -> DashboardResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| DashboardError::Preferences("localStorage is unavailable".to_string()))
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|_| DashboardError::Preferences(format!("cannot read '{}'", key)))
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| DashboardError::Preferences(format!("cannot write '{}'", key)))
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let mut service = ThemeService::new(LocalStoragePreferences);
    let theme = create_rw_signal(service.get());
    service.on_change(move |mode| theme.set(mode));

    let state = GlobalState {
        dashboard: create_rw_signal(Dashboard::new(&SeedProvider)),
        theme,
        theme_service: store_value(service),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Switch sections; the swap is committed on the next tick
    pub fn navigate(&self, section: Section) {
        let Some(ticket) = self.dashboard.try_update(|d| d.select_section(section)) else {
            return;
        };

        let dashboard = self.dashboard;
        gloo_timers::callback::Timeout::new(0, move || {
            dashboard.update(|d| {
                if d.commit_section(ticket) {
                    web_sys::console::log_1(&format!("Section: {}", section.title()).into());
                }
            });
        })
        .forget();
    }

    /// Flip light/dark; the mode changes even if it cannot be saved
    pub fn toggle_theme(&self) {
        if let Some(Err(e)) = self.theme_service.try_update_value(|s| s.toggle()) {
            self.show_error(&format!("Theme not saved: {}", e));
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Report a failed action as an error toast
    pub fn report<T>(&self, result: DashboardResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.show_error(&e.to_string());
                None
            }
        }
    }
}
