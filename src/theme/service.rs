//! Theme service
//!
//! Owns the current [`ThemeMode`], persists it through a
//! [`PreferenceStore`] and tells registered listeners when it changes.

use std::fmt;

use super::{PreferenceStore, ThemeMode, THEME_KEY};
use crate::error::DashboardResult;

/// Handle returned by [`ThemeService::on_change`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(ThemeMode)>;

pub struct ThemeService<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: PreferenceStore> fmt::Debug for ThemeService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeService")
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Read the stored mode; an unreadable store falls back to light
    pub fn new(store: S) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(value) => ThemeMode::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference, using light");
                ThemeMode::Light
            }
        };
        tracing::debug!(%mode, "theme loaded");

        Self {
            store,
            mode,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    /// Change the mode, notify listeners and persist it
    ///
    /// The in-memory mode changes even when persisting fails; the error is
    /// returned so the caller can report it.
    pub fn set(&mut self, mode: ThemeMode) -> DashboardResult<()> {
        if mode == self.mode {
            return Ok(());
        }
        self.mode = mode;
        for (_, listener) in self.listeners.iter_mut() {
            listener(mode);
        }
        self.store.set(THEME_KEY, mode.as_str())
    }

    /// Flip between light and dark; returns the new mode
    pub fn toggle(&mut self) -> DashboardResult<ThemeMode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Register a callback run after every change
    pub fn on_change(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::theme::{FilePreferences, MemoryPreferences};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn test_loads_stored_mode() {
        let service = ThemeService::new(MemoryPreferences::new().with(THEME_KEY, "dark"));
        assert_eq!(service.get(), ThemeMode::Dark);

        let service = ThemeService::new(MemoryPreferences::new());
        assert_eq!(service.get(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut service = ThemeService::new(MemoryPreferences::new());
        assert_eq!(service.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(
            service.store().get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );

        assert_eq!(service.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(
            service.store().get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut service = ThemeService::new(MemoryPreferences::new());

        let sink = Rc::clone(&seen);
        let id = service.on_change(move |mode| sink.borrow_mut().push(mode));

        service.set(ThemeMode::Dark).unwrap();
        // Unchanged mode does not notify
        service.set(ThemeMode::Dark).unwrap();
        service.toggle().unwrap();
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);

        assert!(service.remove_listener(id));
        assert!(!service.remove_listener(id));
        service.toggle().unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_survives_restart_with_file_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut service = ThemeService::new(FilePreferences::new(&path));
        service.set(ThemeMode::Dark).unwrap();

        let restarted = ThemeService::new(FilePreferences::new(&path));
        assert_eq!(restarted.get(), ThemeMode::Dark);
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> DashboardResult<Option<String>> {
            Err(DashboardError::Preferences("unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> DashboardResult<()> {
            Err(DashboardError::Preferences("unavailable".to_string()))
        }
    }

    #[test]
    fn test_broken_store() {
        let mut service = ThemeService::new(BrokenStore);
        assert_eq!(service.get(), ThemeMode::Light);

        assert!(service.set(ThemeMode::Dark).is_err());
        assert_eq!(service.get(), ThemeMode::Dark);
    }
}
