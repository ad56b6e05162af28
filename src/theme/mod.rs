//! Light/dark theme
//!
//! The theme mode is the only preference that outlives a session. It is
//! read through a [`PreferenceStore`] when the [`ThemeService`] starts and
//! written back on every change.

pub mod prefs;
pub mod service;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use service::{ListenerId, ThemeService};

/// Preference key holding the theme mode
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Mode for a stored flag: only `"dark"` selects dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Tooltip of the toggle button
    pub fn toggle_hint(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(DashboardError::InvalidValue {
                field: THEME_KEY.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Colors of one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

const LIGHT: Palette = Palette {
    primary: "#E53935",
    secondary: "#FB8C00",
    background: "#FFFFFF",
    paper: "#FFFFFF",
    text_primary: "#212121",
    text_secondary: "#757575",
    error: "#E53935",
    warning: "#FB8C00",
    success: "#4CAF50",
};

const DARK: Palette = Palette {
    primary: "#FF5A4F",
    secondary: "#FF9800",
    background: "#121212",
    paper: "#1E1E1E",
    text_primary: "#FFFFFF",
    text_secondary: "#B3B3B3",
    error: "#E53935",
    warning: "#FB8C00",
    success: "#4CAF50",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// CSS custom properties for the document root
    pub fn css_variables(&self) -> String {
        [
            ("--primary", self.primary),
            ("--secondary", self.secondary),
            ("--background", self.background),
            ("--paper", self.paper),
            ("--foreground", self.text_primary),
            ("--muted-foreground", self.text_secondary),
            ("--error", self.error),
            ("--warning", self.warning),
            ("--success", self.success),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle_hint(), "Switch to Light Mode");
    }

    #[test]
    fn test_palettes() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).primary, "#E53935");
        assert_eq!(Palette::for_mode(ThemeMode::Dark).paper, "#1E1E1E");
        assert!(Palette::for_mode(ThemeMode::Dark)
            .css_variables()
            .contains("--background: #121212;"));
    }
}
