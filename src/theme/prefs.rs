//! Preference stores
//!
//! Flat string key/value storage for user preferences. The browser build
//! backs this with `localStorage`; the CLI keeps a small TOML file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};

/// Key/value storage for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> DashboardResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()>;
}

/// Preferences that live only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: preset a value
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a flat TOML table
///
/// A missing file reads as empty; it is created on the first `set`.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/dinedash/preferences.toml`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dinedash").join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> DashboardResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        toml::from_str(&content).map_err(|e| self.error(e))
    }

    fn error(&self, err: impl std::fmt::Display) -> DashboardError {
        DashboardError::Preferences(format!("{}: {}", self.path.display(), err))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }
        let content = toml::to_string(&values).map_err(|e| self.error(e))?;
        fs::write(&self.path, content).map_err(|e| self.error(e))?;
        tracing::debug!(path = %self.path.display(), key, "preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut prefs = MemoryPreferences::new().with("theme", "dark");
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("dark"));

        prefs.set("theme", "light").unwrap();
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("light"));
        assert!(prefs.get("other").unwrap().is_none());
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = TempDir::new().unwrap();
        let prefs = FilePreferences::new(dir.path().join("prefs.toml"));
        assert!(prefs.get("theme").unwrap().is_none());
    }

    #[test]
    fn test_file_store_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");

        let mut prefs = FilePreferences::new(&path);
        prefs.set("theme", "dark").unwrap();
        prefs.set("density", "compact").unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("density").unwrap().as_deref(), Some("compact"));
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "theme = [").unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(matches!(
            prefs.get("theme"),
            Err(DashboardError::Preferences(_))
        ));
    }
}
