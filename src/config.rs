//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::FilePreferences;
use crate::view::DEFAULT_PAGE_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Seed data and table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON seed bundle replacing the built-in seed
    pub seed_path: Option<PathBuf>,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            page_size: default_page_size(),
        }
    }
}

/// Add/edit form behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormsConfig {
    /// Refuse to save while required fields are empty
    #[serde(default)]
    pub enforce_required: bool,
}

/// Where user preferences (the theme mode) are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesConfig {
    pub path: Option<PathBuf>,
}

impl PreferencesConfig {
    /// Configured path, else the platform config dir, else the working dir
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .or_else(FilePreferences::default_path)
            .unwrap_or_else(|| PathBuf::from("./dinedash-preferences.toml"))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("dinedash").join("config.toml")),
            Some(PathBuf::from("./dinedash.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists and parses
    ///
    /// Broken files are skipped with a warning; with no usable file the
    /// defaults plus environment overrides apply.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `DINEDASH_*` overrides from a variable lookup
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("DINEDASH_SEED_PATH") {
            self.data.seed_path = Some(PathBuf::from(path));
        }
        if let Some(size) = lookup("DINEDASH_PAGE_SIZE") {
            match size.parse() {
                Ok(size) => self.data.page_size = size,
                Err(_) => tracing::warn!(value = %size, "ignoring invalid DINEDASH_PAGE_SIZE"),
            }
        }
        if let Some(flag) = lookup("DINEDASH_ENFORCE_REQUIRED") {
            match parse_flag(&flag) {
                Some(enforce) => self.forms.enforce_required = enforce,
                None => tracing::warn!(value = %flag, "ignoring invalid DINEDASH_ENFORCE_REQUIRED"),
            }
        }
        if let Some(path) = lookup("DINEDASH_PREFERENCES") {
            self.preferences.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("DINEDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DINEDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DineDash Configuration
#
# Environment variables override these settings:
# - DINEDASH_SEED_PATH
# - DINEDASH_PAGE_SIZE
# - DINEDASH_ENFORCE_REQUIRED
# - DINEDASH_PREFERENCES
# - DINEDASH_LOG_LEVEL
# - DINEDASH_LOG_FORMAT

[data]
# JSON seed bundle to start from instead of the built-in data
# (write one with `dinedash seed > seed.json`)
# seed_path = "./seed.json"

# Rows per page in the restaurant table: 5, 10 or 25
page_size = 10

[forms]
# Block saving while required fields (name, city, cuisine, partner) are empty
enforce_required = false

[preferences]
# File holding the theme mode; defaults to the platform config dir
# path = "~/.config/dinedash/preferences.toml"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.page_size, 10);
        assert!(config.data.seed_path.is_none());
        assert!(!config.forms.enforce_required);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.data.page_size, 10);
        assert!(!config.forms.enforce_required);
        assert!(config.preferences.path.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dinedash.toml");
        std::fs::write(&path, "[forms]\nenforce_required = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.forms.enforce_required);
        assert_eq!(config.data.page_size, 10);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[data\npage_size = 5").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[data\npage_size = 5").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[logging]\nformat = \"json\"\n").unwrap();

        let paths = [dir.path().join("absent.toml"), bad, good];
        assert_eq!(Config::load_first(&paths).logging.format, "json");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DINEDASH_SEED_PATH", "/tmp/seed.json"),
            ("DINEDASH_PAGE_SIZE", "25"),
            ("DINEDASH_ENFORCE_REQUIRED", "yes"),
            ("DINEDASH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.data.page_size, 25);
        assert!(config.forms.enforce_required);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "DINEDASH_PAGE_SIZE" => Some("many".to_string()),
            "DINEDASH_ENFORCE_REQUIRED" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config.data.page_size, 10);
        assert!(!config.forms.enforce_required);
    }

    #[test]
    fn test_preferences_path() {
        let config = PreferencesConfig {
            path: Some(PathBuf::from("/tmp/prefs.toml")),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/prefs.toml"));
    }
}
