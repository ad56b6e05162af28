//! Dashboard error types
//!
//! Domain operations (store mutations, workflow actions) never fail on a
//! missing id; they are silent no-ops. The errors here cover the fallible
//! edges: parsing user-supplied keys and values, preference storage and seed
//! loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Field key not present in the entity's schema
    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// Value could not be parsed for the given field
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },

    /// Section key outside the fixed navigation set
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Filter key not recognised by the target view
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Preference store could not be read or written
    #[error("Preference store error: {0}")]
    Preferences(String),

    /// Seed bundle could not be loaded
    #[error("Failed to load seed data from {path:?}: {error}")]
    Seed { path: PathBuf, error: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownField {
            entity: "restaurant",
            field: "owner".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown field 'owner' for restaurant");

        let err = DashboardError::UnknownSection("billing".to_string());
        assert_eq!(err.to_string(), "Unknown section: billing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
