//! Data providers
//!
//! Where the dashboard's records come from. Every collection is read once at
//! startup; after that all mutation happens in memory.
//!
//! - `SeedProvider`: the compiled-in seed
//! - `JsonSeedProvider`: a [`SeedBundle`] loaded from a JSON file

pub mod json;
pub mod seed;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DashboardResult;
use crate::model::{ActivityEntry, AnalyticsDataset, Anomaly, Restaurant, SystemHealth};

pub use json::JsonSeedProvider;
pub use seed::SeedProvider;

/// Source of the dashboard's initial records
pub trait DataProvider {
    fn restaurants(&self) -> Vec<Restaurant>;

    fn anomalies(&self) -> Vec<Anomaly>;

    fn analytics(&self) -> AnalyticsDataset;

    /// Recent activity feed, newest first
    fn activity(&self) -> Vec<ActivityEntry>;

    fn system_health(&self) -> SystemHealth;

    /// Everything this provider serves, as one serializable bundle
    fn bundle(&self) -> SeedBundle {
        SeedBundle {
            restaurants: self.restaurants(),
            anomalies: self.anomalies(),
            analytics: self.analytics(),
            activity: self.activity(),
            system_health: self.system_health(),
        }
    }
}

/// Serialized form of a provider's data
///
/// Missing sections deserialize as empty, so a file may carry only the
/// collections it wants to replace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeedBundle {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub analytics: AnalyticsDataset,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub system_health: SystemHealth,
}

impl DataProvider for SeedBundle {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn anomalies(&self) -> Vec<Anomaly> {
        self.anomalies.clone()
    }

    fn analytics(&self) -> AnalyticsDataset {
        self.analytics.clone()
    }

    fn activity(&self) -> Vec<ActivityEntry> {
        self.activity.clone()
    }

    fn system_health(&self) -> SystemHealth {
        self.system_health.clone()
    }

    fn bundle(&self) -> SeedBundle {
        self.clone()
    }
}

/// Provider for an optional seed file, falling back to the built-in seed
pub fn provider_for(seed_path: Option<&Path>) -> DashboardResult<Box<dyn DataProvider>> {
    match seed_path {
        Some(path) => Ok(Box::new(JsonSeedProvider::load(path)?)),
        None => {
            tracing::debug!("using built-in seed data");
            Ok(Box::new(SeedProvider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_matches_provider() {
        let bundle = SeedProvider.bundle();
        assert_eq!(bundle.restaurants, SeedProvider.restaurants());
        assert_eq!(bundle.anomalies.len(), 2);
        assert_eq!(bundle.bundle(), bundle);
    }

    #[test]
    fn test_provider_for_without_path() {
        let provider = provider_for(None).unwrap();
        assert_eq!(provider.restaurants().len(), 5);
    }

    #[test]
    fn test_partial_bundle_deserializes() {
        let bundle: SeedBundle = serde_json::from_str(r#"{"restaurants": []}"#).unwrap();
        assert!(bundle.restaurants.is_empty());
        assert!(bundle.anomalies.is_empty());
        assert_eq!(bundle.system_health.uptime, 100.0);
    }
}
