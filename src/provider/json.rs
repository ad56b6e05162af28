//! JSON seed files

use std::fs;
use std::path::{Path, PathBuf};

use super::{DataProvider, SeedBundle};
use crate::error::{DashboardError, DashboardResult};
use crate::model::{ActivityEntry, AnalyticsDataset, Anomaly, Restaurant, SystemHealth};
use crate::store::duplicate_id;

/// Provider backed by a [`SeedBundle`] read from disk
#[derive(Debug, Clone)]
pub struct JsonSeedProvider {
    path: PathBuf,
    bundle: SeedBundle,
}

impl JsonSeedProvider {
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref().to_path_buf();
        let seed_error = |error: String| DashboardError::Seed {
            path: path.clone(),
            error,
        };

        let content = fs::read_to_string(&path).map_err(|e| seed_error(e.to_string()))?;
        let bundle: SeedBundle =
            serde_json::from_str(&content).map_err(|e| seed_error(e.to_string()))?;

        if let Some(id) = duplicate_id(&bundle.restaurants) {
            return Err(seed_error(format!("duplicate restaurant id {}", id)));
        }
        if let Some(id) = duplicate_id(&bundle.anomalies) {
            return Err(seed_error(format!("duplicate anomaly id {}", id)));
        }

        tracing::info!(
            path = %path.display(),
            restaurants = bundle.restaurants.len(),
            anomalies = bundle.anomalies.len(),
            "loaded seed bundle"
        );
        Ok(Self { path, bundle })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a bundle as pretty JSON, e.g. to start a custom seed file
    pub fn write(bundle: &SeedBundle, path: impl AsRef<Path>) -> DashboardResult<()> {
        let json = serde_json::to_string_pretty(bundle)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl DataProvider for JsonSeedProvider {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.bundle.restaurants()
    }

    fn anomalies(&self) -> Vec<Anomaly> {
        self.bundle.anomalies()
    }

    fn analytics(&self) -> AnalyticsDataset {
        self.bundle.analytics()
    }

    fn activity(&self) -> Vec<ActivityEntry> {
        self.bundle.activity()
    }

    fn system_health(&self) -> SystemHealth {
        self.bundle.system_health()
    }

    fn bundle(&self) -> SeedBundle {
        self.bundle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SeedProvider;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");

        let bundle = SeedProvider.bundle();
        JsonSeedProvider::write(&bundle, &path).unwrap();

        let provider = JsonSeedProvider::load(&path).unwrap();
        assert_eq!(provider.path(), path.as_path());
        assert_eq!(provider.restaurants(), bundle.restaurants);
        assert_eq!(provider.anomalies()[0].detail.recommendations.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = JsonSeedProvider::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(DashboardError::Seed { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonSeedProvider::load(&path),
            Err(DashboardError::Seed { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");

        let mut bundle = SeedProvider.bundle();
        let mut copy = bundle.restaurants[0].clone();
        copy.name = "Second Door".to_string();
        bundle.restaurants.push(copy);
        JsonSeedProvider::write(&bundle, &path).unwrap();

        match JsonSeedProvider::load(&path) {
            Err(DashboardError::Seed { error, .. }) => {
                assert_eq!(error, format!("duplicate restaurant id {}", bundle.restaurants[0].id));
            }
            other => panic!("expected seed error, got {:?}", other),
        }

        let mut bundle = SeedProvider.bundle();
        bundle.anomalies.push(bundle.anomalies[0].clone());
        JsonSeedProvider::write(&bundle, &path).unwrap();

        match JsonSeedProvider::load(&path) {
            Err(DashboardError::Seed { error, .. }) => {
                assert!(error.starts_with("duplicate anomaly id"));
            }
            other => panic!("expected seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_restaurants_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"{"restaurants": [{"id": 9, "name": "Blue Door", "city": "Boston",
                "cuisine": "Seafood", "partner": "Standard Partner", "status": "pending",
                "revenue": 1000, "rating": 4.0, "orders": 12}]}"#,
        )
        .unwrap();

        let provider = JsonSeedProvider::load(&path).unwrap();
        let restaurants = provider.restaurants();
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].id, 9);
        assert!(provider.anomalies().is_empty());
    }
}
