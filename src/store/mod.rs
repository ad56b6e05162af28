//! In-memory entity store
//!
//! Holds an ordered collection of records and the mutations the dashboard
//! performs on it:
//!
//! - **schema**: field descriptions driving the generic edit dialog
//! - `EntityStore`: list/get/add/update/remove over insertion order
//!
//! Nothing here is persisted; a reload (or a new CLI run) starts again from
//! the data provider's seed.
//!
//! # Example
//!
//! ```rust
//! use dinedash::model::Restaurant;
//! use dinedash::store::{EntityStore, Patch};
//!
//! let mut store: EntityStore<Restaurant> = EntityStore::default();
//! let created = store
//!     .add(&Patch::new().set("name", "Blue Door").set("city", "Boston"))
//!     .unwrap();
//! assert_eq!(created.id, 1);
//!
//! store.update(1, &Patch::new().set("city", "Denver")).unwrap();
//! assert_eq!(store.get(&1).unwrap().city, "Denver");
//! ```

pub mod schema;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DashboardError, DashboardResult};

pub use schema::{find_field, FieldKind, FieldSpec};

/// A record with a stable identity inside its collection
pub trait Entity: Clone {
    type Id: Clone + PartialEq + fmt::Display + fmt::Debug;

    /// Entity name used in logs and errors
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}

/// An entity that can be created and edited through a field schema
pub trait Editable: Entity<Id = u32> {
    /// Display noun for dialog titles, e.g. "Restaurant"
    const LABEL: &'static str;

    /// Editable fields, in form order
    fn schema() -> &'static [FieldSpec];

    /// A fresh record with default fields and zeroed derived metrics
    fn blank() -> Self;

    fn set_id(&mut self, id: u32);

    /// Current value of a schema field as a string
    fn read_field(&self, key: &str) -> Option<String>;

    /// Overwrite a schema field from its string form
    fn write_field(&mut self, key: &str, value: &str) -> DashboardResult<()>;
}

/// A partial set of field values keyed by schema key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    fields: BTreeMap<String, String>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse `key=value` pairs, ignoring malformed items
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Self {
        let mut patch = Self::new();
        for pair in pairs {
            if let Some((k, v)) = pair.split_once('=') {
                patch.insert(k.trim(), v.trim());
            }
        }
        patch
    }

    fn apply_to<T: Editable>(&self, entity: &mut T) -> DashboardResult<()> {
        for (key, value) in self.iter() {
            entity.write_field(key, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Patch {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut patch = Patch::new();
        for (k, v) in iter {
            patch.insert(k, v);
        }
        patch
    }
}

/// First id that appears more than once in `items`
pub fn duplicate_id<T: Entity>(items: &[T]) -> Option<&T::Id> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].iter().any(|seen| seen.id() == item.id()))
        .map(|(_, item)| item.id())
}

/// Ordered in-memory collection of entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Remove a record; absent ids are a no-op
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        tracing::debug!(kind = T::KIND, %id, "removed");
        Some(self.items.remove(pos))
    }

    /// Mutate a record in place; returns false when the id is absent
    pub fn modify(&mut self, id: &T::Id, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}

impl<T: Editable> EntityStore<T> {
    /// Id for the next created record: max existing id + 1, or 1 when empty
    ///
    /// `None` once the id space is exhausted.
    pub fn next_id(&self) -> Option<u32> {
        match self.items.iter().map(|item| *item.id()).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Create a record from a patch over `Editable::blank`
    pub fn add(&mut self, patch: &Patch) -> DashboardResult<T> {
        let id = self.next_id().ok_or_else(|| DashboardError::InvalidValue {
            field: "id".to_string(),
            value: u32::MAX.to_string(),
        })?;
        let mut entity = T::blank();
        patch.apply_to(&mut entity)?;
        entity.set_id(id);
        self.items.push(entity.clone());
        tracing::debug!(kind = T::KIND, id, "added");
        Ok(entity)
    }

    /// Overwrite the patched fields of a record
    ///
    /// Returns `Ok(false)` without touching the collection when the id is
    /// absent. A field that fails to apply leaves the record unchanged.
    pub fn update(&mut self, id: u32, patch: &Patch) -> DashboardResult<bool> {
        let Some(pos) = self.items.iter().position(|item| *item.id() == id) else {
            return Ok(false);
        };

        let mut updated = self.items[pos].clone();
        patch.apply_to(&mut updated)?;
        self.items[pos] = updated;
        tracing::debug!(kind = T::KIND, id, fields = patch.len(), "updated");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Restaurant, RestaurantStatus};
    use crate::provider::{DataProvider, SeedProvider};

    fn seeded() -> EntityStore<Restaurant> {
        EntityStore::new(SeedProvider.restaurants())
    }

    #[test]
    fn test_add_synthesizes_next_id() {
        let mut store = seeded();
        let max = store.list().iter().map(|r| r.id).max().unwrap();

        let created = store
            .add(&Patch::new().set("name", "Nori House").set("city", "Seattle"))
            .unwrap();

        assert_eq!(created.id, max + 1);
        assert_eq!(created.revenue, 0);
        assert_eq!(created.orders, 0);
        assert_eq!(created.rating, 0.0);
        assert_eq!(store.list().last().unwrap().name, "Nori House");
    }

    #[test]
    fn test_add_to_empty_store_yields_id_one() {
        let mut store: EntityStore<Restaurant> = EntityStore::default();
        assert_eq!(store.next_id(), Some(1));

        let created = store.add(&Patch::new().set("name", "First")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_add_when_id_space_exhausted() {
        let mut top = seeded().list()[0].clone();
        top.id = u32::MAX;
        let mut store = EntityStore::new(vec![top]);
        assert_eq!(store.next_id(), None);

        let result = store.add(&Patch::new().set("name", "Overflow"));
        assert!(matches!(
            result,
            Err(DashboardError::InvalidValue { ref field, .. }) if field == "id"
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id() {
        let list = seeded().list().to_vec();
        assert_eq!(duplicate_id(&list), None);

        let mut repeated = list.clone();
        repeated.push(list[2].clone());
        assert_eq!(duplicate_id(&repeated), Some(&list[2].id));
    }

    #[test]
    fn test_add_after_gap_uses_max() {
        let mut store = seeded();
        store.remove(&2);
        let created = store.add(&Patch::new()).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let mut store = seeded();
        let before = store.get(&1).unwrap().clone();

        let changed = store
            .update(1, &Patch::new().set("city", "Boston").set("status", "pending"))
            .unwrap();
        assert!(changed);

        let after = store.get(&1).unwrap();
        assert_eq!(after.city, "Boston");
        assert_eq!(after.status, RestaurantStatus::Pending);

        let mut expected = before;
        expected.city = "Boston".to_string();
        expected.status = RestaurantStatus::Pending;
        assert_eq!(after, &expected);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut store = seeded();
        let before = store.clone();

        let changed = store.update(99, &Patch::new().set("city", "Boston")).unwrap();
        assert!(!changed);
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_invalid_value_leaves_record() {
        let mut store = seeded();
        let before = store.clone();

        let result = store.update(1, &Patch::new().set("city", "Boston").set("status", "closed"));
        assert!(result.is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove() {
        let mut store = seeded();
        let len = store.len();

        assert!(store.remove(&3).is_some());
        assert_eq!(store.len(), len - 1);
        assert!(!store.contains(&3));

        assert!(store.remove(&3).is_none());
        assert_eq!(store.len(), len - 1);
    }

    #[test]
    fn test_patch_from_pairs() {
        let patch = Patch::from_pairs(["name = Blue Door", "city=Boston", "junk"]);
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get("name"), Some("Blue Door"));
        assert_eq!(patch.get("city"), Some("Boston"));
    }
}
