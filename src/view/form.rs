//! Form and dialog controllers
//!
//! `FormController` owns the transient edit buffer behind the add/edit
//! dialog of any [`Editable`] entity. The buffer is a plain string map keyed
//! by schema field; nothing reaches the store until `save`.
//!
//! Required fields are reported by `missing_required` but do not block a
//! save unless enforcement is switched on (`forms.enforce_required`).

use crate::error::{DashboardError, DashboardResult};
use crate::store::{find_field, Editable, EntityStore, FieldSpec, Patch};

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was added with this id
    Created(u32),
    /// The edited record was updated
    Updated(u32),
    /// The edited record no longer exists; nothing changed
    Gone(u32),
    /// Enforcement is on and these required fields are empty; dialog stays open
    Blocked(Vec<&'static str>),
    /// No dialog was open
    NotOpen,
}

/// Edit buffer for one entity type
#[derive(Debug, Clone)]
pub struct FormController<T: Editable> {
    open: bool,
    editing: Option<u32>,
    buffer: Patch,
    enforce_required: bool,
    _entity: std::marker::PhantomData<T>,
}

impl<T: Editable> Default for FormController<T> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            buffer: Patch::new(),
            enforce_required: false,
            _entity: std::marker::PhantomData,
        }
    }
}

impl<T: Editable> FormController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: block saves while required fields are empty
    pub fn enforce_required(mut self, enforce: bool) -> Self {
        self.enforce_required = enforce;
        self
    }

    pub fn set_enforce_required(&mut self, enforce: bool) {
        self.enforce_required = enforce;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the record being edited, `None` when creating
    pub fn editing_id(&self) -> Option<u32> {
        self.editing
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        T::schema()
    }

    /// Reset the buffer to schema defaults and open
    pub fn open_for_create(&mut self) {
        self.buffer = T::schema()
            .iter()
            .map(|field| (field.key, field.default))
            .collect();
        self.editing = None;
        self.open = true;
    }

    /// Copy a record's fields into the buffer and open
    pub fn open_for_edit(&mut self, entity: &T) {
        self.buffer = T::schema()
            .iter()
            .map(|field| (field.key, entity.read_field(field.key).unwrap_or_default()))
            .collect();
        self.editing = Some(*entity.id());
        self.open = true;
    }

    pub fn update_field(&mut self, key: &str, value: impl Into<String>) -> DashboardResult<()> {
        let field = find_field(T::schema(), key).ok_or_else(|| DashboardError::UnknownField {
            entity: T::KIND,
            field: key.to_string(),
        })?;
        self.buffer.insert(field.key, value);
        Ok(())
    }

    pub fn value(&self, key: &str) -> &str {
        self.buffer.get(key).unwrap_or("")
    }

    /// Buffer contents in schema order
    pub fn values(&self) -> Vec<(&'static FieldSpec, String)> {
        T::schema()
            .iter()
            .map(|field| (field, self.value(field.key).to_string()))
            .collect()
    }

    /// Required fields whose buffer value is blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        T::schema()
            .iter()
            .filter(|field| field.required && self.value(field.key).trim().is_empty())
            .map(|field| field.key)
            .collect()
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(_) => format!("Edit {}", T::LABEL),
            None => format!("Add New {}", T::LABEL),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.editing {
            Some(_) => "Update",
            None => "Add",
        }
    }

    /// Commit the buffer to the store and close
    ///
    /// A field that fails to parse leaves the store untouched and the dialog
    /// open.
    pub fn save(&mut self, store: &mut EntityStore<T>) -> DashboardResult<SaveOutcome> {
        if !self.open {
            return Ok(SaveOutcome::NotOpen);
        }

        let missing = self.missing_required();
        if !missing.is_empty() {
            if self.enforce_required {
                return Ok(SaveOutcome::Blocked(missing));
            }
            tracing::warn!(kind = T::KIND, ?missing, "saving with empty required fields");
        }

        let outcome = match self.editing {
            Some(id) => {
                if store.update(id, &self.buffer)? {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Gone(id)
                }
            }
            None => SaveOutcome::Created(*store.add(&self.buffer)?.id()),
        };

        self.close();
        Ok(outcome)
    }

    /// Close without committing
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.editing = None;
        self.buffer = Patch::new();
    }
}

/// Open/closed state of a read-only details dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState<Id> {
    selected: Option<Id>,
}

impl<Id> Default for DialogState<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: PartialEq> DialogState<Id> {
    pub fn open(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    /// Close if showing `id`, used after the record is removed
    pub fn close_if(&mut self, id: &Id) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
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
    fn test_open_for_create_uses_defaults() {
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_create();

        assert!(form.is_open());
        assert_eq!(form.editing_id(), None);
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("status"), "active");
        assert_eq!(form.title(), "Add New Restaurant");
        assert_eq!(form.submit_label(), "Add");
        assert_eq!(form.missing_required(), vec!["name", "city", "cuisine", "partner"]);
    }

    #[test]
    fn test_create_then_save() {
        let mut store = seeded();
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_create();
        form.update_field("name", "Nori House").unwrap();
        form.update_field("city", "Seattle").unwrap();
        form.update_field("cuisine", "Japanese").unwrap();
        form.update_field("partner", "Standard Partner").unwrap();

        let outcome = form.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Created(6));
        assert!(!form.is_open());

        let created = store.get(&6).unwrap();
        assert_eq!(created.name, "Nori House");
        assert_eq!(created.status, RestaurantStatus::Active);
        assert_eq!(created.revenue, 0);
    }

    #[test]
    fn test_edit_copies_fields_and_updates() {
        let mut store = seeded();
        let before = store.get(&2).unwrap().clone();

        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_edit(&before);
        assert_eq!(form.editing_id(), Some(2));
        assert_eq!(form.value("name"), before.name);
        assert_eq!(form.title(), "Edit Restaurant");
        assert_eq!(form.submit_label(), "Update");

        form.update_field("status", "inactive").unwrap();
        assert_eq!(form.save(&mut store).unwrap(), SaveOutcome::Updated(2));

        let updated = store.get(&2).unwrap();
        assert_eq!(updated.status, RestaurantStatus::Inactive);
        assert_eq!(updated.revenue, before.revenue);
        assert_eq!(updated.menu, before.menu);
    }

    #[test]
    fn test_cancel_discards() {
        let mut store = seeded();
        let before = store.clone();

        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_edit(store.get(&1).unwrap());
        form.update_field("city", "Boston").unwrap();
        form.cancel();

        assert!(!form.is_open());
        assert_eq!(form.save(&mut store).unwrap(), SaveOutcome::NotOpen);
        assert_eq!(store, before);
    }

    #[test]
    fn test_permissive_save_with_missing_fields() {
        let mut store = seeded();
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_create();

        assert_eq!(form.save(&mut store).unwrap(), SaveOutcome::Created(6));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_enforced_save_blocks() {
        let mut store = seeded();
        let mut form: FormController<Restaurant> = FormController::new().enforce_required(true);
        form.open_for_create();
        form.update_field("name", "Nori House").unwrap();

        let outcome = form.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Blocked(vec!["city", "cuisine", "partner"]));
        assert!(form.is_open());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_edit_of_removed_record() {
        let mut store = seeded();
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_edit(store.get(&4).unwrap());
        store.remove(&4);

        assert_eq!(form.save(&mut store).unwrap(), SaveOutcome::Gone(4));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_invalid_value_keeps_dialog_open() {
        let mut store = seeded();
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_edit(store.get(&1).unwrap());
        form.update_field("status", "closed").unwrap();

        assert!(form.save(&mut store).is_err());
        assert!(form.is_open());
        assert_eq!(store.get(&1).unwrap().status, RestaurantStatus::Active);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_create();
        assert!(form.update_field("revenue", "100").is_err());
    }

    #[test]
    fn test_dialog_state() {
        let mut dialog: DialogState<u32> = DialogState::default();
        assert!(!dialog.is_open());

        dialog.open(3);
        assert_eq!(dialog.selected(), Some(&3));

        dialog.close_if(&2);
        assert!(dialog.is_open());
        dialog.close_if(&3);
        assert!(!dialog.is_open());
    }
}
