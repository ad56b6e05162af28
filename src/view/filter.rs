//! Field filters
//!
//! A filter is a set of per-field selections. Each selection is either
//! `"all"` (no constraint) or a value the field must equal. Applying a filter
//! never reorders: the result keeps insertion order.

use std::fmt;

/// Selection key meaning "no constraint"
pub const ALL: &str = "all";

/// Records exposing named string fields to filters
pub trait Filterable {
    /// String form of a field, `None` if the record has no such field
    fn filter_value(&self, field: &str) -> Option<String>;
}

/// A single field selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Is(String),
}

impl Choice {
    /// Parse a selection; empty input and `"all"` (any case) mean no constraint
    pub fn parse(selection: &str) -> Self {
        let trimmed = selection.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Choice::All
        } else {
            Choice::Is(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Is(value) => value,
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Is(expected) => value == Some(expected.as_str()),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunction of field selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    selections: Vec<(String, Choice)>,
}

impl FieldFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: constrain a field
    pub fn field(mut self, key: impl Into<String>, selection: &str) -> Self {
        self.set(key, selection);
        self
    }

    /// Replace the selection for a field
    pub fn set(&mut self, key: impl Into<String>, selection: &str) {
        let key = key.into();
        let choice = Choice::parse(selection);
        match self.selections.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = choice,
            None => self.selections.push((key, choice)),
        }
    }

    /// Current selection for a field, `"all"` when unset
    pub fn selection(&self, key: &str) -> &str {
        self.selections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c.as_str())
            .unwrap_or(ALL)
    }

    pub fn choice(&self, key: &str) -> Choice {
        self.selections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c.clone())
            .unwrap_or_default()
    }

    /// True when every selection is `"all"`
    pub fn is_unconstrained(&self) -> bool {
        self.selections.iter().all(|(_, c)| c.is_all())
    }

    /// Reset every selection to `"all"`
    pub fn clear(&mut self) {
        for (_, choice) in &mut self.selections {
            *choice = Choice::All;
        }
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.selections.iter().all(|(key, choice)| {
            choice.is_all() || choice.matches(item.filter_value(key).as_deref())
        })
    }

    /// Matching records, insertion order preserved
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Distinct values of a field in first-seen order
pub fn distinct_values<T: Filterable>(items: &[T], field: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in items.iter().filter_map(|item| item.filter_value(field)) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

/// Select options for a filter: `"all"` followed by the given values
pub fn with_all<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(ALL.to_string())
        .chain(values.into_iter().map(Into::into))
        .collect()
}
