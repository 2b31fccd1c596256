//! Ordered column selection.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free set of source column names.
///
/// Insertion order is merge order: the first selected column contributes
/// the leftmost token of each derived cell. Selecting a name twice is
/// meaningless and collapses to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    names: IndexSet<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from names, keeping their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a name at the end of the order. Returns false if it was
    /// already selected.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a name, preserving the order of the rest. Returns false if
    /// it was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.shift_remove(name)
    }

    /// Toggle a name: deselect it if present, append it otherwise.
    /// This is checkbox semantics for a column picker.
    pub fn toggle(&mut self, name: &str) {
        if !self.names.shift_remove(name) {
            self.names.insert(name.to_string());
        }
    }

    /// Returns true if the name is selected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of selected columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Iterate the selected names in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
