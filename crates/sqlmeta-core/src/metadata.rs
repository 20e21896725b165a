//! Ordered collection of resolved columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;
use crate::error::{MetadataError, Result};

/// Column metadata of a query, keyed by alias in SELECT-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnsMetadata {
    columns: IndexMap<String, ColumnDefinition>,
}

impl ColumnsMetadata {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the column with the given alias.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnexistentColumn`] if no column has this alias.
    pub fn get_column(&self, alias: &str) -> Result<&ColumnDefinition> {
        self.columns
            .get(alias)
            .ok_or_else(|| MetadataError::UnexistentColumn(alias.to_string()))
    }

    /// Returns the column with the given alias, if any.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&ColumnDefinition> {
        self.columns.get(alias)
    }

    /// Returns whether a column has this alias.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.columns.contains_key(alias)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over `(alias, column)` pairs in SELECT-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDefinition)> {
        self.columns.iter().map(|(alias, col)| (alias.as_str(), col))
    }

    /// Iterates over aliases in SELECT-list order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterates over columns in SELECT-list order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.values()
    }

    /// Stores a column under an alias, keeping the position of an
    /// existing entry.
    pub(crate) fn insert(&mut self, alias: String, column: ColumnDefinition) {
        self.columns.insert(alias, column);
    }
}

impl<'a> IntoIterator for &'a ColumnsMetadata {
    type Item = &'a ColumnDefinition;
    type IntoIter = indexmap::map::Values<'a, String, ColumnDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.values()
    }
}
