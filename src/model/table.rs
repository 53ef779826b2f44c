//! Table with named columns and two-scope metadata

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::MetaError;
use crate::metadata::{MetaEntry, MetadataStore, Style};

use super::column_ref::ColumnRef;
use super::schema::Column;
use super::value::MetaValue;

/// A table with named columns and metadata at table and column scope
#[derive(Debug, Default)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Column name to first position with that name
    name_index: FxHashMap<String, usize>,
    /// Table-level entries in insertion order
    metadata: IndexMap<String, MetaEntry>,
    /// Column name -> key -> entry
    colmetadata: IndexMap<String, IndexMap<String, MetaEntry>>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        let mut name_index = FxHashMap::default();
        for (idx, column) in columns.iter().enumerate() {
            name_index.entry(column.name.clone()).or_insert(idx);
        }

        Self {
            columns,
            name_index,
            ..Default::default()
        }
    }

    /// Create an empty table from column names
    pub fn with_column_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();
        Self::new(columns)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl MetadataStore for Table {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    fn metadata_keys(&self) -> Vec<String> {
        self.metadata.keys().cloned().collect()
    }

    fn metadata(&self, key: &str) -> Option<&MetaEntry> {
        self.metadata.get(key)
    }

    fn set_metadata(&mut self, key: &str, value: MetaValue, style: Style) {
        self.metadata
            .insert(key.to_string(), MetaEntry::new(value, style));
    }

    fn clear_metadata(&mut self) {
        self.metadata.clear();
    }

    fn colmetadata_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| {
                self.colmetadata
                    .get(&c.name)
                    .is_some_and(|entries| !entries.is_empty())
            })
            .map(|c| c.name.clone())
            .collect()
    }

    fn colmetadata_keys(&self, column: &str) -> Vec<String> {
        self.colmetadata
            .get(column)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn colmetadata(&self, column: &str, key: &str) -> Option<&MetaEntry> {
        self.colmetadata.get(column)?.get(key)
    }

    fn set_colmetadata(
        &mut self,
        column: &str,
        key: &str,
        value: MetaValue,
        style: Style,
    ) -> Result<(), MetaError> {
        if !self.name_index.contains_key(column) {
            return Err(MetaError::ColumnNotFound(ColumnRef::from(column)));
        }

        self.colmetadata
            .entry(column.to_string())
            .or_default()
            .insert(key.to_string(), MetaEntry::new(value, style));
        Ok(())
    }

    fn clear_colmetadata(&mut self) {
        self.colmetadata.clear();
    }
}
