//! Capability interface over a table's metadata

use crate::error::MetaError;
use crate::model::{ColumnRef, MetaValue};

use super::style::{MetaEntry, Style};

/// A table with ordered, named columns and key-value metadata at two scopes.
///
/// Column-scope methods take canonical column names; use
/// [`MetadataStore::resolve_column`] to turn a [`ColumnRef`] into one.
pub trait MetadataStore {
    /// Column names in table order
    fn column_names(&self) -> Vec<&str>;

    /// Table-level keys, in the store's own iteration order
    fn metadata_keys(&self) -> Vec<String>;

    fn metadata(&self, key: &str) -> Option<&MetaEntry>;

    /// Insert or overwrite a table-level entry
    fn set_metadata(&mut self, key: &str, value: MetaValue, style: Style);

    /// Remove every table-level entry
    fn clear_metadata(&mut self);

    /// Names of the columns holding at least one entry
    fn colmetadata_columns(&self) -> Vec<String>;

    /// Keys stored for one column
    fn colmetadata_keys(&self, column: &str) -> Vec<String>;

    fn colmetadata(&self, column: &str, key: &str) -> Option<&MetaEntry>;

    /// Insert or overwrite a column-level entry; errors when the column does
    /// not exist or the store refuses the entry
    fn set_colmetadata(
        &mut self,
        column: &str,
        key: &str,
        value: MetaValue,
        style: Style,
    ) -> Result<(), MetaError>;

    /// Remove every column-level entry of every column
    fn clear_colmetadata(&mut self);

    /// Resolve a position or name to the canonical column name
    fn resolve_column(&self, column: &ColumnRef) -> Result<String, MetaError> {
        column
            .resolve(&self.column_names())
            .map(str::to_string)
            .ok_or_else(|| MetaError::ColumnNotFound(column.clone()))
    }
}
