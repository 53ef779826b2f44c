//! Column labels and table notes

use std::fmt::Display;

use crate::error::MetaError;
use crate::model::{ColumnRef, MetaValue};

use super::store::MetadataStore;
use super::style::Style;

/// Column metadata key holding the label
pub const LABEL_KEY: &str = "label";

/// Table metadata key holding the note
pub const NOTE_KEY: &str = "note";

/// Label of a column, falling back to the column name when none is set
pub fn label<T, C>(table: &T, column: C) -> Result<String, MetaError>
where
    T: MetadataStore + ?Sized,
    C: Into<ColumnRef>,
{
    let name = table.resolve_column(&column.into())?;
    Ok(match table.colmetadata(&name, LABEL_KEY) {
        Some(entry) => entry.value.to_string(),
        None => name,
    })
}

/// Set the label of a column, stored with `Style::Note`
pub fn set_label<T, C>(table: &mut T, column: C, value: impl Display) -> Result<(), MetaError>
where
    T: MetadataStore + ?Sized,
    C: Into<ColumnRef>,
{
    let name = table.resolve_column(&column.into())?;
    table.set_colmetadata(
        &name,
        LABEL_KEY,
        MetaValue::from(value.to_string()),
        Style::Note,
    )
}

/// Labels of all columns, in column order
pub fn labels<T>(table: &T) -> Vec<String>
where
    T: MetadataStore + ?Sized,
{
    table
        .column_names()
        .into_iter()
        .map(|name| match table.colmetadata(name, LABEL_KEY) {
            Some(entry) => entry.value.to_string(),
            None => name.to_string(),
        })
        .collect()
}

/// `(column name, label)` pairs for the columns whose label matches `predicate`
pub fn find_labels<T, F>(table: &T, mut predicate: F) -> Vec<(String, String)>
where
    T: MetadataStore + ?Sized,
    F: FnMut(&str) -> bool,
{
    table
        .column_names()
        .into_iter()
        .zip(labels(table))
        .filter(|(_, label)| predicate(label))
        .map(|(name, label)| (name.to_string(), label))
        .collect()
}

/// Table-level note, if any
pub fn note<T>(table: &T) -> Option<String>
where
    T: MetadataStore + ?Sized,
{
    table.metadata(NOTE_KEY).map(|entry| entry.value.to_string())
}

pub fn set_note<T>(table: &mut T, text: impl Display)
where
    T: MetadataStore + ?Sized,
{
    table.set_metadata(NOTE_KEY, MetaValue::from(text.to_string()), Style::Note);
}
