//! TOML round-tripping of table- and column-level metadata
//!
//! The document has two top-level tables:
//!
//! ```toml
//! [colmetadata.ctry.label]
//! style = "note"
//! value = "Country"
//!
//! [metadata.title]
//! style = "note"
//! value = "GDP per country"
//! ```
//!
//! Keys are written in sorted order and every value is written as a string,
//! so encoding the same metadata always yields the same text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::model::{ColumnRef, MetaValue};

use super::store::MetadataStore;
use super::style::{MetaEntry, Style};

/// Serialized `{style, value}` record; field order is the sorted key order
#[derive(Debug, Serialize)]
struct EncodedEntry {
    style: String,
    value: String,
}

impl From<&MetaEntry> for EncodedEntry {
    fn from(entry: &MetaEntry) -> Self {
        Self {
            style: entry.style.to_string(),
            value: entry.value.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EncodedDocument {
    colmetadata: BTreeMap<String, BTreeMap<String, EncodedEntry>>,
    metadata: BTreeMap<String, EncodedEntry>,
}

#[derive(Debug, Deserialize)]
struct DecodedEntry {
    value: toml::Value,
    style: String,
}

#[derive(Debug, Deserialize)]
struct DecodedDocument {
    metadata: BTreeMap<String, DecodedEntry>,
    colmetadata: BTreeMap<String, BTreeMap<String, DecodedEntry>>,
}

/// Serialize all metadata of `table` to a TOML document
pub fn meta_to_toml<T>(table: &T) -> Result<String, MetaError>
where
    T: MetadataStore + ?Sized,
{
    let metadata = table
        .metadata_keys()
        .into_iter()
        .filter_map(|key| {
            let entry = table.metadata(&key).map(EncodedEntry::from)?;
            Some((key, entry))
        })
        .collect();

    let mut colmetadata = BTreeMap::new();
    for column in table.colmetadata_columns() {
        let entries: BTreeMap<_, _> = table
            .colmetadata_keys(&column)
            .into_iter()
            .filter_map(|key| {
                let entry = table.colmetadata(&column, &key).map(EncodedEntry::from)?;
                Some((key, entry))
            })
            .collect();
        colmetadata.insert(column, entries);
    }

    let document = EncodedDocument {
        colmetadata,
        metadata,
    };
    toml::to_string(&document)
        .map_err(|e| MetaError::MalformedDocument(format!("failed to encode metadata: {}", e)))
}

/// Entries of both scopes, in the order they are applied to a store
#[derive(Debug, Default)]
struct EntrySet {
    table: Vec<(String, MetaEntry)>,
    columns: Vec<(String, String, MetaEntry)>,
}

impl EntrySet {
    /// Copy every entry currently held by `table`
    fn snapshot<T>(table: &T) -> Self
    where
        T: MetadataStore + ?Sized,
    {
        let mut set = EntrySet::default();
        for key in table.metadata_keys() {
            if let Some(entry) = table.metadata(&key) {
                set.table.push((key.clone(), entry.clone()));
            }
        }
        for column in table.colmetadata_columns() {
            for key in table.colmetadata_keys(&column) {
                if let Some(entry) = table.colmetadata(&column, &key) {
                    set.columns.push((column.clone(), key.clone(), entry.clone()));
                }
            }
        }
        set
    }

    fn apply<T>(self, table: &mut T) -> Result<(), MetaError>
    where
        T: MetadataStore + ?Sized,
    {
        for (key, entry) in self.table {
            table.set_metadata(&key, entry.value, entry.style);
        }
        for (column, key, entry) in self.columns {
            table.set_colmetadata(&column, &key, entry.value, entry.style)?;
        }
        Ok(())
    }
}

/// Replace all metadata of `table` with the contents of a TOML document.
///
/// Existing entries at both scopes are removed before the document's entries
/// are applied, so anything absent from `text` is lost. The document is fully
/// validated, and every column name resolved, before the table is touched. If
/// the store still refuses an entry while repopulating, the previous entries
/// are put back: on error the table keeps its previous metadata.
pub fn toml_to_meta<'t, T>(text: &str, table: &'t mut T) -> Result<&'t mut T, MetaError>
where
    T: MetadataStore + ?Sized,
{
    let document: DecodedDocument =
        toml::from_str(text).map_err(|e| MetaError::MalformedDocument(e.message().to_string()))?;

    let mut incoming = EntrySet::default();
    for (key, entry) in document.metadata {
        let entry = decode_entry(&format!("metadata.{}", key), entry)?;
        incoming.table.push((key, entry));
    }
    for (column, entries) in document.colmetadata {
        let name = table.resolve_column(&ColumnRef::Name(column))?;
        for (key, entry) in entries {
            let entry = decode_entry(&format!("colmetadata.{}.{}", name, key), entry)?;
            incoming.columns.push((name.clone(), key, entry));
        }
    }

    let previous = EntrySet::snapshot(table);
    drop_all_metadata(table);

    if let Err(e) = incoming.apply(table) {
        drop_all_metadata(table);
        // Every restored entry was held by this store a moment ago
        let _ = previous.apply(table);
        return Err(e);
    }

    Ok(table)
}

/// Remove every table-level and column-level entry
pub fn drop_all_metadata<T>(table: &mut T)
where
    T: MetadataStore + ?Sized,
{
    table.clear_metadata();
    table.clear_colmetadata();
}

fn decode_entry(path: &str, entry: DecodedEntry) -> Result<MetaEntry, MetaError> {
    let value = match entry.value {
        toml::Value::String(s) => MetaValue::from(s),
        toml::Value::Integer(i) => MetaValue::Int(i),
        toml::Value::Float(f) => MetaValue::Float(f),
        toml::Value::Boolean(b) => MetaValue::Bool(b),
        toml::Value::Datetime(dt) => MetaValue::from(dt.to_string()),
        other => {
            return Err(MetaError::MalformedDocument(format!(
                "{}: expected a scalar value, found {}",
                path,
                other.type_str()
            )))
        }
    };

    Ok(MetaEntry::new(value, Style::from(entry.style.as_str())))
}
