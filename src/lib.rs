//! tablemeta - column labels and TOML round-tripping of table metadata
//!
//! Metadata lives at two scopes, the whole table and individual columns,
//! behind the [`MetadataStore`] trait. On top of it this crate provides
//! column labels that fall back to the column name, and a TOML codec that
//! serializes every entry and restores it onto another table.

pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::MetaError;
pub use metadata::{label, meta_to_toml, set_label, toml_to_meta, MetaEntry, MetadataStore, Style};
pub use model::{ColumnRef, MetaValue, Table};
