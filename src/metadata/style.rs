//! Metadata entries and their style tags

use std::fmt;

use crate::model::MetaValue;

/// Provenance marker attached to every metadata entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Structural or derived metadata
    #[default]
    Default,
    /// Free-form annotation written by a user
    Note,
    Other(String),
}

impl Style {
    pub fn as_str(&self) -> &str {
        match self {
            Style::Default => "default",
            Style::Note => "note",
            Style::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        match s {
            "default" => Style::Default,
            "note" => Style::Note,
            other => Style::Other(other.to_string()),
        }
    }
}

/// A metadata value together with its style
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry {
    pub value: MetaValue,
    pub style: Style,
}

impl MetaEntry {
    pub fn new(value: MetaValue, style: Style) -> Self {
        Self { value, style }
    }
}
