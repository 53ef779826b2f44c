//! Configuration handling for the tablemeta command

use std::path::PathBuf;

use crate::metadata::MetadataStore;
use crate::model::ColumnRef;

/// What the command prints once metadata is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `name<TAB>label` line per column
    #[default]
    Labels,
    /// The metadata document
    Toml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "labels" => Ok(OutputFormat::Labels),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// A `COLUMN=LABEL` override as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOverride {
    /// Position or name, resolved once the table's columns are known
    pub column: String,
    pub label: String,
}

impl LabelOverride {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
        }
    }

    /// Column reference for this override against `table`'s columns
    pub fn column_ref<T>(&self, table: &T) -> ColumnRef
    where
        T: MetadataStore + ?Sized,
    {
        ColumnRef::parse_for(&self.column, &table.column_names())
    }
}

impl std::str::FromStr for LabelOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, label) = s
            .split_once('=')
            .ok_or_else(|| format!("expected COLUMN=LABEL, got '{}'", s))?;
        if column.is_empty() {
            return Err(format!("missing column in '{}'", s));
        }
        Ok(Self::new(column, label))
    }
}

/// Configuration for a tablemeta run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Delimited data file whose header defines the columns
    pub input: PathBuf,
    /// Metadata document applied before any override
    pub meta_file: Option<PathBuf>,
    /// Label overrides, applied in order
    pub labels: Vec<LabelOverride>,
    /// Table-level note
    pub note: Option<String>,
    /// Output format
    pub output_format: OutputFormat,
    /// Write output here instead of stdout
    pub output: Option<PathBuf>,
}

impl Config {
    /// Create a new Config for an input file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    pub fn with_meta_file(mut self, path: Option<PathBuf>) -> Self {
        self.meta_file = path;
        self
    }

    /// Set label overrides
    pub fn with_labels(mut self, labels: Vec<LabelOverride>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }
}
