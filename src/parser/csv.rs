//! CSV/TSV header reader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Column, Table};

use super::Parser;

/// Parser for delimited text files; only the header row is read
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    /// Comma-separated (`.csv`, `.txt`)
    pub fn comma() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab-separated (`.tsv`)
    pub fn tab() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Parser for CsvParser {
    fn parse(&self, path: &Path) -> Result<Table> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(BufReader::new(file));

        let columns: Vec<Column> = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        Ok(Table::new(columns))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.delimiter {
            b'\t' => ext.eq_ignore_ascii_case("tsv"),
            _ => matches!(ext.to_lowercase().as_str(), "csv" | "txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::metadata::{label, MetadataStore};

    fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_header() {
        let file = temp_file(".csv", "ctry,gdp\nFR,2.9\nIT\n");
        let table = CsvParser::comma().parse(file.path()).unwrap();

        assert_eq!(table.column_names(), vec!["ctry", "gdp"]);
        assert_eq!(table.column("gdp").map(|c| c.index), Some(1));
        assert_eq!(label(&table, "gdp").unwrap(), "gdp");
    }

    #[test]
    fn test_parse_header_only_file() {
        let file = temp_file(".csv", "ctry,\"gdp, per capita\"\n");
        let table = CsvParser::comma().parse(file.path()).unwrap();

        assert_eq!(table.column_names(), vec!["ctry", "gdp, per capita"]);
    }

    #[test]
    fn test_parse_tsv() {
        let file = temp_file(".tsv", "ctry\tgdp per capita\nFR\t44000\n");

        let table = CsvParser::tab().parse(file.path()).unwrap();
        assert_eq!(table.column_names(), vec!["ctry", "gdp per capita"]);

        // Tabs are not separators for the comma parser
        let table = CsvParser::comma().parse(file.path()).unwrap();
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = CsvParser::comma()
            .parse(Path::new("/nonexistent/gdp.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
