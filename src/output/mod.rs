//! Output formatting for a table's labels and metadata

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::metadata::{labels, meta_to_toml, MetadataStore};

/// Render the table's metadata in the requested format
pub fn render<T>(table: &T, format: OutputFormat) -> Result<String>
where
    T: MetadataStore + ?Sized,
{
    match format {
        OutputFormat::Labels => Ok(render_labels(table)),
        OutputFormat::Toml => Ok(meta_to_toml(table)?),
    }
}

/// One `name<TAB>label` line per column
fn render_labels<T>(table: &T) -> String
where
    T: MetadataStore + ?Sized,
{
    let mut out = String::new();
    for (name, label) in table.column_names().into_iter().zip(labels(table)) {
        out.push_str(name);
        out.push('\t');
        out.push_str(&label);
        out.push('\n');
    }
    out
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::set_label;
    use crate::model::Table;

    #[test]
    fn test_render_labels() {
        let mut table = Table::with_column_names(["ctry", "gdp"]);
        set_label(&mut table, "gdp", "GDP").unwrap();

        assert_eq!(
            render(&table, OutputFormat::Labels).unwrap(),
            "ctry\tctry\ngdp\tGDP\n"
        );
    }

    #[test]
    fn test_render_toml_matches_codec() {
        let mut table = Table::with_column_names(["ctry"]);
        set_label(&mut table, "ctry", "Country").unwrap();

        assert_eq!(
            render(&table, OutputFormat::Toml).unwrap(),
            meta_to_toml(&table).unwrap()
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");

        write_output("[metadata]\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[metadata]\n");
    }
}
