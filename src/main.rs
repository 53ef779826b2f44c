//! tablemeta - column labels and metadata documents for tabular data

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tablemeta::config::{Config, LabelOverride, OutputFormat};
use tablemeta::metadata::{set_label, set_note, toml_to_meta};
use tablemeta::output::{render, write_output};
use tablemeta::parser::ParserFactory;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Labels,
    Toml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Labels => OutputFormat::Labels,
            CliOutputFormat::Toml => OutputFormat::Toml,
        }
    }
}

/// Show column labels of a tabular file and convert its metadata to and from TOML
#[derive(Parser, Debug)]
#[command(name = "tablemeta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file whose header defines the columns (.csv, .tsv, .txt)
    file: PathBuf,

    /// Metadata document to apply, replacing all existing metadata
    #[arg(short, long)]
    meta: Option<PathBuf>,

    /// Label override as COLUMN=LABEL; COLUMN is a 1-based position or a name
    #[arg(short, long)]
    label: Vec<LabelOverride>,

    /// Table-level note
    #[arg(long)]
    note: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "labels")]
    format: CliOutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.file)
        .with_meta_file(cli.meta)
        .with_labels(cli.label)
        .with_note(cli.note)
        .with_output_format(cli.format.into())
        .with_output(cli.output);

    let factory = ParserFactory::new();
    let mut table = factory
        .parse(&config.input)
        .with_context(|| format!("Failed to parse file: {}", config.input.display()))?;

    if let Some(ref meta_file) = config.meta_file {
        let text = fs::read_to_string(meta_file)
            .with_context(|| format!("Failed to read metadata: {}", meta_file.display()))?;
        toml_to_meta(&text, &mut table)
            .with_context(|| format!("Failed to apply metadata: {}", meta_file.display()))?;
    }

    for over in &config.labels {
        let column = over.column_ref(&table);
        set_label(&mut table, column, &over.label)?;
    }

    if let Some(ref note) = config.note {
        set_note(&mut table, note);
    }

    let text = render(&table, config.output_format)?;
    write_output(&text, config.output.as_deref())
}
