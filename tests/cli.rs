use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_csv(dir: &Path) -> PathBuf {
    let path = dir.join("gdp.csv");
    fs::write(&path, "ctry,gdp\nFR,2.9\nDE,4.1\n").unwrap();
    path
}

fn tablemeta() -> Command {
    Command::cargo_bin("tablemeta").unwrap()
}

#[test]
fn prints_column_names_without_labels() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path());

    tablemeta()
        .arg(&csv)
        .assert()
        .success()
        .stdout("ctry\tctry\ngdp\tgdp\n");
}

#[test]
fn applies_label_overrides() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path());

    tablemeta()
        .arg(&csv)
        .args(["--label", "ctry=Country", "-l", "2=GDP"])
        .assert()
        .success()
        .stdout("ctry\tCountry\ngdp\tGDP\n");
}

#[test]
fn toml_output_round_trips_through_meta_file() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path());
    let meta = dir.path().join("meta.toml");

    tablemeta()
        .arg(&csv)
        .args(["--label", "ctry=Country", "--note", "GDP per country"])
        .args(["--format", "toml", "--output"])
        .arg(&meta)
        .assert()
        .success()
        .stdout("");

    let text = fs::read_to_string(&meta).unwrap();
    assert!(text.contains("Country"), "{}", text);
    assert!(text.contains("GDP per country"), "{}", text);

    tablemeta()
        .arg(&csv)
        .arg("--meta")
        .arg(&meta)
        .assert()
        .success()
        .stdout("ctry\tCountry\ngdp\tgdp\n");

    tablemeta()
        .arg(&csv)
        .arg("--meta")
        .arg(&meta)
        .args(["--format", "toml"])
        .assert()
        .success()
        .stdout(text);
}

#[test]
fn labels_numeric_headers_by_name() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("years.csv");
    fs::write(&csv, "1999,2024\n1.0,2.0\n").unwrap();

    tablemeta()
        .arg(&csv)
        .args(["--label", "2024=Current", "--label", "1=Previous"])
        .assert()
        .success()
        .stdout("1999\tPrevious\n2024\tCurrent\n");
}

#[test]
fn unknown_column_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path());

    tablemeta()
        .arg(&csv)
        .args(["--label", "pop=Population"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid column"));

    tablemeta()
        .arg(&csv)
        .args(["--label", "0=Nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("#0"));
}

#[test]
fn malformed_meta_file_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path());
    let meta = dir.path().join("meta.toml");
    fs::write(&meta, "[metadata]\n").unwrap();

    tablemeta()
        .arg(&csv)
        .arg("--meta")
        .arg(&meta)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed metadata document"));
}

#[test]
fn unsupported_format_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gdp.parquet");
    fs::write(&path, "PAR1").unwrap();

    tablemeta()
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format"));
}
