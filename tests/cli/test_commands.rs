//! Tests for top-level CLI dispatch, stats, show-config and output helpers

use crate::common::write_corpus;
use clap::Parser;
use lineseek::cli::output::truncate_line;
use lineseek::cli::{run, Cli};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (temp, path)
}

#[test]
fn test_run_show_config_with_explicit_file() {
    let (_temp, config) = write_config("[search]\ndefault_k = 3\n");
    let cli =
        Cli::try_parse_from(["lineseek", "--config", config.as_str(), "show-config"]).unwrap();

    assert!(run(cli).is_ok());
}

#[test]
fn test_run_rejects_invalid_config() {
    let (_temp, config) = write_config("[search]\ndefault_k = 0\n");
    let cli =
        Cli::try_parse_from(["lineseek", "--config", config.as_str(), "show-config"]).unwrap();

    assert!(run(cli).is_err());
}

#[test]
fn test_run_stats_json() {
    let (_temp, config) = write_config("");
    let (_corpus_temp, corpus) = write_corpus("one two\n\n123\n");
    let cli = Cli::try_parse_from([
        "lineseek",
        "--config",
        config.as_str(),
        "--format",
        "json",
        "stats",
        corpus.to_str().unwrap(),
    ])
    .unwrap();

    assert!(run(cli).is_ok());
}

#[test]
fn test_run_search_missing_file() {
    let (_temp, config) = write_config("");
    let cli = Cli::try_parse_from([
        "lineseek",
        "--config",
        config.as_str(),
        "search",
        "/definitely/not/here.txt",
        "cat",
    ])
    .unwrap();

    assert!(run(cli).is_err());
}

#[test]
fn test_truncate_line_for_display() {
    let long = "word ".repeat(40);
    let shown = truncate_line(&long, 20);
    assert_eq!(shown.chars().count(), 20);
    assert!(shown.ends_with("..."));
    assert_eq!(truncate_line("short line", 20), "short line");
}
