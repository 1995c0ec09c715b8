//! Tests for the interactive CLI command

use crate::common::{create_test_services, write_corpus, FRUIT};
use lineseek::cli::commands::interactive::{execute_with_io, InteractiveArgs};
use lineseek::cli::OutputFormat;
use lineseek::{Config, SearchResponse, Services};
use std::io::Cursor;
use std::sync::Arc;

fn args(file: &str) -> InteractiveArgs {
    InteractiveArgs {
        file: file.to_string(),
        limit: Some(5),
    }
}

#[test]
fn test_interactive_answers_each_line() {
    let services = create_test_services();
    let (_temp, path) = write_corpus(FRUIT);
    let input = Cursor::new("banana\nBANANA\r\n\napple\n");

    let mut out = Vec::new();
    let answered = execute_with_io(
        args(path.to_str().unwrap()),
        &services,
        OutputFormat::Json,
        input,
        &mut out,
        false,
    )
    .unwrap();

    assert_eq!(answered, 4);

    let responses: Vec<SearchResponse> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0].results[0].text, "apple banana");
    assert_eq!(responses[1].results, responses[0].results);
    // empty query and a term present in every line match nothing
    assert_eq!(responses[2].count, 0);
    assert_eq!(responses[3].count, 0);
}

#[test]
fn test_interactive_skips_invalid_queries() {
    let mut config = Config::default();
    config.search.max_query_length = 6;
    let services = Arc::new(Services::new(config));
    let (_temp, path) = write_corpus(FRUIT);
    let input = Cursor::new("banana\nbanana banana\n");

    let mut out = Vec::new();
    let answered = execute_with_io(
        args(path.to_str().unwrap()),
        &services,
        OutputFormat::Json,
        input,
        &mut out,
        false,
    )
    .unwrap();

    assert_eq!(answered, 1);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_interactive_missing_file() {
    let services = create_test_services();
    let (temp, _path) = write_corpus(FRUIT);
    let missing = temp.path().join("missing.txt");

    let mut out = Vec::new();
    let result = execute_with_io(
        args(missing.to_str().unwrap()),
        &services,
        OutputFormat::Human,
        Cursor::new("banana\n"),
        &mut out,
        false,
    );

    assert!(result.is_err());
}
