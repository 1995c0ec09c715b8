//! Non-ASCII input handling
//!
//! Only ASCII letters form words; everything else (accented letters,
//! emoji, CJK) separates them. Results must still be intact slices.

use lineseek::SearchEngine;

const CAFE: &str = "caf\u{e9} au lait \u{2615}\nna\u{ef}ve caf\u{e9}\nplain tea";

#[test]
fn test_non_ascii_letters_split_words() {
    let engine = SearchEngine::from_text(CAFE);

    // "café" tokenizes to "caf" in both the query and the lines
    let results = engine.search("caf\u{e9}", 10);
    assert_eq!(results, vec!["caf\u{e9} au lait \u{2615}", "na\u{ef}ve caf\u{e9}"]);
    assert_eq!(engine.search("caf", 10), results);
}

#[test]
fn test_ascii_query_over_mixed_text() {
    let engine = SearchEngine::from_text(CAFE);
    assert_eq!(engine.search("tea", 10), vec!["plain tea"]);
}

#[test]
fn test_emoji_only_lines_have_no_words() {
    let engine =
        SearchEngine::from_text("\u{1f600}\u{1f680}\nrocket launch\nrocket fuel\nlaunch pad");

    // The emoji line has TF = 1 and takes the full IDF of "fuel"
    assert_eq!(
        engine.search("fuel", 10),
        vec!["\u{1f600}\u{1f680}", "rocket fuel"]
    );
}

#[test]
fn test_cjk_text_is_not_searchable() {
    let engine = SearchEngine::from_text("\u{4f60}\u{597d}\u{4e16}\u{754c}\nhello world");
    assert!(engine.search("\u{4f60}\u{597d}", 10).is_empty());

    // The CJK line has no words, so it ranks ahead of the partial match
    assert_eq!(
        engine.search("hello", 10),
        vec!["\u{4f60}\u{597d}\u{4e16}\u{754c}", "hello world"]
    );
}
