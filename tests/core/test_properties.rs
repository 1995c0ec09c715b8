//! Ranking properties over generated corpora

use crate::common::score_of;
use lineseek::{SearchEngine, SCORE_EPSILON};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "cat", "Cat", "CAT", "dog", "Dog", "bird", "fish", "cats", "42", "!!", "a-b",
];

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..6).prop_map(|w| w.join(" "))
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..10).prop_map(|lines| lines.join("\n"))
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..4).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_search_is_deterministic(text in text_strategy(), query in query_strategy(), k in 1usize..12) {
        let engine = SearchEngine::from_text(&text);
        prop_assert_eq!(engine.search(&query, k), engine.search(&query, k));
    }

    #[test]
    fn prop_rebuild_is_idempotent(text in text_strategy(), query in query_strategy(), k in 1usize..12) {
        let mut engine = SearchEngine::from_text(&text);
        let before = engine.search(&query, k);
        engine.build_index(&text);
        prop_assert_eq!(before, engine.search(&query, k));
    }

    #[test]
    fn prop_results_are_bounded_and_non_zero(text in text_strategy(), query in query_strategy(), k in 1usize..12) {
        let engine = SearchEngine::from_text(&text);
        let results = engine.search(&query, k);

        let non_zero = engine
            .lines()
            .iter()
            .filter(|line| score_of(&engine, &query, line.text) != 0.0)
            .count();
        prop_assert!(results.len() <= k.min(non_zero));
        prop_assert_eq!(results.len(), k.min(non_zero));

        for line in &results {
            prop_assert!(score_of(&engine, &query, line) != 0.0);
        }
    }

    #[test]
    fn prop_results_are_ranked(text in text_strategy(), query in query_strategy()) {
        let engine = SearchEngine::from_text(&text);
        let results = engine.search_lines(&query, engine.len().max(1));
        let scores: Vec<f64> = results
            .iter()
            .map(|line| score_of(&engine, &query, line.text))
            .collect();

        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                if (scores[i] - scores[j]).abs() <= SCORE_EPSILON {
                    // ties keep document order
                    prop_assert!(results[i].number < results[j].number);
                } else {
                    prop_assert!(scores[i] > scores[j]);
                }
            }
        }
    }

    #[test]
    fn prop_query_case_does_not_matter(text in text_strategy(), query in query_strategy(), k in 1usize..12) {
        let engine = SearchEngine::from_text(&text);
        let expected = engine.search(&query, k);
        prop_assert_eq!(&expected, &engine.search(&query.to_uppercase(), k));
        prop_assert_eq!(&expected, &engine.search(&query.to_lowercase(), k));
    }

    #[test]
    fn prop_lines_never_contain_newlines(text in text_strategy()) {
        let engine = SearchEngine::from_text(&text);
        for line in engine.lines() {
            prop_assert!(!line.text.is_empty());
            prop_assert!(!line.text.contains('\n'));
        }
    }
}
