//! TF-IDF term statistics.
//!
//! Statistics are computed by rescanning document text on every call; there
//! is no precomputed frequency table.

use super::tokenizer::{same_word, words};

/// Fraction of the tokens in `document` that match `word`.
///
/// A document without any tokens yields `1.0` for every word, so it can
/// still score whenever the word's IDF is non-zero.
pub fn term_frequency(word: &str, document: &str) -> f64 {
    let mut matches = 0usize;
    let mut total = 0usize;

    for token in words(document) {
        if same_word(token, word) {
            matches += 1;
        }
        total += 1;
    }

    if total == 0 {
        return 1.0;
    }
    matches as f64 / total as f64
}

/// Natural log of (document count / documents containing `word`).
///
/// Returns `0.0` when no document contains the word.
pub fn inverse_document_frequency<'d, I>(word: &str, documents: I) -> f64
where
    I: IntoIterator<Item = &'d str>,
{
    let mut total = 0usize;
    let mut containing = 0usize;

    for document in documents {
        total += 1;
        if words(document).any(|token| same_word(token, word)) {
            containing += 1;
        }
    }

    if containing == 0 {
        return 0.0;
    }
    (total as f64 / containing as f64).ln()
}

/// A query term paired with its IDF over the current document set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm<'q> {
    pub term: &'q str,
    pub idf: f64,
}

/// Sum of TF x IDF over the weighted query terms.
pub fn tfidf_score(terms: &[WeightedTerm<'_>], document: &str) -> f64 {
    terms
        .iter()
        .map(|t| term_frequency(t.term, document) * t.idf)
        .sum()
}
