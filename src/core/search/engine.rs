//! In-memory TF-IDF line search engine.
//!
//! The engine borrows its documents from a caller-owned text buffer: each
//! non-empty line of the indexed text is one document. Nothing is copied, so
//! results are slices of the original buffer and the buffer must outlive the
//! engine (enforced by the `'t` lifetime).

use super::tfidf::{inverse_document_frequency, tfidf_score, WeightedTerm};
use super::tokenizer::{unique_words, words};
use serde::Serialize;

/// Scores closer than this are treated as equal when ranking.
pub const SCORE_EPSILON: f64 = 1e-9;

/// One indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line<'t> {
    /// 1-based line number in the indexed text
    pub number: usize,

    /// Line content, without the trailing newline
    pub text: &'t str,
}

/// Line-oriented TF-IDF search engine
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<'t> {
    lines: Vec<Line<'t>>,
}

impl<'t> SearchEngine<'t> {
    /// Create an engine with an empty document set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and index `text` in one step
    pub fn from_text(text: &'t str) -> Self {
        let mut engine = Self::new();
        engine.build_index(text);
        engine
    }

    /// Replace the document set with the non-empty lines of `text`.
    ///
    /// Lines are split on `\n` only. Empty segments (leading, trailing or
    /// between consecutive newlines) are skipped.
    pub fn build_index(&mut self, text: &'t str) {
        self.lines.clear();
        self.lines.extend(split_lines(text));

        tracing::debug!(
            documents = self.lines.len(),
            bytes = text.len(),
            "Built line index"
        );
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no documents are indexed
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indexed documents in source order
    pub fn lines(&self) -> &[Line<'t>] {
        &self.lines
    }

    /// Unique query terms (first spelling wins) with their IDF over the
    /// current document set, in order of first appearance.
    pub fn query_terms<'q>(&self, query: &'q str) -> Vec<WeightedTerm<'q>> {
        unique_words(words(query))
            .into_iter()
            .map(|term| WeightedTerm {
                term,
                idf: inverse_document_frequency(term, self.lines.iter().map(|l| l.text)),
            })
            .collect()
    }

    /// Return up to `results_count` lines ranked by relevance to `query`.
    ///
    /// Lines scoring exactly zero are never returned.
    pub fn search(&self, query: &str, results_count: usize) -> Vec<&'t str> {
        self.search_lines(query, results_count)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    /// Same as [`search`](Self::search), keeping each line's number.
    pub fn search_lines(&self, query: &str, results_count: usize) -> Vec<Line<'t>> {
        let terms = self.query_terms(query);
        if terms.is_empty() || results_count == 0 {
            return Vec::new();
        }

        let scores: Vec<f64> = self
            .lines
            .iter()
            .map(|line| tfidf_score(&terms, line.text))
            .collect();

        let results: Vec<Line<'t>> = rank(&scores)
            .into_iter()
            .filter(|&doc| scores[doc] != 0.0)
            .take(results_count)
            .map(|doc| self.lines[doc])
            .collect();

        tracing::debug!(
            terms = terms.len(),
            documents = self.lines.len(),
            results = results.len(),
            "Ranked lines for query"
        );

        results
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| Line {
            number: i + 1,
            text: segment,
        })
}

/// Order document indices by descending score.
///
/// Scores within [`SCORE_EPSILON`] of each other count as equal and keep
/// document order. A plain comparator using the epsilon is not transitive,
/// so sort exactly first, then reorder each run of neighbours that are
/// chained together by epsilon-close gaps. Any two scores within epsilon
/// always land in the same run.
fn rank(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && scores[order[end - 1]] - scores[order[end]] <= SCORE_EPSILON {
            end += 1;
        }
        order[start..end].sort_unstable();
        start = end;
    }

    order
}
