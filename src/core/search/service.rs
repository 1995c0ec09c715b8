//! Request-level search service.
//!
//! Wraps [`SearchEngine`] with the limits from the `[search]` configuration
//! section and builds serialisable responses.

use crate::core::error::{LineseekError, Result};
use crate::core::search::engine::SearchEngine;
use crate::core::types::{SearchHit, SearchRequest, SearchResponse};
use std::time::Instant;

/// TF-IDF search service
#[derive(Debug, Clone)]
pub struct SearchService {
    default_k: usize,
    max_k: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(default_k: usize, max_k: usize, max_query_length: usize) -> Self {
        Self {
            default_k,
            max_k,
            max_query_length,
        }
    }

    /// Execute a search request against an indexed engine
    pub fn search(
        &self,
        engine: &SearchEngine<'_>,
        request: SearchRequest,
    ) -> Result<SearchResponse> {
        self.search_query(engine, &request.query, request.k)
    }

    /// Execute search with explicit parameters
    ///
    /// A query without any words is not an error; it simply matches nothing.
    pub fn search_query(
        &self,
        engine: &SearchEngine<'_>,
        query: &str,
        k: Option<usize>,
    ) -> Result<SearchResponse> {
        let start = Instant::now();

        if query.chars().count() > self.max_query_length {
            return Err(LineseekError::InvalidQuery(format!(
                "Query exceeds maximum length of {} characters",
                self.max_query_length
            )));
        }

        let k_limit = self.resolve_k(k)?;

        let results: Vec<SearchHit> = engine
            .search_lines(query, k_limit)
            .into_iter()
            .enumerate()
            .map(|(i, line)| SearchHit {
                rank: i + 1,
                line_number: line.number,
                text: line.text.to_string(),
            })
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(query, k = k_limit, count, duration_ms, "Search completed");

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            count,
            duration_ms,
        })
    }

    /// Determine the result limit: default when absent, capped at `max_k`
    fn resolve_k(&self, k: Option<usize>) -> Result<usize> {
        match k {
            Some(0) => Err(LineseekError::InvalidQuery(
                "Result count must be at least 1".to_string(),
            )),
            Some(k) => Ok(k.min(self.max_k)),
            None => Ok(self.default_k.min(self.max_k)),
        }
    }
}
