//! Request and response types for the search service.

use serde::{Deserialize, Serialize};

/// Search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    /// Maximum number of results (defaults to `search.default_k`)
    #[serde(default)]
    pub k: Option<usize>,
}

/// One ranked line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based rank in the result list
    pub rank: usize,

    /// 1-based line number in the indexed text
    pub line_number: usize,

    /// Line content
    pub text: String,
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query as submitted
    pub query: String,

    /// Ranked lines, best first
    pub results: Vec<SearchHit>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Statistics about an indexed input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Where the text came from (file path or `<stdin>`)
    pub source: String,

    /// Size of the input in bytes
    pub bytes: usize,

    /// Number of indexed lines (documents)
    pub documents: usize,

    /// Total number of words across all documents
    pub words: usize,

    /// Documents without any words
    pub empty_documents: usize,
}
