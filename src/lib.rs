//! lineseek - in-memory TF-IDF line search
//!
//! Splits a text into lines and ranks them against free-text queries with
//! a TF-IDF model. The engine borrows the indexed text and returns slices
//! of it, so no document text is ever copied.
//!
//! # Architecture
//!
//! - **core**: Domain logic (frontend-agnostic)
//!   - search (tokenizer, TF-IDF statistics, ranking engine, search service)
//!   - config, corpus, error, types, xdg, services
//!
//! - **cli**: clap frontend (depends on core)
//!
//! # Example
//!
//! ```
//! use lineseek::SearchEngine;
//!
//! let text = "the cat sat\nthe dog ran\ncats and dogs";
//! let engine = SearchEngine::from_text(text);
//!
//! assert_eq!(engine.search("cat", 3), vec!["the cat sat"]);
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::corpus::Corpus;
pub use crate::core::error::{LineseekError, Result};
pub use crate::core::search::{Line, SearchEngine, SearchService, SCORE_EPSILON};
pub use crate::core::services::Services;
pub use crate::core::types::*;
