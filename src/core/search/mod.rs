//! TF-IDF line search.
//!
//! Lines of a borrowed text buffer are ranked against a free-text query.
//! Words are ASCII alphabetic runs compared without regard to case.

pub mod engine;
pub mod service;
pub mod tfidf;
pub mod tokenizer;

pub use engine::{Line, SearchEngine, SCORE_EPSILON};
pub use service::SearchService;
