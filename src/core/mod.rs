//! Core domain logic (frontend-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **corpus**: Owned text buffers read from files or stdin
//! - **error**: Error types and Result alias
//! - **search**: Tokenizer, TF-IDF statistics, ranking engine, search service
//! - **services**: Unified service container
//! - **types**: Request/response data structures
//! - **xdg**: XDG directory handling

pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use corpus::Corpus;
pub use error::{LineseekError, Result};
pub use services::Services;
