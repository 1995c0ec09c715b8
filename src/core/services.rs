//! Unified service container for lineseek
//!
//! Provides shared access to configuration and the search service.

use crate::core::config::Config;
use crate::core::corpus::Corpus;
use crate::core::error::Result;
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Search service for TF-IDF queries
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let search = Arc::new(SearchService::new(
            config.search.default_k,
            config.search.max_k,
            config.search.max_query_length,
        ));

        Self {
            search,
            config: Arc::new(config),
        }
    }

    /// Load a corpus (`-` for stdin) within the configured size limit
    pub fn load_corpus(&self, path: &str) -> Result<Corpus> {
        Corpus::load(path, self.config.input.max_bytes())
    }
}
