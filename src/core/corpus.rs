//! Owned text buffers for indexing.
//!
//! The search engine borrows its lines, so something has to own the text
//! for as long as queries run. A [`Corpus`] is that owner: it reads a file
//! or stdin once, enforces the configured size limit, and hands out engines
//! that borrow from it.

use crate::core::error::{LineseekError, Result};
use crate::core::search::tokenizer::words;
use crate::core::search::SearchEngine;
use crate::core::types::IndexStats;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Source name used for text read from stdin
pub const STDIN_SOURCE: &str = "<stdin>";

/// Text loaded from a file or stream
#[derive(Debug, Clone)]
pub struct Corpus {
    source: String,
    text: String,
}

impl Corpus {
    /// Wrap text that is already in memory
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Load `path`, or stdin when `path` is `-`
    pub fn load(path: &str, max_bytes: u64) -> Result<Self> {
        if path == "-" {
            Self::from_reader(io::stdin().lock(), STDIN_SOURCE, max_bytes)
        } else {
            Self::from_file(path, max_bytes)
        }
    }

    /// Read a UTF-8 text file no larger than `max_bytes`
    pub fn from_file(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();

        if !path.is_file() {
            return Err(LineseekError::InputNotFound(source));
        }

        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(LineseekError::InvalidInput(format!(
                "{source} is {size} bytes, limit is {max_bytes} bytes"
            )));
        }

        let file = fs::File::open(path)?;
        Self::from_reader(file, source, max_bytes)
    }

    /// Read UTF-8 text from any reader, failing past `max_bytes`
    pub fn from_reader<R: Read>(
        reader: R,
        source: impl Into<String>,
        max_bytes: u64,
    ) -> Result<Self> {
        let source = source.into();

        let mut bytes = Vec::new();
        reader
            .take(max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > max_bytes {
            return Err(LineseekError::InvalidInput(format!(
                "{source} exceeds the {max_bytes} byte limit"
            )));
        }

        let text = String::from_utf8(bytes).map_err(|e| {
            LineseekError::InvalidInput(format!(
                "{source} is not valid UTF-8 (byte {})",
                e.utf8_error().valid_up_to()
            ))
        })?;

        tracing::debug!(source = %source, bytes = text.len(), "Loaded corpus");

        Ok(Self { source, text })
    }

    /// Where the text came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The full text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Build a search engine over this corpus
    pub fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::from_text(&self.text)
    }

    /// Document and word counts for this corpus
    pub fn stats(&self) -> IndexStats {
        let engine = self.engine();
        let mut total_words = 0;
        let mut empty_documents = 0;

        for line in engine.lines() {
            let n = words(line.text).count();
            if n == 0 {
                empty_documents += 1;
            }
            total_words += n;
        }

        IndexStats {
            source: self.source.clone(),
            bytes: self.text.len(),
            documents: engine.len(),
            words: total_words,
            empty_documents,
        }
    }
}
