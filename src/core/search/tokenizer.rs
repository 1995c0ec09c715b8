//! Word tokenizer and case-insensitive word matching.
//!
//! A word is a maximal run of ASCII alphabetic characters. Everything else
//! (digits, punctuation, whitespace, non-ASCII text) separates words and is
//! never part of one. The same rule applies to indexed lines and to queries,
//! so a query word can only ever match a token produced the same way.

/// Compare two words, ignoring ASCII letter case.
///
/// Only `A-Z`/`a-z` fold onto each other; every other byte must match
/// exactly. No locale or Unicode case mapping is applied.
#[inline]
pub fn same_word(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Lazy iterator over the words of a string.
///
/// Yields borrowed slices of the input, left to right. Each call to
/// [`words`] starts a fresh scan; there is no shared state between scans.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        // ASCII bytes never fall inside a multi-byte UTF-8 sequence, so both
        // ends are char boundaries.
        Some(&self.text[start..self.pos])
    }
}

/// Split `text` into words.
///
/// # Example
///
/// ```
/// use lineseek::core::search::tokenizer::words;
///
/// let tokens: Vec<&str> = words("The cat, 2 dogs!").collect();
/// assert_eq!(tokens, vec!["The", "cat", "dogs"]);
/// ```
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Reduce words to a case-insensitively unique list, keeping the first
/// spelling of each word in order of first appearance.
pub fn unique_words<'a, I>(tokens: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut unique: Vec<&'a str> = Vec::new();
    for token in tokens {
        if !unique.iter().any(|seen| same_word(seen, token)) {
            unique.push(token);
        }
    }
    unique
}
