//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::types::SearchResponse;
use std::io::{self, Write};

/// Lines longer than this are shortened in human output
pub const MAX_LINE_DISPLAY: usize = 100;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for input sources
    pub fn source(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for line numbers
    pub fn line_number(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Shorten `line` to at most `max_chars` characters, marking the cut with
/// `...`. Counts characters, not bytes, so it never splits a code point.
pub fn truncate_line(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = line.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Write a search response in the requested format
///
/// JSON is pretty-printed unless `compact` is set (one object per line).
pub fn write_search_response<W: Write>(
    out: &mut W,
    response: &SearchResponse,
    source: &str,
    format: OutputFormat,
    truncate: bool,
    compact: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                writeln!(
                    out,
                    "No results found for '{}' in '{}'",
                    colors::label(&response.query),
                    colors::source(source)
                )?;
                return Ok(());
            }

            writeln!(
                out,
                "Found {} result(s) in '{}':\n",
                colors::number(&response.count.to_string()),
                colors::source(source)
            )?;

            for hit in &response.results {
                let text = if truncate {
                    truncate_line(&hit.text, MAX_LINE_DISPLAY)
                } else {
                    hit.text.clone()
                };
                writeln!(
                    out,
                    "[{}] {} {}",
                    colors::rank(&hit.rank.to_string()),
                    colors::line_number(&format!("{}:", hit.line_number)),
                    text
                )?;
            }
        }
        OutputFormat::Json => {
            let json = if compact {
                serde_json::to_string(response)
            } else {
                serde_json::to_string_pretty(response)
            };
            writeln!(out, "{}", json.map_err(io::Error::other)?)?;
        }
    }
    Ok(())
}

/// Print a serialisable value as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
