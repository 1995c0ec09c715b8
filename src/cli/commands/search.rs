//! Search command - rank the lines of a file against one query

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchRequest;
use clap::Args;
use std::io::{self, Write};
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text file to index, or `-` for stdin
    pub file: String,

    /// Search query (words are ASCII letter runs, case-insensitive)
    pub query: String,

    /// Maximum number of results (defaults to search.default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Print long lines in full instead of shortening them
    #[arg(long)]
    pub no_truncate: bool,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(args, services, format, &mut out)
}

/// Execute the search command, writing results to `out`
pub fn execute_to<W: Write>(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = services.load_corpus(&args.file)?;
    let engine = corpus.engine();

    let request = SearchRequest {
        query: args.query,
        k: args.limit,
    };
    let response = services.search.search(&engine, request)?;

    output::write_search_response(
        out,
        &response,
        corpus.source(),
        format,
        !args.no_truncate,
        false,
    )?;

    Ok(())
}
