//! Interactive command - index once, answer many queries
//!
//! Reads one query per line from stdin until EOF. The index is built a
//! single time and reused for every query. In JSON mode each response is
//! written as one compact JSON object per line.

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Text file to index (stdin is reserved for queries)
    pub file: String,

    /// Maximum number of results per query (defaults to search.default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the interactive command
pub fn execute(
    args: InteractiveArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.file == "-" {
        return Err("interactive mode reads queries from stdin; pass a file to index".into());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompt = format == OutputFormat::Human;
    execute_with_io(args, services, format, stdin.lock(), &mut stdout.lock(), prompt)?;
    Ok(())
}

/// Execute the interactive loop over explicit input and output streams.
///
/// Returns the number of queries answered.
pub fn execute_with_io<R: BufRead, W: Write>(
    args: InteractiveArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let corpus = services.load_corpus(&args.file)?;
    let engine = corpus.engine();

    if prompt {
        eprintln!(
            "Indexed {} line(s) from '{}'. Enter one query per line, Ctrl-D to quit.",
            engine.len(),
            corpus.source()
        );
        eprint!("> ");
    }

    let mut answered = 0;
    for line in input.lines() {
        let line = line?;
        let query = line.trim_end_matches('\r');

        match services.search.search_query(&engine, query, args.limit) {
            Ok(response) => {
                output::write_search_response(
                    out,
                    &response,
                    corpus.source(),
                    format,
                    true,
                    true,
                )?;
                answered += 1;
            }
            Err(e) => output::print_warning(&e.to_string()),
        }
        out.flush()?;

        if prompt {
            eprint!("> ");
        }
    }

    tracing::debug!(queries = answered, "Interactive session finished");
    Ok(answered)
}
