//! Stats command - document and word counts for an input

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Text file to inspect, or `-` for stdin
    pub file: String,
}

/// Execute the stats command
pub fn execute(
    args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = services.load_corpus(&args.file)?;
    let stats = corpus.stats();

    match format {
        OutputFormat::Human => {
            output::print_header(&format!("Index of '{}'", colors::source(&stats.source)));
            println!("  bytes:           {}", colors::number(&stats.bytes.to_string()));
            println!(
                "  documents:       {}",
                colors::number(&stats.documents.to_string())
            );
            println!("  words:           {}", colors::number(&stats.words.to_string()));
            println!(
                "  without words:   {}",
                colors::number(&stats.empty_documents.to_string())
            );
        }
        OutputFormat::Json => output::print_json(&stats)?,
    }

    Ok(())
}
