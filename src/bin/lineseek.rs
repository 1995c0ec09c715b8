//! lineseek CLI - rank the lines of a text file against a query
//!
//! # Examples
//!
//! ```bash
//! # Top 5 lines of a file for a query
//! lineseek search notes.txt "cat dog" -k 5
//!
//! # Read the corpus from stdin, JSON output
//! cat notes.txt | lineseek --format json search - "cat"
//!
//! # Index once, then type queries
//! lineseek interactive notes.txt
//! ```

use clap::Parser;
use lineseek::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lineseek=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
