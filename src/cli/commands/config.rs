//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::{InputConfig, SearchConfig};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub search: SearchConfig,
    pub input: InputConfig,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    explicit_file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = match explicit_file {
        Some(path) => path.to_path_buf(),
        None => XdgDirs::new().config_file(),
    };

    let response = ConfigResponse {
        config_file: config_file.to_string_lossy().into_owned(),
        search: config.search.clone(),
        input: config.input.clone(),
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  search:");
            println!("    default_k: {}", response.search.default_k);
            println!("    max_k: {}", response.search.max_k);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("  input:");
            println!("    max_file_size_mb: {}", response.input.max_file_size_mb);
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
