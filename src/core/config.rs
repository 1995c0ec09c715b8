//! Configuration management for lineseek.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{LineseekError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Input loading configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Maximum input size in MB (larger inputs are rejected)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

// Default value functions
fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_max_file_size() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl InputConfig {
    /// Input size limit in bytes
    pub fn max_bytes(&self) -> u64 {
        (self.max_file_size_mb as u64) * 1024 * 1024
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LineseekError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. LINESEEK_CONFIG env var
    /// 2. XDG config file (~/.config/lineseek/config.toml)
    /// 3. ./lineseek.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("LINESEEK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("lineseek.toml").exists() {
                Self::from_file("lineseek.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load an explicit config file, then apply env overrides and validate
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(default_k) = env::var("LINESEEK_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(max_k) = env::var("LINESEEK_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_k = k;
            }
        }
        if let Ok(max_query_len) = env::var("LINESEEK_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        if let Ok(max_size) = env::var("LINESEEK_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.input.max_file_size_mb = size;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_k == 0 {
            return Err(LineseekError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(LineseekError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(LineseekError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.input.max_file_size_mb == 0 {
            return Err(LineseekError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Max file size: {} MB", self.input.max_file_size_mb);
    }
}
