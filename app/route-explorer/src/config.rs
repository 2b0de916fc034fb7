//! Configuration management

use crate::error::{Result, RouterError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "route-explorer")]
#[command(about = "Enumerate every swap route between two assets across AMM pools", long_about = None)]
pub struct CliArgs {
    /// Pool list (.json or .toml); the built-in sample network is used when omitted
    #[arg(short, long)]
    pub pools: Option<PathBuf>,

    /// Source asset symbol
    #[arg(long)]
    pub from: Option<String>,

    /// Destination asset symbol
    #[arg(long)]
    pub to: Option<String>,

    /// Amount of the source asset to swap
    #[arg(long)]
    pub amount: Option<f64>,

    /// Reject degenerate pools and non-finite amounts (`--strict=false` overrides the config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub strict: Option<bool>,

    /// Output format (text or json)
    #[arg(long)]
    pub format: Option<String>,

    /// Log every projected swap (`--trace=false` overrides the config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub trace: Option<bool>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub data: Option<DataConfig>,
    pub search: Option<SearchConfig>,
    pub validation: Option<ValidationConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub pools: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub trace: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(RouterError::ConfigError(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

/// Final configuration combining CLI args, config file, and defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub pools_path: Option<PathBuf>,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub strict: bool,
    pub format: OutputFormat,
    pub trace: bool,
    pub verbose: bool,
}

impl Config {
    pub const DEFAULT_FROM: &'static str = "VND";
    pub const DEFAULT_TO: &'static str = "USD";
    pub const DEFAULT_AMOUNT: f64 = 5.0;

    /// Create config from CLI args (priority: CLI > config file > default)
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config_file = match &args.config {
            Some(config_path) => Self::load_config_file(config_path)?,
            None => ConfigFile::default(),
        };

        let pools_path = args
            .pools
            .or_else(|| config_file.data.as_ref().and_then(|d| d.pools.clone()));

        let search = config_file.search.as_ref();
        let from = args
            .from
            .or_else(|| search.and_then(|s| s.from.clone()))
            .unwrap_or_else(|| Self::DEFAULT_FROM.to_string());
        let to = args
            .to
            .or_else(|| search.and_then(|s| s.to.clone()))
            .unwrap_or_else(|| Self::DEFAULT_TO.to_string());
        let amount = args
            .amount
            .or_else(|| search.and_then(|s| s.amount))
            .unwrap_or(Self::DEFAULT_AMOUNT);

        let strict = args
            .strict
            .or_else(|| config_file.validation.as_ref().and_then(|v| v.strict))
            .unwrap_or(false);

        let output = config_file.output.as_ref();
        let format = match args.format.or_else(|| output.and_then(|o| o.format.clone())) {
            Some(format) => OutputFormat::parse(&format)?,
            None => OutputFormat::Text,
        };
        let trace = args
            .trace
            .or_else(|| output.and_then(|o| o.trace))
            .unwrap_or(false);

        if !amount.is_finite() {
            return Err(RouterError::ConfigError(format!(
                "amount must be a finite number, got {}",
                amount
            )));
        }

        Ok(Self {
            pools_path,
            from,
            to,
            amount,
            strict,
            format,
            trace,
            verbose: args.verbose,
        })
    }

    /// Load config file from path
    fn load_config_file(path: &PathBuf) -> Result<ConfigFile> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RouterError::ConfigError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| RouterError::ConfigError(format!("Failed to parse config file: {}", e)))
    }
}
