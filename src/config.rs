//! Configuration for Tiledraw
//!
//! Settings come from, in order of precedence:
//! CLI arguments > environment variables > config file > defaults.
//! The merged result is validated here, so the drawing core can assume
//! `min_size <= max_size`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tiledraw_core::{DrawingSettings, Glyph, Size};

/// CLI arguments for Tiledraw
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tiledraw")]
#[command(version)]
#[command(about = "Crop, pad and inspect emoji drawings", long_about = None)]
pub struct CliArgs {
    /// Drawing text file (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Smallest drawing size
    #[arg(long, value_name = "WxH")]
    pub min_size: Option<Size>,

    /// Largest drawing size
    #[arg(long, value_name = "WxH")]
    pub max_size: Option<Size>,

    /// Crop empty margin down to the minimum size
    #[arg(long)]
    pub crop: bool,

    /// Pad with empty cells up to the minimum size
    #[arg(long)]
    pub pad: bool,

    /// Expand to the padded editing bounds
    #[arg(long)]
    pub fit: bool,

    /// Fill empty cells with this glyph (a single character or emoji)
    #[arg(long, value_name = "GLYPH")]
    pub background: Option<Glyph>,

    /// Render empty cells as white squares
    #[arg(short, long)]
    pub white_squares: bool,

    /// Print a JSON snapshot instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Print the distinct glyphs instead of the drawing
    #[arg(long)]
    pub glyphs: bool,
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] tiledraw_core::Error),
}

/// Tiledraw configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Size limits
    #[serde(default)]
    pub drawing: DrawingSettings,

    /// Render empty cells as white squares
    #[serde(default)]
    pub white_squares: bool,
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = args.config.clone().or_else(Self::default_config_path);
        if let Some(path) = &config_path {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(file_config) => config = file_config,
                    Err(e) => {
                        log::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        config.apply_env(|name| env::var(name).ok());
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tiledraw").join("config.toml"))
    }

    /// Apply `TILEDRAW_*` variables looked up through `lookup`.
    /// Values that do not parse are skipped with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("TILEDRAW_MIN_SIZE") {
            match val.parse() {
                Ok(size) => self.drawing.min_size = size,
                Err(e) => log::warn!("Ignoring TILEDRAW_MIN_SIZE: {}", e),
            }
        }
        if let Some(val) = lookup("TILEDRAW_MAX_SIZE") {
            match val.parse() {
                Ok(size) => self.drawing.max_size = size,
                Err(e) => log::warn!("Ignoring TILEDRAW_MAX_SIZE: {}", e),
            }
        }
        if let Some(val) = lookup("TILEDRAW_WHITE_SQUARES") {
            self.white_squares = val == "1" || val.to_lowercase() == "true";
        }
    }

    /// Apply CLI arguments to config
    pub fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(size) = args.min_size {
            self.drawing.min_size = size;
        }
        if let Some(size) = args.max_size {
            self.drawing.max_size = size;
        }
        if args.white_squares {
            self.white_squares = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(self.drawing.validate()?)
    }
}
