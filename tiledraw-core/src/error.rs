//! Error types for the drawing core
//!
//! Grid and drawing operations are total; these errors only surface at
//! parsing and validation boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Snapshot (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `WxH` size string could not be parsed
    #[error("Invalid size '{0}'. Expected format: WIDTHxHEIGHT")]
    InvalidSize(String),

    /// Text that should be one glyph holds several grapheme clusters
    #[error("Invalid glyph '{0}'. Expected a single character or emoji")]
    InvalidGlyph(String),

    /// Drawing settings violate a precondition
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings { field: String, message: String },
}

/// Result type for drawing core operations
pub type Result<T> = std::result::Result<T, Error>;
