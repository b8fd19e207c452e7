//! Tiledraw
//!
//! Small emoji drawings as immutable glyph grids:
//!
//! - `tiledraw_core`: positions, bounds, grids and drawings
//! - `tiledraw_store`: observable state and undo history
//! - `editor`: an editing session wiring the two together
//! - `config` and `pipeline`: the command line tool's settings and batch operations

pub mod config;
pub mod editor;
pub mod pipeline;

pub use config::{CliArgs, Config, ConfigError};
pub use editor::{Editor, Eraser, Paintbrush, Tool, ToolType, Toolbox};
pub use pipeline::{Operations, OutputFormat};

pub use tiledraw_core::{
    Drawing, DrawingSettings, DrawingSnapshot, Glyph, Grid, GridBounds, GridPosition, Size,
};
pub use tiledraw_store::{Stack, Store, Subscription};
