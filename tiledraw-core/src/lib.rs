//! Tiledraw Core
//!
//! This crate provides the value types behind small emoji drawings:
//! - Grid positions and rectangular bounds with `Null` sentinels
//! - A sparse, immutable grid of values
//! - Glyph drawings with crop, pad and overlay operations
//! - Text and JSON snapshot encodings
//!
//! Everything here is a plain value. Operations never mutate their receiver
//! and perform no I/O.

pub mod bounds;
pub mod drawing;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod position;
pub mod settings;
pub mod size;
pub mod snapshot;

pub use bounds::{GridBounds, Positions};
pub use drawing::{Drawing, Tile};
pub use error::{Error, Result};
pub use glyph::Glyph;
pub use grid::{Grid, GridElement};
pub use position::GridPosition;
pub use settings::DrawingSettings;
pub use size::Size;
pub use snapshot::DrawingSnapshot;
