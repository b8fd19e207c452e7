//! Drawing tools
//!
//! A tool turns a drawing and a target cell into a new drawing. Tools never
//! touch editor state themselves; the editor commits their result.

use serde::{Deserialize, Serialize};
use tiledraw_core::{Drawing, DrawingSettings, Glyph, GridPosition};

/// Available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    #[default]
    Paintbrush,
    Eraser,
}

impl ToolType {
    /// Parse tool name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paintbrush" | "brush" => Some(ToolType::Paintbrush),
            "eraser" => Some(ToolType::Eraser),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolType::Paintbrush => "paintbrush",
            ToolType::Eraser => "eraser",
        }
    }
}

pub trait Tool {
    fn tool_type(&self) -> ToolType;

    /// Apply the tool at `position`, returning the new drawing
    fn apply(&self, drawing: &Drawing, position: GridPosition, settings: &DrawingSettings) -> Drawing;
}

/// Paints the brush glyph and grows the canvas margin around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paintbrush {
    pub brush: Glyph,
}

impl Tool for Paintbrush {
    fn tool_type(&self) -> ToolType {
        ToolType::Paintbrush
    }

    fn apply(&self, drawing: &Drawing, position: GridPosition, settings: &DrawingSettings) -> Drawing {
        if self.brush.is_empty() {
            return drawing.clone();
        }
        let painted = drawing.with_glyph_at(position, self.brush.clone());
        painted.expanded_to(painted.padded_bounds(settings))
    }
}

/// Clears a cell and trims the empty margin left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eraser;

impl Tool for Eraser {
    fn tool_type(&self) -> ToolType {
        ToolType::Eraser
    }

    fn apply(&self, drawing: &Drawing, position: GridPosition, settings: &DrawingSettings) -> Drawing {
        drawing
            .with_glyph_at(position, Glyph::None)
            .cropped_to_content(settings.min_size)
            .padded_to(settings.min_size)
    }
}
