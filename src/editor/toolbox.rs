//! Toolbox state: active tool, current brush and recently used glyphs

use serde::{Deserialize, Serialize};
use tiledraw_core::Glyph;

use super::tool::{Eraser, Paintbrush, Tool, ToolType};

/// Maximum number of recent glyphs remembered
pub const RECENT_GLYPH_LIMIT: usize = 16;

fn default_brush() -> Glyph {
    Glyph::from("😀")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbox {
    #[serde(default)]
    pub active_tool_type: ToolType,
    #[serde(default = "default_brush")]
    pub brush: Glyph,
    /// Most recent first
    #[serde(default)]
    pub recent: Vec<Glyph>,
}

impl Default for Toolbox {
    fn default() -> Self {
        Toolbox {
            active_tool_type: ToolType::default(),
            brush: default_brush(),
            recent: Vec::new(),
        }
    }
}

impl Toolbox {
    pub fn with_active_tool(&self, tool: ToolType) -> Self {
        Toolbox {
            active_tool_type: tool,
            ..self.clone()
        }
    }

    /// Use `brush` for painting and remember it as recent
    pub fn with_brush(&self, brush: Glyph) -> Self {
        Toolbox {
            brush: brush.clone(),
            ..self.with_recent(vec![brush])
        }
    }

    /// Put `glyphs` at the front of the recent list, keeping their order.
    ///
    /// Empty glyphs and duplicates are dropped; the list is capped at
    /// [`RECENT_GLYPH_LIMIT`].
    pub fn with_recent(&self, glyphs: Vec<Glyph>) -> Self {
        let mut recent: Vec<Glyph> = Vec::with_capacity(RECENT_GLYPH_LIMIT);
        for glyph in glyphs.into_iter().chain(self.recent.iter().cloned()) {
            if glyph.is_empty() || recent.contains(&glyph) {
                continue;
            }
            recent.push(glyph);
            if recent.len() == RECENT_GLYPH_LIMIT {
                break;
            }
        }
        Toolbox {
            recent,
            ..self.clone()
        }
    }

    /// The tool to apply for the current selection
    pub fn active_tool(&self) -> Box<dyn Tool> {
        match self.active_tool_type {
            ToolType::Paintbrush => Box::new(Paintbrush {
                brush: self.brush.clone(),
            }),
            ToolType::Eraser => Box::new(Eraser),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbox_default() {
        let toolbox = Toolbox::default();
        assert_eq!(toolbox.active_tool_type, ToolType::Paintbrush);
        assert!(!toolbox.brush.is_empty());
        assert!(toolbox.recent.is_empty());
    }

    #[test]
    fn test_with_active_tool() {
        let toolbox = Toolbox::default().with_active_tool(ToolType::Eraser);
        assert_eq!(toolbox.active_tool().tool_type(), ToolType::Eraser);
    }

    #[test]
    fn test_with_brush_updates_recent() {
        let toolbox = Toolbox::default()
            .with_brush(Glyph::from("🐱"))
            .with_brush(Glyph::from("🌲"))
            .with_brush(Glyph::from("🐱"));
        assert_eq!(toolbox.brush, Glyph::from("🐱"));
        assert_eq!(toolbox.recent, vec![Glyph::from("🐱"), Glyph::from("🌲")]);
    }

    #[test]
    fn test_with_recent_skips_empty_and_caps() {
        let glyphs: Vec<Glyph> = ('a'..='z').map(Glyph::from).collect();
        let toolbox = Toolbox::default().with_recent(vec![Glyph::None]).with_recent(glyphs);
        assert_eq!(toolbox.recent.len(), RECENT_GLYPH_LIMIT);
        assert_eq!(toolbox.recent[0], Glyph::from('a'));
    }

    #[test]
    fn test_toolbox_json() {
        let toolbox: Toolbox = serde_json::from_str(r#"{ "active_tool_type": "eraser" }"#).unwrap();
        assert_eq!(toolbox.active_tool_type, ToolType::Eraser);
        assert_eq!(toolbox.brush, default_brush());
    }
}
