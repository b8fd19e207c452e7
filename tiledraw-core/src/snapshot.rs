//! Drawing snapshots for saving and debugging
//!
//! A snapshot stores the raw glyph of every cell in row-major order, plus
//! the drawing's top-left corner, so loading puts each glyph back at its
//! original position. Cells missing from a sparse drawing come back as
//! empty cells.

use serde::{Deserialize, Serialize};

use crate::drawing::{Drawing, Tile};
use crate::error::Result;
use crate::glyph::Glyph;
use crate::position::GridPosition;

/// A drawing in saved form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingSnapshot {
    /// Column of the top-left cell
    #[serde(default)]
    pub column: i32,
    /// Row of the top-left cell
    #[serde(default)]
    pub row: i32,
    pub width: i32,
    pub height: i32,
    /// Glyphs row by row; an empty string is an empty cell
    pub rows: Vec<Vec<String>>,
}

impl DrawingSnapshot {
    pub fn from_drawing(drawing: &Drawing) -> Self {
        let bounds = drawing.bounds();
        let (column, row) = bounds.min().coords().unwrap_or((0, 0));
        let rows = drawing
            .to_array()
            .iter()
            .map(|glyphs| {
                glyphs
                    .iter()
                    .map(|glyph| glyph.as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        DrawingSnapshot {
            column,
            row,
            width: bounds.width(),
            height: bounds.height(),
            rows,
        }
    }

    /// Rebuild the drawing at its saved position
    pub fn to_drawing(&self) -> Drawing {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, glyphs)| {
                glyphs.iter().enumerate().map(move |(j, glyph)| -> Tile {
                    let position = GridPosition::new(self.column, self.row)
                        .offset_column(j as i32)
                        .offset_row(i as i32);
                    (position, Glyph::from_grapheme(glyph))
                })
            })
            .collect()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Drawing> for DrawingSnapshot {
    fn from(drawing: &Drawing) -> Self {
        DrawingSnapshot::from_drawing(drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::GridBounds;

    fn p(column: i32, row: i32) -> GridPosition {
        GridPosition::new(column, row)
    }

    fn round_trip(drawing: &Drawing) -> Drawing {
        let json = DrawingSnapshot::from(drawing).to_json().unwrap();
        DrawingSnapshot::from_json(&json).unwrap().to_drawing()
    }

    #[test]
    fn test_snapshot_rows() {
        let drawing = Drawing::from_text("😀 \n🐱a");
        let snapshot = DrawingSnapshot::from_drawing(&drawing);
        assert_eq!((snapshot.column, snapshot.row), (0, 0));
        assert_eq!(snapshot.width, 2);
        assert_eq!(snapshot.height, 2);
        assert_eq!(snapshot.rows, vec![vec!["😀", ""], vec!["🐱", "a"]]);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let drawing = Drawing::from_text("😀🐱\n🌲🌲");
        assert_eq!(round_trip(&drawing), drawing);
    }

    #[test]
    fn test_snapshot_keeps_narrow_glyphs() {
        let drawing = Drawing::from_text("a😀");
        let restored = round_trip(&drawing);
        assert_eq!(restored.glyph_at(p(0, 0)), Some(&Glyph::from('a')));
        assert_eq!(restored, drawing);
    }

    #[test]
    fn test_snapshot_keeps_position() {
        let drawing = Drawing::new(vec![(p(-1, -1), Glyph::from("😀")), (p(0, -1), Glyph::None)]);
        let restored = round_trip(&drawing);
        assert_eq!(restored.bounds(), GridBounds::new(p(-1, -1), p(0, -1)));
        assert_eq!(restored, drawing);
    }

    #[test]
    fn test_snapshot_fills_sparse_cells() {
        let drawing = Drawing::new(vec![(p(2, 2), Glyph::from('x')), (p(3, 3), Glyph::from('y'))]);
        let restored = round_trip(&drawing);
        assert_eq!(restored.tiles().len(), 4);
        assert_eq!(restored.glyph_at(p(3, 2)), Some(&Glyph::None));
        assert_eq!(restored.content_bounds(), drawing.content_bounds());
    }

    #[test]
    fn test_snapshot_restores_blank_cells_as_empty() {
        let drawing = Drawing::from_text("😀 ");
        let restored = DrawingSnapshot::from_drawing(&drawing).to_drawing();
        assert_eq!(restored.glyph_at(p(1, 0)), Some(&Glyph::None));
    }

    #[test]
    fn test_snapshot_of_empty_drawing() {
        let snapshot = DrawingSnapshot::from_drawing(&Drawing::default());
        assert_eq!(snapshot.width, 0);
        assert!(snapshot.rows.is_empty());
        assert!(snapshot.to_drawing().tiles().is_empty());
    }

    #[test]
    fn test_snapshot_without_origin_loads_at_zero() {
        let json = r#"{ "width": 1, "height": 1, "rows": [["🐱"]] }"#;
        let drawing = DrawingSnapshot::from_json(json).unwrap().to_drawing();
        assert_eq!(drawing.tiles(), &[(p(0, 0), Glyph::from("🐱"))]);
    }

    #[test]
    fn test_snapshot_invalid_json() {
        assert!(DrawingSnapshot::from_json("not json").is_err());
    }
}
