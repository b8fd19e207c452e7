//! Glyph drawings
//!
//! A drawing is a sparse grid of glyphs. Every operation leaves the receiver
//! untouched and returns a new drawing, so a drawing can be shared freely and
//! swapped wholesale into application state.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bounds::GridBounds;
use crate::glyph::Glyph;
use crate::grid::{Grid, GridElement};
use crate::position::GridPosition;
use crate::settings::DrawingSettings;
use crate::size::Size;

/// A drawing cell: position and glyph
pub type Tile = GridElement<Glyph>;

/// A grid which can contain characters and emoji
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Drawing {
    grid: Grid<Glyph>,
}

impl Drawing {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Drawing {
            grid: Grid::new(tiles),
        }
    }

    /// A drawing covering `bounds` with every cell empty
    pub fn create_empty(bounds: GridBounds) -> Self {
        bounds
            .positions()
            .map(|position| (position, Glyph::None))
            .collect()
    }

    /// Build from rows of glyphs. Row `i`, column `j` lands at `(j, i)`.
    pub fn from_array(rows: Vec<Vec<Glyph>>) -> Self {
        rows.into_iter()
            .enumerate()
            .flat_map(|(row, glyphs)| {
                glyphs
                    .into_iter()
                    .enumerate()
                    .map(move |(column, glyph)| (GridPosition::new(column as i32, row as i32), glyph))
            })
            .collect()
    }

    /// Parse the text form: one row per line, one glyph per grapheme cluster
    pub fn from_text(text: &str) -> Self {
        Drawing::from_array(
            text.split('\n')
                .map(|row| Glyph::split_row(row.trim_end_matches('\r')))
                .collect(),
        )
    }

    pub fn grid(&self) -> &Grid<Glyph> {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        self.grid.elements()
    }

    /// Bounds of every cell, empty or not
    pub fn bounds(&self) -> GridBounds {
        self.grid.bounds()
    }

    /// The smallest bounds of the non-empty cells
    pub fn content_bounds(&self) -> GridBounds {
        self.tiles()
            .iter()
            .filter(|(_, glyph)| !glyph.is_empty())
            .fold(GridBounds::NULL, |bounds, (position, _)| bounds.including(*position))
    }

    /// True if no cell holds a glyph
    pub fn is_empty(&self) -> bool {
        self.tiles().iter().all(|(_, glyph)| glyph.is_empty())
    }

    pub fn glyph_at(&self, position: GridPosition) -> Option<&Glyph> {
        self.grid.get(position)
    }

    /// Distinct non-empty glyphs, in order of first appearance
    pub fn unique_glyphs(&self) -> Vec<Glyph> {
        let mut seen = HashSet::new();
        self.tiles()
            .iter()
            .map(|(_, glyph)| glyph)
            .filter(|glyph| !glyph.is_empty() && seen.insert(*glyph))
            .cloned()
            .collect()
    }

    /// Trim empty margin down to `min_size`, never cutting into content.
    ///
    /// Rows come off the top before the bottom; columns come off the right
    /// before the left. A drawing with no content shrinks to `min_size`
    /// following the same edge order.
    pub fn cropped_to_content(&self, min_size: Size) -> Drawing {
        let mut bounds = self.bounds();
        if bounds.is_null() {
            return self.clone();
        }
        let content = self.content_bounds();

        let mut trim_height = bounds.height() - min_size.height.max(content.height());
        while trim_height > 0 && remove_row(&mut bounds, content) {
            trim_height -= 1;
        }

        let mut trim_width = bounds.width() - min_size.width.max(content.width());
        while trim_width > 0 && remove_column(&mut bounds, content) {
            trim_width -= 1;
        }

        log::trace!(
            "crop {:?} -> {:?} (content {:?}, min {})",
            self.bounds(),
            bounds,
            content,
            min_size
        );
        self.cropped_to(bounds)
    }

    /// Keep only the cells inside `bounds`
    pub fn cropped_to(&self, bounds: GridBounds) -> Drawing {
        Drawing {
            grid: self.grid.cropped_to(bounds),
        }
    }

    /// Pad with empty cells, growing evenly on both sides, to reach `min_size`.
    ///
    /// Returns the receiver when the drawing is already large enough; the
    /// copy shares its tiles.
    /// A drawing without cells is padded from the origin.
    pub fn padded_to(&self, min_size: Size) -> Drawing {
        let bounds = self.bounds();
        let target = bounds.sized_at_least(min_size);
        if target == bounds {
            return self.clone();
        }
        self.expanded_to(target)
    }

    /// Fill `bounds` with empty cells, keeping the existing cells on top
    pub fn expanded_to(&self, bounds: GridBounds) -> Drawing {
        Drawing::create_empty(bounds).overlaid_by(self)
    }

    /// Merge `other` over this drawing; `other` wins where both have a cell
    pub fn overlaid_by(&self, other: &Drawing) -> Drawing {
        Drawing {
            grid: self.grid.merged(&other.grid),
        }
    }

    /// Set a single cell
    pub fn with_glyph_at(&self, position: GridPosition, glyph: Glyph) -> Drawing {
        self.overlaid_by(&Drawing::new(vec![(position, glyph)]))
    }

    /// Bounds grown by a one-cell margin within `max_size`, then forced up to
    /// `min_size`.
    ///
    /// Width grows on the right before the left, height on the top before the
    /// bottom. If the result is still below `min_size` the right and top
    /// edges are pushed out to make up the difference, even past `max_size`.
    /// An empty drawing gets exactly `min_size` at the origin.
    pub fn padded_bounds(&self, settings: &DrawingSettings) -> GridBounds {
        let DrawingSettings { min_size, max_size } = *settings;

        if self.is_empty() {
            return GridBounds::from_size(min_size);
        }

        let mut bounds = self.bounds();

        if bounds.width() < max_size.width {
            bounds = bounds.adjust_right(1);
        }
        if bounds.width() < max_size.width {
            bounds = bounds.adjust_left(-1);
        }

        if bounds.height() < max_size.height {
            bounds = bounds.adjust_top(-1);
        }
        if bounds.height() < max_size.height {
            bounds = bounds.adjust_bottom(1);
        }

        let fill_width = min_size.width - bounds.width();
        if fill_width > 0 {
            bounds = bounds.adjust_right(fill_width);
        }

        let fill_height = min_size.height - bounds.height();
        if fill_height > 0 {
            bounds = bounds.adjust_top(-fill_height);
        }

        bounds
    }

    /// Replace empty cells with `background`
    pub fn with_background(&self, background: Glyph) -> Drawing {
        Drawing {
            grid: self.grid.map(|_, glyph| {
                if glyph.is_empty() {
                    background.clone()
                } else {
                    glyph.clone()
                }
            }),
        }
    }

    /// Rows of glyphs over `bounds()`; missing cells are empty
    pub fn to_array(&self) -> Vec<Vec<Glyph>> {
        self.grid.to_matrix(Glyph::None)
    }

    /// Text form with narrow characters widened so every cell has the same
    /// width. Empty cells render as the blank literal, or as white squares.
    pub fn to_text(&self, use_white_squares: bool) -> String {
        let empty = if use_white_squares {
            Glyph::WHITE_SQUARE
        } else {
            Glyph::SPACE
        };

        self.to_array()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|glyph| {
                        if glyph.is_empty() {
                            empty.to_string()
                        } else {
                            glyph.to_full_width()
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Content edges, or edges that let every row and column go when there is
/// no content
fn content_edges(content: GridBounds) -> (i32, i32, i32, i32) {
    match content {
        GridBounds::Area { left, top, right, bottom } => (left, top, right, bottom),
        GridBounds::Null => (i32::MAX, i32::MAX, i32::MIN, i32::MIN),
    }
}

fn remove_row(bounds: &mut GridBounds, content: GridBounds) -> bool {
    let GridBounds::Area { top, bottom, .. } = *bounds else {
        return false;
    };
    let (_, content_top, _, content_bottom) = content_edges(content);

    if top < content_top {
        *bounds = bounds.adjust_top(1);
        return true;
    }
    if bottom > content_bottom {
        *bounds = bounds.adjust_bottom(-1);
        return true;
    }
    false
}

fn remove_column(bounds: &mut GridBounds, content: GridBounds) -> bool {
    let GridBounds::Area { left, right, .. } = *bounds else {
        return false;
    };
    let (content_left, _, content_right, _) = content_edges(content);

    if right > content_right {
        *bounds = bounds.adjust_right(-1);
        return true;
    }
    if left < content_left {
        *bounds = bounds.adjust_left(1);
        return true;
    }
    false
}

impl FromIterator<Tile> for Drawing {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Drawing {
            grid: iter.into_iter().collect(),
        }
    }
}

impl From<Grid<Glyph>> for Drawing {
    fn from(grid: Grid<Glyph>) -> Self {
        Drawing { grid }
    }
}

impl FromStr for Drawing {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Drawing::from_text(s))
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}
