//! Glyph representation
//!
//! A glyph is the content of one drawing cell: either nothing, or a single
//! grapheme cluster (a character, or an emoji that may span several code
//! points).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::error::Error;

/// Offset from printable ASCII to the Fullwidth Forms block
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Content of a single drawing cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Glyph {
    /// Empty cell
    #[default]
    None,
    /// A single grapheme cluster
    Grapheme(String),
}

impl Glyph {
    /// Literal that stands for an explicit blank cell in text form
    pub const SPACE: &'static str = "\u{3000}";

    /// Alternative rendering for empty cells
    pub const WHITE_SQUARE: &'static str = "\u{2B1C}";

    /// Create a glyph from one grapheme cluster.
    ///
    /// Only the first cluster of `grapheme` is kept. Empty or whitespace
    /// input becomes [`Glyph::None`].
    pub fn from_grapheme(grapheme: &str) -> Self {
        match grapheme.graphemes(true).next() {
            Some(first) if !first.trim().is_empty() => Glyph::Grapheme(first.to_string()),
            _ => Glyph::None,
        }
    }

    /// Split a row of text into glyphs, one per grapheme cluster.
    ///
    /// The blank literal is read as an empty cell.
    pub fn split_row(row: &str) -> Vec<Glyph> {
        let row = row.replace(Self::SPACE, " ");
        row.graphemes(true).map(Glyph::from_grapheme).collect()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Glyph::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Glyph::Grapheme(s) => Some(s),
            Glyph::None => None,
        }
    }

    /// Display width in terminal columns
    pub fn width(&self) -> usize {
        match self {
            Glyph::Grapheme(s) => s.width(),
            Glyph::None => 0,
        }
    }

    /// Widen a narrow ASCII glyph to its Fullwidth Forms counterpart.
    ///
    /// Glyphs that are already wide, and emoji, pass through unchanged.
    pub fn to_full_width(&self) -> String {
        let Glyph::Grapheme(s) = self else {
            return String::new();
        };

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if s.width() == 1 && ('!'..='~').contains(&c) => {
                char::from_u32(c as u32 + FULL_WIDTH_OFFSET)
                    .map(String::from)
                    .unwrap_or_else(|| s.clone())
            }
            _ => s.clone(),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Grapheme(s) => f.write_str(s),
            Glyph::None => Ok(()),
        }
    }
}

/// Strict parse: fails unless the input is at most one grapheme cluster
impl FromStr for Glyph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.graphemes(true).nth(1).is_some() {
            return Err(Error::InvalidGlyph(s.to_string()));
        }
        Ok(Glyph::from_grapheme(s))
    }
}

impl From<&str> for Glyph {
    fn from(s: &str) -> Self {
        Glyph::from_grapheme(s)
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Glyph::from_grapheme(c.encode_utf8(&mut [0; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_default_is_empty() {
        assert!(Glyph::default().is_empty());
        assert_eq!(Glyph::default().as_str(), None);
    }

    #[test]
    fn test_from_grapheme_normalizes_blank() {
        assert!(Glyph::from_grapheme("").is_empty());
        assert!(Glyph::from_grapheme(" ").is_empty());
        assert!(Glyph::from_grapheme(Glyph::SPACE).is_empty());
        assert_eq!(Glyph::from_grapheme("a"), Glyph::Grapheme("a".to_string()));
    }

    #[test]
    fn test_split_row_keeps_emoji_together() {
        // Family emoji is several code points joined with ZWJ
        let row = "a👨‍👩‍👧🏳️‍🌈";
        let glyphs = Glyph::split_row(row);
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[1].as_str(), Some("👨‍👩‍👧"));
        assert_eq!(glyphs[2].as_str(), Some("🏳️‍🌈"));
    }

    #[test]
    fn test_split_row_blank_literal() {
        let row = format!("😀{}😀 ", Glyph::SPACE);
        let glyphs = Glyph::split_row(&row);
        assert_eq!(glyphs.len(), 4);
        assert!(glyphs[1].is_empty());
        assert!(glyphs[3].is_empty());
    }

    #[test]
    fn test_to_full_width() {
        assert_eq!(Glyph::from('A').to_full_width(), "Ａ");
        assert_eq!(Glyph::from('!').to_full_width(), "！");
        assert_eq!(Glyph::from('~').to_full_width(), "～");
        assert_eq!(Glyph::from("😀").to_full_width(), "😀");
        assert_eq!(Glyph::from("Ａ").to_full_width(), "Ａ");
        assert_eq!(Glyph::from('é').to_full_width(), "é");
        assert_eq!(Glyph::None.to_full_width(), "");
    }

    #[test]
    fn test_glyph_width() {
        assert_eq!(Glyph::from('a').width(), 1);
        assert_eq!(Glyph::from("😀").width(), 2);
        assert_eq!(Glyph::None.width(), 0);
    }

    #[test]
    fn test_from_grapheme_keeps_first_cluster() {
        assert_eq!(Glyph::from("ab"), Glyph::from('a'));
        assert_eq!(Glyph::from("👨‍👩‍👧🐱").as_str(), Some("👨‍👩‍👧"));
        assert_eq!(Glyph::from(" a"), Glyph::None);
    }

    #[test]
    fn test_parse_rejects_several_clusters() {
        assert_eq!("🌲".parse::<Glyph>().unwrap(), Glyph::from("🌲"));
        assert_eq!("".parse::<Glyph>().unwrap(), Glyph::None);
        assert!(matches!("ab".parse::<Glyph>(), Err(Error::InvalidGlyph(_))));
    }
}
