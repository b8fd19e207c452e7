//! Batch transformations applied by the command line tool
//!
//! Operations run in a fixed order: crop, pad, fit, background. Each step
//! takes the previous drawing and returns a new one.

use tiledraw_core::{Drawing, DrawingSettings, DrawingSnapshot, Glyph, Result};

use crate::config::CliArgs;

/// Which transformations to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operations {
    pub crop: bool,
    pub pad: bool,
    pub fit: bool,
    pub background: Option<Glyph>,
}

impl Operations {
    pub fn apply(&self, drawing: Drawing, settings: &DrawingSettings) -> Drawing {
        let mut drawing = drawing;
        if self.crop {
            drawing = drawing.cropped_to_content(settings.min_size);
            log::debug!("cropped to {:?}", drawing.bounds());
        }
        if self.pad {
            drawing = drawing.padded_to(settings.min_size);
            log::debug!("padded to {:?}", drawing.bounds());
        }
        if self.fit {
            drawing = drawing.expanded_to(drawing.padded_bounds(settings));
            log::debug!("fit to {:?}", drawing.bounds());
        }
        if let Some(background) = &self.background {
            drawing = drawing.with_background(background.clone());
        }
        drawing
    }
}

impl From<&CliArgs> for Operations {
    fn from(args: &CliArgs) -> Self {
        Operations {
            crop: args.crop,
            pad: args.pad,
            fit: args.fit,
            background: args.background.clone(),
        }
    }
}

/// How to print the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text { white_squares: bool },
    Json,
    Glyphs,
}

impl OutputFormat {
    pub fn render(self, drawing: &Drawing) -> Result<String> {
        let output = match self {
            OutputFormat::Text { white_squares } => drawing.to_text(white_squares),
            OutputFormat::Json => DrawingSnapshot::from_drawing(drawing).to_json()?,
            OutputFormat::Glyphs => drawing
                .unique_glyphs()
                .iter()
                .map(Glyph::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiledraw_core::{GridBounds, GridPosition, Size};

    #[test]
    fn test_no_operations_is_identity() {
        let drawing = Drawing::from_text("😀 \n 🐱");
        let result = Operations::default().apply(drawing.clone(), &DrawingSettings::default());
        assert_eq!(result, drawing);
    }

    #[test]
    fn test_crop_then_pad() {
        let settings = DrawingSettings::new(Size::new(3, 3), Size::new(16, 12));
        let drawing = Drawing::create_empty(GridBounds::from_size(Size::new(6, 6)))
            .with_glyph_at(GridPosition::new(5, 5), Glyph::from("😀"));
        let ops = Operations {
            crop: true,
            pad: true,
            ..Default::default()
        };

        let result = ops.apply(drawing, &settings);
        assert_eq!(result.bounds().size(), Size::new(3, 3));
        assert_eq!(result.content_bounds(), GridBounds::new(GridPosition::new(5, 5), GridPosition::new(5, 5)));
    }

    #[test]
    fn test_background_from_args() {
        let args = CliArgs {
            background: Some(Glyph::from("🌲")),
            ..Default::default()
        };
        let ops = Operations::from(&args);
        let result = ops.apply(Drawing::from_text("😀 "), &DrawingSettings::default());
        assert_eq!(result.to_text(false), "😀🌲");
    }

    #[test]
    fn test_background_keeps_rows_aligned() {
        let drawing = Drawing::from_text("😀 ");
        let ops = Operations {
            background: Some(Glyph::from("ab")),
            ..Default::default()
        };
        let result = ops.apply(drawing, &DrawingSettings::default());
        let text = result.to_text(false);
        assert_eq!(text, "😀ａ");
        assert_eq!(Drawing::from_text(&text).bounds(), result.bounds());
    }

    #[test]
    fn test_render_formats() {
        let drawing = Drawing::from_text("😀 😀");
        assert_eq!(
            OutputFormat::Text { white_squares: true }.render(&drawing).unwrap(),
            "😀⬜😀"
        );
        assert_eq!(OutputFormat::Glyphs.render(&drawing).unwrap(), "😀");
        assert!(OutputFormat::Json
            .render(&drawing)
            .unwrap()
            .contains("\"width\": 3"));
    }
}
