//! Editing session
//!
//! The editor keeps the current drawing, the toolbox and the undo history in
//! observable stores, and exposes the commands a front end calls. A command
//! computes a whole new drawing and commits it; undoable commands push the
//! previous drawing onto the history first.

mod tool;
mod toolbox;

pub use tool::{Eraser, Paintbrush, Tool, ToolType};
pub use toolbox::{Toolbox, RECENT_GLYPH_LIMIT};

use tiledraw_core::{Drawing, DrawingSettings, Glyph, GridBounds, GridPosition};
use tiledraw_store::{Stack, Store, UNDO_STACK_LIMIT};

/// A drawing session
#[derive(Debug, Clone)]
pub struct Editor {
    drawing: Store<Drawing>,
    toolbox: Store<Toolbox>,
    history: Store<Stack<Drawing>>,
    settings: DrawingSettings,
}

impl Editor {
    /// Start with an empty drawing of the minimum size
    pub fn new(settings: DrawingSettings) -> Self {
        Editor {
            drawing: Store::new(blank_drawing(&settings)),
            toolbox: Store::new(Toolbox::default()),
            history: Store::new(Stack::new(UNDO_STACK_LIMIT)),
            settings,
        }
    }

    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    /// The current drawing
    pub fn drawing(&self) -> Drawing {
        self.drawing.get_state()
    }

    pub fn toolbox(&self) -> Toolbox {
        self.toolbox.get_state()
    }

    pub fn can_undo(&self) -> bool {
        self.history.with_state(|history| !history.is_empty())
    }

    pub fn drawing_store(&self) -> &Store<Drawing> {
        &self.drawing
    }

    pub fn toolbox_store(&self) -> &Store<Toolbox> {
        &self.toolbox
    }

    pub fn history_store(&self) -> &Store<Stack<Drawing>> {
        &self.history
    }

    pub fn activate_tool(&self, tool: ToolType) {
        if self.toolbox.with_state(|toolbox| toolbox.active_tool_type != tool) {
            log::debug!("activate tool {}", tool.name());
            self.toolbox.update(|toolbox| toolbox.with_active_tool(tool));
        }
    }

    /// Select a brush glyph; switches to the paintbrush
    pub fn pick_brush(&self, brush: Glyph) {
        log::debug!("pick brush {}", brush);
        self.toolbox.update(|toolbox| {
            toolbox
                .with_active_tool(ToolType::Paintbrush)
                .with_brush(brush)
        });
    }

    /// Apply the active tool at `position`
    pub fn apply_tool(&self, position: GridPosition) {
        let tool = self.toolbox.with_state(Toolbox::active_tool);
        let next = self
            .drawing
            .with_state(|drawing| tool.apply(drawing, position, &self.settings));
        log::debug!("apply {} at {}", tool.tool_type().name(), position);
        self.set_drawing_undoable(next);
    }

    /// Replace the drawing without recording history, and offer its glyphs
    /// as recent brushes
    pub fn load_drawing(&self, drawing: Drawing) {
        let glyphs = drawing.unique_glyphs();
        log::debug!("load drawing with {} unique glyphs", glyphs.len());
        self.drawing.set_state(drawing);
        self.toolbox.update(|toolbox| toolbox.with_recent(glyphs));
    }

    /// Restore the previous drawing. Returns false if there is nothing to undo.
    pub fn undo(&self) -> bool {
        let (history, popped) = self.history.with_state(Stack::popped);
        match popped {
            Some(previous) => {
                log::debug!("undo, {} steps left", history.len());
                self.drawing.set_state(previous);
                self.history.set_state(history);
                true
            }
            None => false,
        }
    }

    /// Start over with an empty drawing of the minimum size
    pub fn clear(&self) {
        log::debug!("clear drawing");
        self.set_drawing_undoable(blank_drawing(&self.settings));
    }

    fn set_drawing_undoable(&self, next: Drawing) {
        let current = self.drawing.state();
        if *current == next {
            return;
        }
        self.history.update(|history| history.pushed(Drawing::clone(&current)));
        self.drawing.set_state(next);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(DrawingSettings::default())
    }
}

fn blank_drawing(settings: &DrawingSettings) -> Drawing {
    Drawing::create_empty(GridBounds::from_size(settings.min_size))
}
