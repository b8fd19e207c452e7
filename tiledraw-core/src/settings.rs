//! Size limits for drawings

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::size::Size;

/// Default smallest drawing
pub const DEFAULT_MIN_SIZE: Size = Size::new(3, 3);

/// Default largest drawing
pub const DEFAULT_MAX_SIZE: Size = Size::new(16, 12);

/// Smallest and largest allowed drawing size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingSettings {
    #[serde(default = "default_min_size")]
    pub min_size: Size,
    #[serde(default = "default_max_size")]
    pub max_size: Size,
}

fn default_min_size() -> Size {
    DEFAULT_MIN_SIZE
}
fn default_max_size() -> Size {
    DEFAULT_MAX_SIZE
}

impl Default for DrawingSettings {
    fn default() -> Self {
        DrawingSettings {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl DrawingSettings {
    pub fn new(min_size: Size, max_size: Size) -> Self {
        DrawingSettings { min_size, max_size }
    }

    /// Check the preconditions the drawing operations assume: positive
    /// sizes and `min_size <= max_size` on both axes.
    pub fn validate(&self) -> Result<()> {
        if self.min_size.width < 1 || self.min_size.height < 1 {
            return Err(Error::InvalidSettings {
                field: "min_size".to_string(),
                message: format!("must be at least 1x1, got {}", self.min_size),
            });
        }
        if !self.max_size.covers(self.min_size) {
            return Err(Error::InvalidSettings {
                field: "max_size".to_string(),
                message: format!(
                    "must be at least min_size {}, got {}",
                    self.min_size, self.max_size
                ),
            });
        }
        Ok(())
    }
}
