//! Width by height measured in cells

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// True if both dimensions are at least those of `other`
    pub fn covers(&self, other: Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = Error;

    /// Parse `"WxH"`, e.g. `"16x12"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSize(s.to_string());
        let (width, height) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;
        Ok(Size::new(width, height))
    }
}
