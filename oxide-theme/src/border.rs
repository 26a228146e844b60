use serde::{Deserialize, Serialize};
use vello::peniko::Color;

/// A solid line border drawn inside a control's bounds.
///
/// A width of zero is an empty border: nothing is drawn but the control keeps its size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BorderSpec {
    /// Line color.
    #[serde(with = "crate::serde_color")]
    pub color: Color,
    /// Line width in pixels.
    #[serde(default)]
    pub width: i32,
}

impl BorderSpec {
    /// The empty border.
    pub const NONE: Self = Self {
        color: Color::TRANSPARENT,
        width: 0,
    };

    /// A one pixel line border of the given color.
    pub fn line(color: Color) -> Self {
        Self { color, width: 1 }
    }

    /// Whether this border draws anything.
    pub fn is_empty(&self) -> bool {
        self.width <= 0
    }
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self::NONE
    }
}
