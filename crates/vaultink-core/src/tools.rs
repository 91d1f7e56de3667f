//! Pen and eraser tool state.

use crate::stroke::InkColor;
use serde::{Deserialize, Serialize};

/// Default pen width in canvas pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 6.0;

/// Pen colors offered by the writing toolbar.
pub const PALETTE: [InkColor; 6] = [
    InkColor::new(0, 0, 0, 255),     // black
    InkColor::new(0, 0, 255, 255),   // blue
    InkColor::new(255, 0, 0, 255),   // red
    InkColor::new(0, 255, 0, 255),   // green
    InkColor::new(142, 36, 170, 255), // purple
    InkColor::new(255, 152, 0, 255), // orange
];

/// Current pen settings.
///
/// Color and eraser mode are mutually exclusive: picking a color always
/// drops back to pen mode, while enabling the eraser keeps the color around
/// for when erasing is switched off again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    color: InkColor,
    stroke_width: f64,
    eraser: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: InkColor::black(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            eraser: false,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> InkColor {
        self.color
    }

    /// Pen width in canvas pixels.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    /// Select a pen color. Always leaves eraser mode.
    pub fn set_color(&mut self, color: InkColor) {
        self.color = color;
        self.eraser = false;
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.eraser = enabled;
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_color_leaves_eraser_mode() {
        let mut tool = ToolState::new();
        tool.set_eraser(true);
        assert!(tool.is_eraser());

        tool.set_color(PALETTE[2]);
        assert!(!tool.is_eraser());
        assert_eq!(tool.color(), PALETTE[2]);
    }

    #[test]
    fn test_eraser_keeps_color() {
        let mut tool = ToolState::new();
        tool.set_color(PALETTE[1]);
        tool.set_eraser(true);
        assert_eq!(tool.color(), PALETTE[1]);
    }
}
