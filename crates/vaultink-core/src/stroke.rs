//! Committed ink strokes.

use crate::geometry::NormalizedPoint;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stroke.
///
/// Identity is what keeps duplicate-content strokes independent: the store
/// never dedupes by content.
pub type StrokeId = Uuid;

/// Serializable ink color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// One continuous pen-down-to-pen-up ink mark.
///
/// Points are stored in normalized space (divided by the canvas size at
/// commit time) and the width as a ratio of canvas width, so the mark is
/// independent of scroll position and canvas resize. A committed stroke is
/// immutable: the eraser replaces it with surviving fragments rather than
/// editing it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<NormalizedPoint>,
    color: InkColor,
    width_ratio: f64,
}

impl Stroke {
    /// Create a stroke from normalized points.
    pub fn new(points: Vec<NormalizedPoint>, color: InkColor, width_ratio: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color,
            width_ratio,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn color(&self) -> InkColor {
        self.color
    }

    /// Line width as a ratio of canvas width.
    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    /// Number of points in the stroke.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_identity() {
        let points = vec![NormalizedPoint::new(0.1, 0.2), NormalizedPoint::new(0.3, 0.4)];
        let a = Stroke::new(points.clone(), InkColor::black(), 0.01);
        let b = Stroke::new(points, InkColor::black(), 0.01);
        // Equal content, distinct strokes.
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_color_peniko_roundtrip() {
        let color = InkColor::new(142, 36, 170, 255);
        let back: InkColor = Color::from(color).into();
        assert_eq!(back, color);
    }
}
