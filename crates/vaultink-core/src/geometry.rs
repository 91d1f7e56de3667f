//! Coordinate spaces for the writing surface.
//!
//! Three spaces are in play while ink is captured: *view space* (pixels
//! relative to the visible widget), *document space* (pixels relative to the
//! top of the full scrollable page), and *normalized space* (document
//! coordinates divided by the canvas size at commit time, so stored ink
//! survives resizes and rotation). The page only scrolls vertically, so x is
//! shared between view and document space.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// A point in view space: pixels relative to the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in document space: pixels relative to the top of the scrollable
/// page, independent of the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentPoint {
    pub x: f64,
    pub y: f64,
}

impl DocumentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Divide componentwise by the canvas size.
    pub fn normalize(self, canvas: Size) -> NormalizedPoint {
        NormalizedPoint::new(self.x / canvas.width, self.y / canvas.height)
    }
}

/// A point in normalized space: document coordinates divided by the canvas
/// width and height. `y` may exceed 1.0 since the page is taller than one
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply componentwise by the canvas size.
    pub fn denormalize(self, canvas: Size) -> DocumentPoint {
        DocumentPoint::new(self.x * canvas.width, self.y * canvas.height)
    }

    /// Euclidean distance to another normalized point.
    pub fn distance(self, other: NormalizedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The live view state: canvas size plus the vertical scroll position.
///
/// All conversions between view and document space are keyed on this value,
/// so a stale scroll offset can never leak into stored ink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas size in pixels.
    pub size: Size,
    /// Pixels scrolled down from the top of the document.
    pub scroll_offset: f64,
}

impl Viewport {
    /// Create a viewport with no scroll offset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll_offset: 0.0,
        }
    }

    /// Return this viewport scrolled to the given offset.
    pub fn with_scroll(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Convert a view-space point to document space.
    pub fn to_document(&self, point: ViewPoint) -> DocumentPoint {
        DocumentPoint::new(point.x, point.y + self.scroll_offset)
    }

    /// Convert a document-space point to view space.
    pub fn to_view(&self, point: DocumentPoint) -> ViewPoint {
        ViewPoint::new(point.x, point.y - self.scroll_offset)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
