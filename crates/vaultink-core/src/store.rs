//! The canonical, device-independent record of all ink.
//!
//! The store owns the committed stroke sequence (append order = z-order),
//! the redo buffer, the in-progress draft, and the tool state. Canvas size
//! is passed into the operations that need it rather than cached here, so
//! commit-time normalization can never see a stale size.

use crate::eraser;
use crate::geometry::DocumentPoint;
use crate::stroke::{InkColor, Stroke};
use crate::tools::ToolState;
use kurbo::Size;

/// A change to the committed stroke set, delivered to subscribers.
///
/// Draft-only operations (`start_stroke`, `add_point`) never produce a
/// change: the surface already repaints on every pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// An in-progress stroke was committed.
    Committed,
    /// The last-committed stroke moved to the redo buffer.
    Undone,
    /// A stroke was restored from the redo buffer.
    Redone,
    /// The eraser removed or split a stroke.
    Erased,
}

type ChangeListener = Box<dyn Fn(StoreChange)>;

/// Stroke store for one editing session (one open question).
///
/// Every operation is total: undo with nothing to undo, redo with an empty
/// buffer, a commit with no draft points, or an erase that reaches nothing
/// are all silent no-ops, never errors.
#[derive(Default)]
pub struct InkStore {
    strokes: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
    draft: Vec<DocumentPoint>,
    tool: ToolState,
    listeners: Vec<ChangeListener>,
}

impl InkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener. All subscribers are notified,
    /// synchronously and in subscription order, after every mutation of the
    /// committed set.
    pub fn subscribe(&mut self, listener: impl Fn(StoreChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, change: StoreChange) {
        for listener in &self.listeners {
            listener(change);
        }
    }

    /* ---------- Tool state ---------- */

    pub fn tool(&self) -> ToolState {
        self.tool
    }

    /// Select a pen color; always leaves eraser mode.
    pub fn set_color(&mut self, color: InkColor) {
        self.tool.set_color(color);
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.tool.set_eraser(enabled);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.tool.set_stroke_width(width);
    }

    /* ---------- Drawing lifecycle ---------- */

    /// Begin a new in-progress stroke at `point`, discarding any previous
    /// draft.
    pub fn start_stroke(&mut self, point: DocumentPoint) {
        self.draft.clear();
        self.draft.push(point);
    }

    /// Append a document-space point to the draft. The surface throttles
    /// sampling; the store accepts every point it is given.
    pub fn add_point(&mut self, point: DocumentPoint) {
        self.draft.push(point);
    }

    /// Commit the draft as a stroke, normalizing against the given canvas
    /// size. No-op when the draft is empty.
    ///
    /// A one-point draft (tap with no movement) is committed too: it renders
    /// nothing but occupies one undo slot, matching the rest of the history
    /// behavior.
    pub fn end_stroke(&mut self, canvas: Size) {
        if self.draft.is_empty() {
            return;
        }

        let points = self
            .draft
            .drain(..)
            .map(|p| p.normalize(canvas))
            .collect::<Vec<_>>();
        let width_ratio = self.tool.stroke_width() / canvas.width;

        log::debug!("committing stroke with {} points", points.len());
        self.strokes
            .push(Stroke::new(points, self.tool.color(), width_ratio));
        self.redo_stack.clear();
        self.notify(StoreChange::Committed);
    }

    /* ---------- Undo / Redo ---------- */

    /// Move the last-committed stroke to the redo buffer.
    pub fn undo(&mut self) {
        if let Some(stroke) = self.strokes.pop() {
            log::debug!("undo stroke {}", stroke.id());
            self.redo_stack.push(stroke);
            self.notify(StoreChange::Undone);
        }
    }

    /// Restore the most recently undone stroke.
    pub fn redo(&mut self) {
        if let Some(stroke) = self.redo_stack.pop() {
            log::debug!("redo stroke {}", stroke.id());
            self.strokes.push(stroke);
            self.notify(StoreChange::Redone);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /* ---------- Eraser ---------- */

    /// Apply one eraser sample at a document-space point.
    ///
    /// At most one stroke (the earliest-drawn in reach) is removed or split
    /// per call. A hit clears the redo buffer; erased ink is not
    /// recoverable.
    pub fn erase_at(&mut self, point: DocumentPoint, canvas: Size) {
        let center = point.normalize(canvas);
        if let Some(strokes) = eraser::erase_at(&self.strokes, center) {
            log::debug!(
                "erase at ({:.3}, {:.3}): {} -> {} strokes",
                center.x,
                center.y,
                self.strokes.len(),
                strokes.len()
            );
            self.strokes = strokes;
            self.redo_stack.clear();
            self.notify(StoreChange::Erased);
        }
    }

    /* ---------- Access for drawing ---------- */

    /// Committed strokes in z-order (earliest first).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Document-space points of the stroke being drawn, if any.
    pub fn draft_points(&self) -> &[DocumentPoint] {
        &self.draft
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
